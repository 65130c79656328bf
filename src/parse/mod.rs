use winnow::{
    combinator::opt,
    token::{one_of, take_till},
    ModalResult, Parser,
};

type Input<'a, 'b> = &'a mut &'b [u8];

/// Splits `input` into the tokens separated by any byte of `delimiters`.
///
/// Works on raw bytes so that directory names need not be UTF-8. Empty tokens
/// are kept: `a;;b` yields `a`, an empty token and `b`, and a trailing
/// delimiter yields a final empty token.
pub(crate) fn tokens<'a>(input: &'a [u8], delimiters: &'a [u8]) -> Tokens<'a> {
    Tokens {
        cursor: Some(input),
        delimiters,
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Tokens<'a> {
    cursor: Option<&'a [u8]>,
    delimiters: &'a [u8],
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        next_token(&mut self.cursor, self.delimiters)
    }
}

/// Takes the next token off `cursor`.
///
/// `None` in the cursor marks the end of input: once there, no token is
/// produced. Otherwise the cursor moves past the delimiter that ended the
/// token, or becomes `None` when the token ran to the end of the input.
pub(crate) fn next_token<'i>(
    cursor: &mut Option<&'i [u8]>,
    delimiters: &[u8],
) -> Option<&'i [u8]> {
    let mut input = (*cursor)?;
    match token(&mut input, delimiters) {
        Ok((token, Some(_))) => {
            *cursor = Some(input);
            Some(token)
        }
        Ok((token, None)) => {
            *cursor = None;
            Some(token)
        }
        // `take_till(0..)` on a complete input cannot fail
        Err(_) => {
            *cursor = None;
            None
        }
    }
}

fn token<'i>(input: Input<'_, 'i>, delimiters: &[u8]) -> ModalResult<(&'i [u8], Option<u8>)> {
    let is_delimiter = |b: u8| delimiters.contains(&b);
    (take_till(0.., is_delimiter), opt(one_of(is_delimiter))).parse_next(input)
}
