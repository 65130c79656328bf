use std::{borrow::Cow, ffi::OsStr, path::Path};

/// Separator used to build candidates from a search directory and a name.
pub(crate) const DIR_SEPARATOR: &[u8] = b"\\";

/// Delimiter between directories in the search path.
pub(crate) const PATH_DELIMITER: &[u8] = b";";

/// Raw bytes of an OS string, without any lossy conversion on Unix.
#[cfg(unix)]
pub(crate) fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
pub(crate) fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Path named by the raw bytes of a candidate.
#[cfg(unix)]
pub(crate) fn bytes_path(bytes: &[u8]) -> Cow<'_, Path> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(Path::new(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
pub(crate) fn bytes_path(bytes: &[u8]) -> Cow<'_, Path> {
    Cow::Owned(String::from_utf8_lossy(bytes).into_owned().into())
}

/// Whether `name` names a file through a directory rather than a bare command.
pub(crate) fn has_separator(name: &[u8]) -> bool {
    name.iter().any(|&b| b == b'/' || b == b'\\')
}

/// Concatenates `parts`, or returns `None` when the result would not fit in a
/// buffer of `max` bytes (one byte is kept for the terminator).
pub(crate) fn join_within(parts: &[&[u8]], max: usize) -> Option<Vec<u8>> {
    let len: usize = parts.iter().map(|part| part.len()).sum();
    if len >= max {
        return None;
    }
    Some(parts.concat())
}

/// Rewrites a Windows path such as `C:\foo\bar` into the MSYS form `/c/foo/bar`.
pub(crate) fn to_unix_path(path: &[u8]) -> Vec<u8> {
    let mut rewritten = match path {
        [drive, b':', rest @ ..] if drive.is_ascii_alphabetic() => {
            let mut rewritten = vec![b'/', drive.to_ascii_lowercase()];
            rewritten.extend_from_slice(rest);
            rewritten
        }
        _ => path.to_vec(),
    };
    rewritten
        .iter_mut()
        .filter(|b| **b == b'\\')
        .for_each(|b| *b = b'/');
    rewritten
}
