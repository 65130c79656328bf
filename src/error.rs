use thiserror::Error;

#[derive(Debug, Error)]
pub enum WhichError {
    #[error("environment variable `{0}` is not set")]
    MissingPath(&'static str),
}
