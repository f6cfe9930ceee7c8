use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Database file could not be opened, read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("snippet {0} not found")]
    NotFound(i64),

    /// A value was rejected by the table schema (NOT NULL / CHECK).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("clipboard is not supported on {0}")]
    UnsupportedPlatform(String),

    #[error("clipboard command failed: {0}")]
    ExecutionFailure(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(rusqlite::ErrorCode::ConstraintViolation) => {
                Error::ConstraintViolation(err.to_string())
            }
            _ => Error::StorageUnavailable(err.to_string()),
        }
    }
}
