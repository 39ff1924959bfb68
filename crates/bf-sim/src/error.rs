use bf_core::BfError;
use thiserror::Error;

/// Errors raised while loading a scenario file.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("scenario parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("invalid array on line {line}: {source}")]
    InvalidArray {
        line:   u64,
        #[source]
        source: BfError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LoaderResult<T> = Result<T, LoaderError>;
