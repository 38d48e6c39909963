use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotezError {
    #[error("failed to read quotes file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode quotes from {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no quotes found in {}", .path.display())]
    EmptyStore { path: PathBuf },

    #[error("no quotes available to choose from")]
    EmptyInput,

    #[error("failed to write quotes file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid quote: {0}")]
    InvalidQuote(String),

    #[error("failed to read input: {source}")]
    Input {
        #[source]
        source: std::io::Error,
    },
}

impl QuotezError {
    /// True when the store file simply does not exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            QuotezError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, QuotezError>;
