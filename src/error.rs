//! Error type shared by the generator core and its front ends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Empty character pool or a length outside the supported range.
    /// This is the only error the generator core returns.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings format error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("terminal error: {0}")]
    Terminal(String),
}

impl Error {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_))
    }

    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidConfiguration(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
