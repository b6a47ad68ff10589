//! Error types for suffix index construction and export

use thiserror::Error;

/// Errors that can occur while building or exporting a suffix index
#[derive(Error, Debug)]
pub enum Error {
    #[error("text contains the reserved sentinel character at offset {position}")]
    ReservedSentinel { position: usize },

    #[error("text has {len} characters, configured limit is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for suffix index operations
pub type Result<T> = std::result::Result<T, Error>;
