//! Alert store errors

use std::path::PathBuf;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize alert data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}
