// crates/flagcolors-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, joining or writing the flag color datasets.
#[derive(Debug, Error)]
pub enum FlagColorsError {
    /// An input file could not be opened.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON parsed, but a record lacks a field the join depends on.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, FlagColorsError>;
