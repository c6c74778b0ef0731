// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocrefError>;

#[derive(Error, Debug)]
pub enum DocrefError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Front matter error: {0}")]
    FrontmatterParse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid selection '{input}': expected a number between 0 and {}", .count.saturating_sub(1))]
    InvalidSelection { input: String, count: usize },

    #[error("Failed to open {path}: {message}")]
    Open { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DocrefError {
    fn from(err: serde_json::Error) -> Self {
        DocrefError::Serialization(err.to_string())
    }
}
