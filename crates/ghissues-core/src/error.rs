use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("error parsing JSON file: {0}")]
    MalformedInput(#[source] serde_json::Error),

    #[error("missing field '{key}' in {location}")]
    MissingField { key: String, location: String },

    #[error("field '{key}' in {location} must be {expected}")]
    InvalidField {
        key: String,
        location: String,
        expected: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IssueError>;
