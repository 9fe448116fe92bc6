use std::io;

/// Message reported whenever the persisted task list cannot be parsed
pub const TASK_LIST_PARSE_MESSAGE: &str =
    "Failed to parse json file, possibly due to comments or trailing commas.";

/// Errors that can occur during cppbuild operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", TASK_LIST_PARSE_MESSAGE)]
    TaskListParseError,

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Watch error: {0}")]
    WatchError(#[from] notify::Error),
}

/// Result type alias for cppbuild operations
pub type Result<T> = std::result::Result<T, Error>;
