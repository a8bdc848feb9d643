// errors.rs
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Task execution error: {0}")]
    TaskError(#[from] JoinError),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid import data: {0}")]
    InvalidImport(String),
}

// Result alias with the crate's error type
pub type Result<T> = std::result::Result<T, JournalError>;
