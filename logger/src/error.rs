use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("'{0}' is not a known severity")]
    InvalidSeverity(String),
    #[error("could not recover a severity from stored line {0:?}")]
    Parse(String),
    #[error("log file '{}' does not exist", .0.display())]
    FileNotFound(PathBuf),
    #[error("An IO error occurred. {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "structured")]
    #[error("malformed structured record. {0}")]
    Record(#[from] serde_json::Error),
}
