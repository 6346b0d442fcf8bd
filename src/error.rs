//! Error handling for the ats-match application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No stored session: {0}")]
    NoSession(String),
}

pub type Result<T> = std::result::Result<T, AtsMatchError>;
