//! Error handling for the job matcher application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No resume analysis available: {0}")]
    MissingResumeAnalysis(String),

    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Matching failed: {0}")]
    MatchingFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, JobMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for JobMatcherError {
    fn from(err: anyhow::Error) -> Self {
        JobMatcherError::MatchingFailed(err.to_string())
    }
}
