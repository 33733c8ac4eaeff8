//! Error types for spam-filter

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, SpamError>;

/// Spam filter error types
#[derive(Error, Debug)]
pub enum SpamError {
    /// Caller passed missing or unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Scoring was attempted with no training examples
    #[error("Model has no training examples")]
    UntrainedState,

    /// Training data is empty or lacks one of the classes
    #[error("Training corpus must contain at least one spam and one ham example")]
    EmptyCorpus,

    /// Converting log scores back to a probability underflowed or overflowed
    #[error("Numeric instability normalizing scores (spam: {spam_score}, ham: {ham_score})")]
    NumericInstability { spam_score: f64, ham_score: f64 },

    /// Persisted model failed validation
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
