//! spam-filter: Naive Bayes spam detection for short messages
//!
//! Classifies a message as spam or ham and reports the probability of the
//! winning class.
//!
//! # Features
//!
//! - **Normalizer**: lowercase, punctuation/digit stripping, stop-word and short-token filtering
//! - **Classifier**: multinomial Naive Bayes with Laplace smoothing, scored in log space
//! - **Lifecycle**: lazily trained once per process, read-only afterwards
//! - **Persistence**: lossless JSON snapshots of the trained word tables
//! - **API**: `/check_spam` and `/health` over HTTP
//!
//! # Example
//!
//! ```
//! use spam_filter::Label;
//!
//! let prediction = spam_filter::predict("free money now click here urgent").unwrap();
//! assert_eq!(prediction.label, Label::Spam);
//! assert!(prediction.probability > 0.5);
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: normalization, training and scoring
//! - [`persistence`]: model snapshots
//! - [`api`]: HTTP endpoints
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod persistence;

// Re-export commonly used types
pub use crate::classifier::{Label, NaiveBayesModel, Prediction, ProbabilityMode, SpamFilter};
pub use crate::config::Config;
pub use crate::error::{Result, SpamError};

/// Train the process-wide filter; a no-op once it is trained
pub fn train() -> Result<()> {
    classifier::global().train().map(|_| ())
}

/// Classify a message with the process-wide filter, training it first if needed
pub fn predict(text: &str) -> Result<Prediction> {
    classifier::global().predict(text)
}
