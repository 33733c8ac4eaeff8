//! Spam classification module
//!
//! Provides text normalization and a Naive Bayes classifier trained on a
//! fixed built-in corpus.

pub mod corpus;
pub mod evaluation;
pub mod filter;
pub mod model;
pub mod normalizer;
pub mod types;

pub use corpus::TRAINING_CORPUS;
pub use evaluation::{evaluate, ClassReport, ConfusionMatrix, Evaluation};
pub use filter::{global, SpamFilter};
pub use model::NaiveBayesModel;
pub use normalizer::normalize;
pub use types::*;
