//! Classifier types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class assigned to a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Unsolicited message
    Spam,
    /// Legitimate message
    Ham,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, Label::Spam)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A labelled training message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingExample {
    pub text: &'static str,
    pub label: Label,
}

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Winning class
    pub label: Label,
    /// Normalized probability of the winning class, in (0, 1]
    pub probability: f64,
}

/// How the final log scores are converted back into a probability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityMode {
    /// `1 / (1 + exp(loser - winner))`, safe for any input length
    #[default]
    LogSumExp,
    /// `exp(winner) / (exp(spam) + exp(ham))`; fails on underflow
    Naive,
}

/// Summary of a trained model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStats {
    /// Spam examples seen during training
    pub spam_examples: u64,
    /// Ham examples seen during training
    pub ham_examples: u64,
    /// Distinct tokens across both classes
    pub vocabulary_size: usize,
    /// Sum of all spam token counts
    pub spam_words: u64,
    /// Sum of all ham token counts
    pub ham_words: u64,
    /// P(spam)
    pub spam_prior: f64,
    /// P(ham)
    pub ham_prior: f64,
}
