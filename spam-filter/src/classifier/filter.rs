//! Lazily trained spam filter
//!
//! `SpamFilter` wraps a `NaiveBayesModel` behind a once-only initializer:
//! the first `train` or `predict` call builds the word tables, concurrent
//! first callers block until that single training run finishes, and every
//! later call reads the finished tables without locking.

use once_cell::sync::{Lazy, OnceCell};
use tracing::{debug, info};

use super::corpus::TRAINING_CORPUS;
use super::model::NaiveBayesModel;
use super::normalizer::normalize;
use super::types::{ModelStats, Prediction, ProbabilityMode, TrainingExample};
use crate::error::Result;

static GLOBAL_FILTER: Lazy<SpamFilter> = Lazy::new(SpamFilter::new);

/// Process-wide filter shared by `crate::train` and `crate::predict`
pub fn global() -> &'static SpamFilter {
    &GLOBAL_FILTER
}

/// Spam filter with at-most-once training
pub struct SpamFilter {
    model: OnceCell<NaiveBayesModel>,
    corpus: &'static [TrainingExample],
    mode: ProbabilityMode,
}

impl SpamFilter {
    /// Create an untrained filter over the built-in corpus
    pub fn new() -> Self {
        Self::with_mode(ProbabilityMode::default())
    }

    /// Create an untrained filter with a specific probability mode
    pub fn with_mode(mode: ProbabilityMode) -> Self {
        Self::with_corpus(&TRAINING_CORPUS, mode)
    }

    /// Create an untrained filter over a custom corpus
    pub fn with_corpus(corpus: &'static [TrainingExample], mode: ProbabilityMode) -> Self {
        Self {
            model: OnceCell::new(),
            corpus,
            mode,
        }
    }

    /// Wrap an already trained model (e.g. restored from a snapshot)
    pub fn from_model(model: NaiveBayesModel, mode: ProbabilityMode) -> Self {
        Self {
            model: OnceCell::with_value(model),
            corpus: &TRAINING_CORPUS,
            mode,
        }
    }

    /// Train on the corpus unless already trained; later calls are no-ops
    pub fn train(&self) -> Result<&NaiveBayesModel> {
        self.model.get_or_try_init(|| {
            let model = NaiveBayesModel::train(self.corpus)?;
            let (spam, ham) = model.example_counts();
            info!(
                "Trained spam filter: {} spam, {} ham, {} vocabulary tokens",
                spam,
                ham,
                model.vocabulary().len()
            );
            Ok(model)
        })
    }

    pub fn is_trained(&self) -> bool {
        self.model.get().is_some()
    }

    /// Trained model, if training has happened
    pub fn model(&self) -> Option<&NaiveBayesModel> {
        self.model.get()
    }

    pub fn mode(&self) -> ProbabilityMode {
        self.mode
    }

    /// Classify a message, training first if needed
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let model = self.train()?;
        let tokens = normalize(text);
        let prediction = model.predict_tokens(&tokens, self.mode)?;

        debug!(
            "Classified message as {} (p={:.4}, {} tokens)",
            prediction.label,
            prediction.probability,
            tokens.len()
        );

        Ok(prediction)
    }

    /// Model statistics, training first if needed
    pub fn stats(&self) -> Result<ModelStats> {
        self.train()?.stats()
    }
}

impl Default for SpamFilter {
    fn default() -> Self {
        Self::new()
    }
}
