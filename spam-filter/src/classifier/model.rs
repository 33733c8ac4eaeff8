//! Multinomial Naive Bayes model
//!
//! Holds per-class token counts built from the normalized training corpus
//! and scores new token sequences in log space with add-one smoothing.

use std::collections::{HashMap, HashSet};

use super::normalizer::normalize;
use super::types::{Label, ModelStats, Prediction, ProbabilityMode, TrainingExample};
use crate::error::{Result, SpamError};

/// Trained word tables and example counts
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveBayesModel {
    spam_words: HashMap<String, u64>,
    ham_words: HashMap<String, u64>,
    spam_examples: u64,
    ham_examples: u64,
    vocabulary: HashSet<String>,
}

impl NaiveBayesModel {
    /// Build word tables from labelled examples, in order
    pub fn train(examples: &[TrainingExample]) -> Result<Self> {
        let mut model = Self {
            spam_words: HashMap::new(),
            ham_words: HashMap::new(),
            spam_examples: 0,
            ham_examples: 0,
            vocabulary: HashSet::new(),
        };

        for example in examples {
            model.learn(example.text, example.label);
        }

        // An empty vocabulary would zero the smoothing denominator
        if model.spam_examples == 0 || model.ham_examples == 0 || model.vocabulary.is_empty() {
            return Err(SpamError::EmptyCorpus);
        }

        Ok(model)
    }

    /// Rebuild a model from previously trained parts
    pub(crate) fn from_parts(
        spam_words: HashMap<String, u64>,
        ham_words: HashMap<String, u64>,
        spam_examples: u64,
        ham_examples: u64,
        vocabulary: HashSet<String>,
    ) -> Self {
        Self {
            spam_words,
            ham_words,
            spam_examples,
            ham_examples,
            vocabulary,
        }
    }

    fn learn(&mut self, text: &str, label: Label) {
        let tokens = normalize(text);
        let table = match label {
            Label::Spam => {
                self.spam_examples += 1;
                &mut self.spam_words
            }
            Label::Ham => {
                self.ham_examples += 1;
                &mut self.ham_words
            }
        };

        for token in tokens {
            *table.entry(token.clone()).or_insert(0) += 1;
            self.vocabulary.insert(token);
        }
    }

    /// Normalize and classify a message
    pub fn predict(&self, text: &str, mode: ProbabilityMode) -> Result<Prediction> {
        self.predict_tokens(&normalize(text), mode)
    }

    /// Classify an already-normalized token sequence
    pub fn predict_tokens(&self, tokens: &[String], mode: ProbabilityMode) -> Result<Prediction> {
        let (spam_score, ham_score) = self.log_scores(tokens)?;
        resolve(spam_score, ham_score, mode)
    }

    /// Unnormalized log posteriors `(spam, ham)` for a token sequence
    pub fn log_scores(&self, tokens: &[String]) -> Result<(f64, f64)> {
        let (spam_prior, ham_prior) = self.priors()?;

        let mut spam_score = spam_prior.ln();
        let mut ham_score = ham_prior.ln();

        let spam_total = self.spam_word_total() as f64;
        let ham_total = self.ham_word_total() as f64;
        let vocab_size = self.vocabulary.len() as f64;

        for token in tokens {
            let spam_count = self.spam_words.get(token).copied().unwrap_or(0) as f64;
            let ham_count = self.ham_words.get(token).copied().unwrap_or(0) as f64;

            // Laplace smoothing
            spam_score += ((spam_count + 1.0) / (spam_total + vocab_size)).ln();
            ham_score += ((ham_count + 1.0) / (ham_total + vocab_size)).ln();
        }

        Ok((spam_score, ham_score))
    }

    /// Class priors `(P(spam), P(ham))`
    pub fn priors(&self) -> Result<(f64, f64)> {
        let total = self.spam_examples + self.ham_examples;
        if total == 0 {
            return Err(SpamError::UntrainedState);
        }

        let total = total as f64;
        Ok((
            self.spam_examples as f64 / total,
            self.ham_examples as f64 / total,
        ))
    }

    pub fn spam_words(&self) -> &HashMap<String, u64> {
        &self.spam_words
    }

    pub fn ham_words(&self) -> &HashMap<String, u64> {
        &self.ham_words
    }

    pub fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    /// Training counts `(spam, ham)`
    pub fn example_counts(&self) -> (u64, u64) {
        (self.spam_examples, self.ham_examples)
    }

    pub fn spam_word_total(&self) -> u64 {
        self.spam_words.values().sum()
    }

    pub fn ham_word_total(&self) -> u64 {
        self.ham_words.values().sum()
    }

    /// Summary counts and priors
    pub fn stats(&self) -> Result<ModelStats> {
        let (spam_prior, ham_prior) = self.priors()?;
        Ok(ModelStats {
            spam_examples: self.spam_examples,
            ham_examples: self.ham_examples,
            vocabulary_size: self.vocabulary.len(),
            spam_words: self.spam_word_total(),
            ham_words: self.ham_word_total(),
            spam_prior,
            ham_prior,
        })
    }
}

/// Pick the winning class and convert its log score to a probability.
///
/// Ham wins ties: spam must score strictly higher.
pub fn resolve(spam_score: f64, ham_score: f64, mode: ProbabilityMode) -> Result<Prediction> {
    let (label, winner, loser) = if spam_score > ham_score {
        (Label::Spam, spam_score, ham_score)
    } else {
        (Label::Ham, ham_score, spam_score)
    };

    let probability = match mode {
        ProbabilityMode::LogSumExp => 1.0 / (1.0 + (loser - winner).exp()),
        ProbabilityMode::Naive => {
            let exp_winner = winner.exp();
            let evidence = spam_score.exp() + ham_score.exp();
            exp_winner / evidence
        }
    };

    if !probability.is_finite() || probability <= 0.0 {
        return Err(SpamError::NumericInstability {
            spam_score,
            ham_score,
        });
    }

    Ok(Prediction {
        label,
        probability: probability.min(1.0),
    })
}
