//! Model snapshots
//!
//! Stores the exact word counts, example counts and vocabulary as JSON so a
//! restored model scores identically to a fresh training run.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::classifier::{NaiveBayesModel, ProbabilityMode, SpamFilter};
use crate::error::{Result, SpamError};

/// Current snapshot format version
pub const FORMAT_VERSION: u32 = 1;

/// Serialized model state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub format_version: u32,
    pub spam_words: BTreeMap<String, u64>,
    pub ham_words: BTreeMap<String, u64>,
    pub spam_examples: u64,
    pub ham_examples: u64,
    pub vocabulary: BTreeSet<String>,
}

impl ModelSnapshot {
    /// Capture a trained model
    pub fn from_model(model: &NaiveBayesModel) -> Self {
        let (spam_examples, ham_examples) = model.example_counts();
        Self {
            format_version: FORMAT_VERSION,
            spam_words: model.spam_words().iter().map(|(k, v)| (k.clone(), *v)).collect(),
            ham_words: model.ham_words().iter().map(|(k, v)| (k.clone(), *v)).collect(),
            spam_examples,
            ham_examples,
            vocabulary: model.vocabulary().iter().cloned().collect(),
        }
    }

    /// Check the invariants of a trained model
    pub fn validate(&self) -> Result<()> {
        if self.format_version != FORMAT_VERSION {
            return Err(SpamError::Snapshot(format!(
                "Unsupported format version {}",
                self.format_version
            )));
        }

        if self.spam_examples == 0 || self.ham_examples == 0 {
            return Err(SpamError::Snapshot(
                "Snapshot must record at least one spam and one ham example".to_string(),
            ));
        }

        for (class, table) in [("spam", &self.spam_words), ("ham", &self.ham_words)] {
            for (token, &count) in table {
                if count == 0 {
                    return Err(SpamError::Snapshot(format!(
                        "Token '{}' has a zero {} count",
                        token, class
                    )));
                }
                if !self.vocabulary.contains(token) {
                    return Err(SpamError::Snapshot(format!(
                        "Token '{}' in {} table is missing from vocabulary",
                        token, class
                    )));
                }
            }
        }

        if let Some(token) = self
            .vocabulary
            .iter()
            .find(|t| !self.spam_words.contains_key(*t) && !self.ham_words.contains_key(*t))
        {
            return Err(SpamError::Snapshot(format!(
                "Vocabulary token '{}' has no count in either table",
                token
            )));
        }

        Ok(())
    }

    /// Validate and rebuild the model
    pub fn into_model(self) -> Result<NaiveBayesModel> {
        self.validate()?;
        Ok(NaiveBayesModel::from_parts(
            self.spam_words.into_iter().collect(),
            self.ham_words.into_iter().collect(),
            self.spam_examples,
            self.ham_examples,
            self.vocabulary.into_iter().collect(),
        ))
    }
}

/// Write a snapshot atomically (temp file in the same directory, then rename)
pub fn save<P: AsRef<Path>>(model: &NaiveBayesModel, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let json = serde_json::to_vec_pretty(&ModelSnapshot::from_model(model))?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(&json)?;
    file.flush()?;
    file.persist(path).map_err(|e| SpamError::Io(e.error))?;

    info!("Saved model snapshot to {}", path.display());
    Ok(())
}

/// Read and validate a snapshot
pub fn load<P: AsRef<Path>>(path: P) -> Result<NaiveBayesModel> {
    let path = path.as_ref();
    let content = std::fs::read(path)?;
    let snapshot: ModelSnapshot = serde_json::from_slice(&content)?;
    let model = snapshot.into_model()?;

    info!(
        "Loaded model snapshot from {} ({} vocabulary tokens)",
        path.display(),
        model.vocabulary().len()
    );
    Ok(model)
}

/// Restore the filter from `path`, or train from the corpus and save it there
pub fn load_or_train<P: AsRef<Path>>(path: P, mode: ProbabilityMode) -> Result<SpamFilter> {
    let path = path.as_ref();

    if path.exists() {
        match load(path) {
            Ok(model) => return Ok(SpamFilter::from_model(model, mode)),
            Err(e) => warn!(
                "Ignoring unreadable snapshot {}: {}; retraining",
                path.display(),
                e
            ),
        }
    }

    let filter = SpamFilter::with_mode(mode);
    let model = filter.train()?;
    save(model, path)?;
    Ok(filter)
}
