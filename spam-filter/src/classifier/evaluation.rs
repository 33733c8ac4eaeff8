//! Classification report over labelled examples

use serde::Serialize;
use std::fmt;

use super::filter::SpamFilter;
use super::types::{Label, TrainingExample};
use crate::error::Result;

/// 2x2 confusion matrix with spam as the positive class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// Spam predicted as spam
    pub true_spam: u64,
    /// Ham predicted as spam
    pub false_spam: u64,
    /// Ham predicted as ham
    pub true_ham: u64,
    /// Spam predicted as ham
    pub false_ham: u64,
}

impl ConfusionMatrix {
    fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Spam, Label::Spam) => self.true_spam += 1,
            (Label::Ham, Label::Spam) => self.false_spam += 1,
            (Label::Ham, Label::Ham) => self.true_ham += 1,
            (Label::Spam, Label::Ham) => self.false_ham += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.true_spam + self.false_spam + self.true_ham + self.false_ham
    }

    pub fn correct(&self) -> u64 {
        self.true_spam + self.true_ham
    }

    pub fn precision(&self, label: Label) -> f64 {
        match label {
            Label::Spam => ratio(self.true_spam, self.true_spam + self.false_spam),
            Label::Ham => ratio(self.true_ham, self.true_ham + self.false_ham),
        }
    }

    pub fn recall(&self, label: Label) -> f64 {
        match label {
            Label::Spam => ratio(self.true_spam, self.true_spam + self.false_ham),
            Label::Ham => ratio(self.true_ham, self.true_ham + self.false_spam),
        }
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Per-class precision and recall
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassReport {
    pub label: Label,
    pub precision: f64,
    pub recall: f64,
    pub support: u64,
}

/// Evaluation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub total: u64,
    pub correct: u64,
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
    pub classes: [ClassReport; 2],
}

/// Classify every example and compare against its label
pub fn evaluate(filter: &SpamFilter, examples: &[TrainingExample]) -> Result<Evaluation> {
    let mut confusion = ConfusionMatrix::default();

    for example in examples {
        let prediction = filter.predict(example.text)?;
        confusion.record(example.label, prediction.label);
    }

    let report = |label: Label| ClassReport {
        label,
        precision: confusion.precision(label),
        recall: confusion.recall(label),
        support: match label {
            Label::Spam => confusion.true_spam + confusion.false_ham,
            Label::Ham => confusion.true_ham + confusion.false_spam,
        },
    };

    Ok(Evaluation {
        total: confusion.total(),
        correct: confusion.correct(),
        accuracy: ratio(confusion.correct(), confusion.total()),
        confusion,
        classes: [report(Label::Spam), report(Label::Ham)],
    })
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Classification Report:")?;
        writeln!(f, "{:>8} {:>10} {:>10} {:>10}", "", "precision", "recall", "support")?;
        for class in &self.classes {
            writeln!(
                f,
                "{:>8} {:>10.2} {:>10.2} {:>10}",
                class.label, class.precision, class.recall, class.support
            )?;
        }
        writeln!(f, "accuracy: {:.2} ({}/{})", self.accuracy, self.correct, self.total)?;
        writeln!(f)?;
        writeln!(f, "Confusion Matrix (rows: actual, columns: predicted):")?;
        writeln!(f, "{:>8} {:>6} {:>6}", "", "spam", "ham")?;
        writeln!(
            f,
            "{:>8} {:>6} {:>6}",
            "spam", self.confusion.true_spam, self.confusion.false_ham
        )?;
        write!(
            f,
            "{:>8} {:>6} {:>6}",
            "ham", self.confusion.false_spam, self.confusion.true_ham
        )
    }
}
