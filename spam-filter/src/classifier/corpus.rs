//! Built-in training corpus

use super::types::{Label, TrainingExample};

const fn spam(text: &'static str) -> TrainingExample {
    TrainingExample { text, label: Label::Spam }
}

const fn ham(text: &'static str) -> TrainingExample {
    TrainingExample { text, label: Label::Ham }
}

/// Fixed, ordered training set: 10 spam followed by 10 ham messages
pub const TRAINING_CORPUS: [TrainingExample; 20] = [
    spam("free money now click here urgent"),
    spam("congratulations you won million dollars"),
    spam("limited time offer click now"),
    spam("urgent your account will be closed"),
    spam("winner notification click claim prize"),
    spam("call now free consultation"),
    spam("credit card has been charged"),
    spam("act now limited time"),
    spam("earn money fast"),
    spam("guarantee profit investment"),
    ham("hello how are you today"),
    ham("meeting tomorrow afternoon"),
    ham("can you send report"),
    ham("thanks for help yesterday"),
    ham("looking forward weekend"),
    ham("see you conference"),
    ham("happy birthday great day"),
    ham("project deadline next week"),
    ham("lunch plans today"),
    ham("good morning everyone"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_is_balanced() {
        let spam = TRAINING_CORPUS.iter().filter(|e| e.label == Label::Spam).count();
        let ham = TRAINING_CORPUS.iter().filter(|e| e.label == Label::Ham).count();
        assert_eq!(spam, 10);
        assert_eq!(ham, 10);
    }
}
