//! Integration tests for the spam classifier

use spam_filter::classifier::{normalize, SpamFilter, TrainingExample, TRAINING_CORPUS};
use spam_filter::{Label, ProbabilityMode, SpamError};
use std::sync::Arc;
use std::thread;

const SAMPLES: &[&str] = &[
    "free money now click here urgent",
    "good morning everyone",
    "the and of!!! 123",
    "xylophone quixotic zephyr",
    "URGENT! You have won a 1 week FREE membership in our prize Jackpot!",
    "Hey, are you coming to the meeting tomorrow?",
    "",
];

#[test]
fn test_obvious_spam() {
    let prediction = spam_filter::predict("free money now click here urgent").unwrap();
    assert_eq!(prediction.label, Label::Spam);
    assert!(prediction.probability > 0.5);
}

#[test]
fn test_obvious_ham() {
    let prediction = spam_filter::predict("good morning everyone").unwrap();
    assert_eq!(prediction.label, Label::Ham);
    assert!(prediction.probability > 0.5);
}

#[test]
fn test_degenerate_input_uses_priors() {
    assert!(normalize("the and of!!! 123").is_empty());

    let prediction = spam_filter::predict("the and of!!! 123").unwrap();
    assert_eq!(prediction.label, Label::Ham);
    assert_eq!(prediction.probability, 0.5);
}

#[test]
fn test_unseen_vocabulary() {
    let prediction = spam_filter::predict("xylophone quixotic zephyr").unwrap();
    assert!(prediction.probability > 0.0 && prediction.probability <= 1.0);
    // Ham has fewer total words, so smoothing favours it for unseen tokens
    assert_eq!(prediction.label, Label::Ham);
}

#[test]
fn test_probability_range_and_determinism() {
    let filter = SpamFilter::new();
    for text in SAMPLES {
        let first = filter.predict(text).unwrap();
        let second = filter.predict(text).unwrap();
        assert_eq!(first.label, second.label, "{:?}", text);
        assert_eq!(first.probability, second.probability, "{:?}", text);
        assert!(first.probability > 0.0 && first.probability <= 1.0, "{:?}", text);
    }
}

#[test]
fn test_train_twice_matches_train_once() {
    spam_filter::train().unwrap();
    spam_filter::train().unwrap();

    let once = SpamFilter::new();
    once.train().unwrap();

    let global = spam_filter::classifier::global().model().unwrap();
    assert_eq!(global, once.model().unwrap());
    assert_eq!(global.example_counts(), (10, 10));
}

#[test]
fn test_every_corpus_example_is_classified_correctly() {
    let filter = SpamFilter::new();
    for example in TRAINING_CORPUS.iter() {
        assert_eq!(filter.predict(example.text).unwrap().label, example.label, "{}", example.text);
    }
}

#[test]
fn test_long_input_is_stable_with_log_sum_exp() {
    let text = "click now free money ".repeat(2000);

    let filter = SpamFilter::with_mode(ProbabilityMode::LogSumExp);
    let prediction = filter.predict(&text).unwrap();
    assert_eq!(prediction.label, Label::Spam);
    assert!(prediction.probability > 0.5 && prediction.probability <= 1.0);

    let naive = SpamFilter::with_mode(ProbabilityMode::Naive);
    assert!(matches!(
        naive.predict(&text),
        Err(spam_filter::SpamError::NumericInstability { .. })
    ));
}

#[test]
fn test_concurrent_first_use_trains_once() {
    let filter = Arc::new(SpamFilter::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let filter = Arc::clone(&filter);
            thread::spawn(move || filter.predict(SAMPLES[i % SAMPLES.len()]).unwrap())
        })
        .collect();

    for handle in handles {
        let prediction = handle.join().unwrap();
        assert!(prediction.probability > 0.0 && prediction.probability <= 1.0);
    }

    let stats = filter.stats().unwrap();
    assert_eq!(stats.spam_examples + stats.ham_examples, TRAINING_CORPUS.len() as u64);
    assert_eq!(stats.spam_prior + stats.ham_prior, 1.0);
}

#[test]
fn test_corpus_without_usable_tokens_is_rejected() {
    static STOP_WORDS_ONLY: [TrainingExample; 2] = [
        TrainingExample { text: "the and", label: Label::Spam },
        TrainingExample { text: "of 123", label: Label::Ham },
    ];

    let filter = SpamFilter::with_corpus(&STOP_WORDS_ONLY, ProbabilityMode::LogSumExp);
    assert!(matches!(filter.predict("free money"), Err(SpamError::EmptyCorpus)));
    assert!(!filter.is_trained());
}
