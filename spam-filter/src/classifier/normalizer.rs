//! Text normalization
//!
//! Maps raw message text to the token sequence the classifier counts.
//! Steps run in a fixed order: lowercase, strip ASCII punctuation, strip
//! ASCII digits, split on whitespace, then drop stop words and tokens of
//! two characters or fewer. Digits are deleted in place, so `"a1b"` fuses
//! into `"ab"` before the length filter sees it.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Minimum token length (in characters) that survives normalization
pub const MIN_TOKEN_LEN: usize = 3;

/// Common English stop words
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those", "am", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "having", "do", "does",
    "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
    "while", "of", "at", "by", "for", "with", "through", "during", "before", "after",
    "above", "below", "up", "down", "in", "out", "on", "off", "over", "under", "again",
    "further", "then", "once",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Check whether a lowercase word is a stop word
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Normalize text into an ordered token sequence (duplicates preserved)
pub fn normalize(text: &str) -> Vec<String> {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .filter(|c| !c.is_ascii_digit())
        .collect();

    stripped
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .filter(|word| !is_stop_word(word))
        .map(str::to_string)
        .collect()
}
