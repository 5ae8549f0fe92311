//! Text segmentation utilities
//!
//! Shared tokenization for the analysis services. Sentences are split on
//! terminal punctuation runs; words are maximal alphanumeric runs
//! (apostrophes kept inside words so contractions survive tokenization).

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence split regex"));

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+(?:'[A-Za-z]+)*").expect("word regex"));

/// Split text into non-empty trimmed sentences
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract words (lowercased) from text
pub fn words_lower(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Count words without allocating per-word strings
pub fn word_count(text: &str) -> usize {
    WORD.find_iter(text).count()
}

/// Word count of a single sentence (whitespace tokens)
pub fn sentence_word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}
