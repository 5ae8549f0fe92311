//! AI-Estimated Linguistic Marker Pass
//!
//! Heuristic surface markers of machine-generated prose: dense
//! transitional connectives, repeated sentence openers, scarce personal
//! pronouns, and absent contractions. Each marker reports a raw rate;
//! the normalizer owns the AI-likelihood curves.

use oly_common::text::{sentences, words_lower};

/// Transitional connectives AI models overuse
const TRANSITION_WORDS: [&str; 9] = [
    "furthermore",
    "moreover",
    "additionally",
    "consequently",
    "therefore",
    "thus",
    "hence",
    "accordingly",
    "nonetheless",
];

/// First-person pronouns human writers sprinkle in
const PERSONAL_PRONOUNS: [&str; 7] = ["i", "me", "my", "mine", "we", "us", "our"];

/// Contraction suffixes (apostrophes survive tokenization)
const CONTRACTION_SUFFIXES: [&str; 6] = ["n't", "'ll", "'ve", "'re", "'m", "'s"];

/// Marker rates for one text
#[derive(Debug, Clone, Default)]
pub struct MarkerFeatures {
    /// Transition words per 100 words
    pub transition_phrase_density: Option<f64>,
    /// Repeated sentence-starter ratio as a percentage
    pub sentence_starter_repetition: Option<f64>,
    /// Personal pronouns per 100 words
    pub pronoun_rate: Option<f64>,
    /// Contractions per 100 words (only meaningful on longer texts)
    pub contraction_rate: Option<f64>,
}

/// Linguistic marker analyzer
pub struct MarkerAnalyzer;

impl MarkerAnalyzer {
    /// Create new marker analyzer
    pub fn new() -> Self {
        Self
    }

    /// Compute all marker rates
    pub fn analyze(&self, text: &str) -> MarkerFeatures {
        let words = words_lower(text);

        MarkerFeatures {
            transition_phrase_density: self.transition_density(&words),
            sentence_starter_repetition: self.starter_repetition(text),
            pronoun_rate: self.pronoun_rate(&words),
            contraction_rate: self.contraction_rate(&words),
        }
    }

    fn transition_density(&self, words: &[String]) -> Option<f64> {
        if words.len() < 10 {
            return None;
        }
        let count = words
            .iter()
            .filter(|w| TRANSITION_WORDS.contains(&w.as_str()))
            .count();
        Some(count as f64 / words.len() as f64 * 100.0)
    }

    /// Share of sentences opening with an already-used first word
    fn starter_repetition(&self, text: &str) -> Option<f64> {
        let starters: Vec<String> = sentences(text)
            .iter()
            .filter_map(|s| s.split_whitespace().next())
            .map(|w| w.to_lowercase())
            .collect();
        if starters.len() < 4 {
            return None;
        }

        let unique: std::collections::HashSet<&str> =
            starters.iter().map(|s| s.as_str()).collect();
        let repeated = 1.0 - unique.len() as f64 / starters.len() as f64;
        Some(repeated * 100.0)
    }

    fn pronoun_rate(&self, words: &[String]) -> Option<f64> {
        if words.len() < 10 {
            return None;
        }
        let count = words
            .iter()
            .filter(|w| PERSONAL_PRONOUNS.contains(&w.as_str()))
            .count();
        Some(count as f64 / words.len() as f64 * 100.0)
    }

    /// Contraction rate; short texts legitimately lack contractions, so
    /// the signal only exists past 50 words
    fn contraction_rate(&self, words: &[String]) -> Option<f64> {
        if words.len() <= 50 {
            return None;
        }
        let count = words
            .iter()
            .filter(|w| CONTRACTION_SUFFIXES.iter().any(|s| w.ends_with(s)))
            .count();
        Some(count as f64 / words.len() as f64 * 100.0)
    }
}

impl Default for MarkerAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
