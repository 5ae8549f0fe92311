//! Linguistic Feature Extractor
//!
//! Vocabulary-level signals: type-token ratio, hapax legomena rate, and
//! word-length uniformity. AI text leans on a narrower working
//! vocabulary and more even word lengths than human prose; these raw
//! values are reported in the human-favoring direction and inverted by
//! the normalizer.

use oly_common::text::words_lower;
use std::collections::HashMap;

/// Vocabulary signals for one text
#[derive(Debug, Clone, Default)]
pub struct LinguisticFeatures {
    /// Unique words / total words, as a percentage
    pub lexical_diversity: Option<f64>,
    /// Words occurring exactly once / total words, as a percentage
    pub hapax_legomena_rate: Option<f64>,
    /// Coefficient of variation of word lengths
    pub word_length_cv: Option<f64>,
}

/// Linguistic feature extractor
pub struct LinguisticAnalyzer;

impl LinguisticAnalyzer {
    /// Create new linguistic analyzer
    pub fn new() -> Self {
        Self
    }

    /// Compute vocabulary signals; texts under 5 words produce nothing
    pub fn analyze(&self, text: &str) -> LinguisticFeatures {
        let words = words_lower(text);
        if words.len() < 5 {
            return LinguisticFeatures::default();
        }
        let total = words.len() as f64;

        let mut freq: HashMap<&str, usize> = HashMap::new();
        for word in &words {
            *freq.entry(word.as_str()).or_insert(0) += 1;
        }

        let unique = freq.len() as f64;
        let hapax = freq.values().filter(|&&c| c == 1).count() as f64;

        let lengths: Vec<f64> = words.iter().map(|w| w.chars().count() as f64).collect();
        let mean = lengths.iter().sum::<f64>() / total;
        let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / total;
        let cv = if mean > 0.0 { variance.sqrt() / mean } else { 0.0 };

        LinguisticFeatures {
            lexical_diversity: Some(unique / total * 100.0),
            hapax_legomena_rate: Some(hapax / total * 100.0),
            word_length_cv: Some(cv),
        }
    }
}

impl Default for LinguisticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
