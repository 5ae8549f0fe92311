//! Readability Suite
//!
//! Flesch Reading Ease, Gunning Fog and SMOG grade computed from word,
//! sentence and syllable counts. Syllables are estimated by vowel-group
//! counting with a silent-e adjustment, which tracks the published
//! formulas closely enough for scoring purposes.
//!
//! Raw values stay on their native scales (Flesch 0-100, Fog/SMOG grade
//! levels); the normalizer owns the AI-likelihood mapping.

use oly_common::text::{sentences, words_lower};

/// Readability signals for one text
#[derive(Debug, Clone, Default)]
pub struct ReadabilityFeatures {
    /// Flesch Reading Ease (higher = easier)
    pub flesch_reading_ease: Option<f64>,
    /// Gunning Fog grade level
    pub gunning_fog: Option<f64>,
    /// SMOG grade level (needs at least 3 sentences)
    pub smog_index: Option<f64>,
}

/// Readability analyzer
pub struct ReadabilityAnalyzer;

impl ReadabilityAnalyzer {
    /// Create new readability analyzer
    pub fn new() -> Self {
        Self
    }

    /// Compute the readability suite; texts under 5 words produce nothing
    pub fn analyze(&self, text: &str) -> ReadabilityFeatures {
        let words = words_lower(text);
        if words.len() < 5 {
            return ReadabilityFeatures::default();
        }
        let sentence_count = sentences(text).len().max(1) as f64;
        let word_count = words.len() as f64;

        let syllables: Vec<usize> = words.iter().map(|w| syllable_count(w)).collect();
        let total_syllables: usize = syllables.iter().sum();
        let complex_words = syllables.iter().filter(|&&s| s >= 3).count() as f64;

        let words_per_sentence = word_count / sentence_count;
        let syllables_per_word = total_syllables as f64 / word_count;

        let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
        let fog = 0.4 * (words_per_sentence + 100.0 * complex_words / word_count);

        let smog = if sentence_count >= 3.0 {
            Some(1.043 * (complex_words * 30.0 / sentence_count).sqrt() + 3.1291)
        } else {
            None
        };

        ReadabilityFeatures {
            flesch_reading_ease: Some(flesch),
            gunning_fog: Some(fog),
            smog_index: smog,
        }
    }
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Estimate syllables by counting vowel groups
///
/// A trailing silent 'e' is dropped unless the word ends in "le"; every
/// word counts at least one syllable.
fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if chars.is_empty() {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    // Silent trailing 'e' ("make", "close"), but not "-le" ("table")
    let n = chars.len();
    if count > 1 && n >= 2 && chars[n - 1] == 'e' && chars[n - 2] != 'l' && !is_vowel(chars[n - 2])
    {
        count -= 1;
    }

    count.max(1)
}
