//! Emotion Analysis
//!
//! Lexicon-based emotion counting over eight base emotions plus
//! positive/negative sentiment, with a two-word negation window that
//! flips sentiment and suppresses base-emotion counts.
//!
//! The key detection signal is emotional flatness: AI text tends to have
//! very low variance across emotion frequencies, few emotional words,
//! and suspiciously balanced sentiment. The full emotion breakdown also
//! feeds the report's emotional-tone section.
//!
//! A compact built-in lexicon ships with the crate; deployments with the
//! full NRC-style lexicon can point the analyzer at a JSON file mapping
//! word → tag list.

use oly_common::text::words_lower;
use oly_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

/// Eight base emotions tracked by the lexicon
pub const BASE_EMOTIONS: [&str; 8] = [
    "anger",
    "anticipation",
    "disgust",
    "fear",
    "joy",
    "sadness",
    "surprise",
    "trust",
];

/// Words that flip sentiment within a two-word window
const NEGATION_WORDS: [&str; 10] = [
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "hardly", "barely",
    "scarcely",
];

/// Built-in lexicon: word → emotion/sentiment tags
///
/// A compact subset of the NRC-style association lists, enough for
/// flatness detection on everyday prose.
const BUILTIN_LEXICON: &[(&str, &[&str])] = &[
    ("abandon", &["fear", "sadness", "negative"]),
    ("achieve", &["joy", "trust", "positive"]),
    ("admire", &["joy", "trust", "positive"]),
    ("afraid", &["fear", "negative"]),
    ("amazing", &["joy", "surprise", "positive"]),
    ("angry", &["anger", "negative"]),
    ("anxious", &["fear", "anticipation", "negative"]),
    ("awful", &["disgust", "fear", "negative"]),
    ("beautiful", &["joy", "positive"]),
    ("betray", &["anger", "sadness", "negative"]),
    ("blame", &["anger", "disgust", "negative"]),
    ("bless", &["joy", "trust", "positive"]),
    ("brave", &["trust", "positive"]),
    ("broken", &["sadness", "negative"]),
    ("calm", &["trust", "positive"]),
    ("celebrate", &["joy", "anticipation", "positive"]),
    ("cherish", &["joy", "trust", "positive"]),
    ("confident", &["trust", "positive"]),
    ("crisis", &["fear", "negative"]),
    ("cruel", &["anger", "disgust", "negative"]),
    ("danger", &["fear", "negative"]),
    ("dead", &["sadness", "fear", "negative"]),
    ("delight", &["joy", "positive"]),
    ("despair", &["sadness", "fear", "negative"]),
    ("destroy", &["anger", "fear", "negative"]),
    ("disaster", &["fear", "sadness", "negative"]),
    ("disgusting", &["disgust", "negative"]),
    ("doubt", &["fear", "negative"]),
    ("dread", &["fear", "anticipation", "negative"]),
    ("eager", &["anticipation", "joy", "positive"]),
    ("enemy", &["anger", "fear", "negative"]),
    ("enjoy", &["joy", "positive"]),
    ("evil", &["anger", "disgust", "fear", "negative"]),
    ("excited", &["joy", "anticipation", "surprise", "positive"]),
    ("fail", &["sadness", "fear", "negative"]),
    ("faith", &["trust", "positive"]),
    ("fear", &["fear", "negative"]),
    ("fight", &["anger", "fear", "negative"]),
    ("fortune", &["joy", "anticipation", "positive"]),
    ("friend", &["joy", "trust", "positive"]),
    ("frighten", &["fear", "surprise", "negative"]),
    ("fun", &["joy", "positive"]),
    ("furious", &["anger", "negative"]),
    ("generous", &["joy", "trust", "positive"]),
    ("gentle", &["trust", "positive"]),
    ("gift", &["joy", "surprise", "positive"]),
    ("gloom", &["sadness", "negative"]),
    ("glorious", &["joy", "positive"]),
    ("grateful", &["joy", "trust", "positive"]),
    ("grief", &["sadness", "negative"]),
    ("happy", &["joy", "positive"]),
    ("hate", &["anger", "disgust", "negative"]),
    ("hero", &["joy", "trust", "positive"]),
    ("honest", &["trust", "positive"]),
    ("hope", &["anticipation", "joy", "positive"]),
    ("horrible", &["disgust", "fear", "negative"]),
    ("hurt", &["sadness", "anger", "negative"]),
    ("inspire", &["joy", "anticipation", "positive"]),
    ("jealous", &["anger", "negative"]),
    ("joy", &["joy", "positive"]),
    ("kill", &["anger", "fear", "sadness", "negative"]),
    ("kind", &["joy", "trust", "positive"]),
    ("laugh", &["joy", "surprise", "positive"]),
    ("lonely", &["sadness", "negative"]),
    ("love", &["joy", "trust", "positive"]),
    ("lucky", &["joy", "surprise", "positive"]),
    ("mad", &["anger", "negative"]),
    ("miracle", &["joy", "surprise", "trust", "positive"]),
    ("miserable", &["sadness", "negative"]),
    ("mourn", &["sadness", "negative"]),
    ("murder", &["anger", "disgust", "fear", "sadness", "negative"]),
    ("nervous", &["fear", "anticipation", "negative"]),
    ("nightmare", &["fear", "negative"]),
    ("outrage", &["anger", "disgust", "negative"]),
    ("panic", &["fear", "negative"]),
    ("peace", &["joy", "trust", "positive"]),
    ("perfect", &["joy", "trust", "positive"]),
    ("pain", &["sadness", "fear", "negative"]),
    ("pleasant", &["joy", "positive"]),
    ("proud", &["joy", "trust", "positive"]),
    ("rage", &["anger", "negative"]),
    ("rejoice", &["joy", "positive"]),
    ("sad", &["sadness", "negative"]),
    ("scared", &["fear", "negative"]),
    ("shock", &["surprise", "fear", "negative"]),
    ("sick", &["disgust", "sadness", "negative"]),
    ("smile", &["joy", "positive"]),
    ("sorrow", &["sadness", "negative"]),
    ("strange", &["surprise", "negative"]),
    ("stress", &["fear", "negative"]),
    ("succeed", &["joy", "anticipation", "positive"]),
    ("suffer", &["sadness", "fear", "negative"]),
    ("surprise", &["surprise", "anticipation"]),
    ("terrible", &["fear", "disgust", "negative"]),
    ("terror", &["fear", "negative"]),
    ("thrill", &["joy", "surprise", "anticipation", "positive"]),
    ("tragedy", &["sadness", "fear", "negative"]),
    ("trust", &["trust", "positive"]),
    ("ugly", &["disgust", "negative"]),
    ("victory", &["joy", "anticipation", "positive"]),
    ("warm", &["joy", "trust", "positive"]),
    ("weep", &["sadness", "negative"]),
    ("wonderful", &["joy", "surprise", "positive"]),
    ("worry", &["fear", "anticipation", "negative"]),
    ("wrong", &["anger", "sadness", "negative"]),
];

/// Word → emotion/sentiment tag lexicon
#[derive(Debug, Clone)]
pub struct EmotionLexicon {
    entries: HashMap<String, Vec<String>>,
}

impl EmotionLexicon {
    /// Built-in compact lexicon
    pub fn builtin() -> Self {
        let entries = BUILTIN_LEXICON
            .iter()
            .map(|(word, tags)| {
                (
                    (*word).to_string(),
                    tags.iter().map(|t| (*t).to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Load a lexicon from a JSON file mapping word → tag list
    ///
    /// Unknown tags are dropped with a warning; words left with no valid
    /// tags are skipped.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read lexicon failed ({}): {}", path.display(), e)))?;
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse lexicon failed ({}): {}", path.display(), e)))?;

        let valid: HashSet<&str> = BASE_EMOTIONS
            .iter()
            .copied()
            .chain(["positive", "negative"])
            .collect();

        let mut entries = HashMap::with_capacity(raw.len());
        for (word, tags) in raw {
            let kept: Vec<String> = tags
                .into_iter()
                .filter(|tag| {
                    let known = valid.contains(tag.as_str());
                    if !known {
                        warn!(word = %word, tag = %tag, "Unknown emotion tag in lexicon, dropping");
                    }
                    known
                })
                .collect();
            if !kept.is_empty() {
                entries.insert(word.to_lowercase(), kept);
            }
        }

        debug!(word_count = entries.len(), "Loaded emotion lexicon from file");
        Ok(Self { entries })
    }

    /// Tags for a word, if present
    fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(|v| v.as_slice())
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the lexicon has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Full emotion breakdown for one text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionDetails {
    /// Normalized frequency per base emotion (count / word count)
    pub emotions: BTreeMap<String, f64>,
    /// Normalized positive/negative sentiment frequencies
    pub sentiment: BTreeMap<String, f64>,
    /// Population variance across the eight emotion frequencies
    pub emotional_variance: f64,
    /// Emotional words / total words
    pub emotional_word_ratio: f64,
    /// Most frequent base emotion, or "neutral"
    pub dominant_emotion: String,
    /// Additive flatness score (0-100, higher = more AI-like)
    pub ai_indicator_score: u32,
    /// Flatness rules that fired
    pub ai_indicators: Vec<String>,
    /// Count of words found in the lexicon
    pub total_emotional_words: usize,
    /// Total word count
    pub word_count: usize,
}

/// Emotion analyzer over a fixed lexicon
pub struct EmotionAnalyzer {
    lexicon: EmotionLexicon,
}

impl EmotionAnalyzer {
    /// Create analyzer with the given lexicon
    pub fn new(lexicon: EmotionLexicon) -> Self {
        Self { lexicon }
    }

    /// Analyze emotional texture; texts under 5 words produce nothing
    pub fn analyze(&self, text: &str) -> Option<EmotionDetails> {
        let words = words_lower(text);
        if words.len() < 5 {
            return None;
        }
        let word_count = words.len();

        let mut emotion_counts: BTreeMap<&str, usize> =
            BASE_EMOTIONS.iter().map(|e| (*e, 0)).collect();
        let mut positive = 0usize;
        let mut negative = 0usize;
        let mut total_emotional_words = 0usize;

        for (i, word) in words.iter().enumerate() {
            let Some(tags) = self.lexicon.get(word) else {
                continue;
            };

            // Negation in the two preceding words flips sentiment and
            // suppresses the base-emotion count
            let window_start = i.saturating_sub(2);
            let is_negated = words[window_start..i]
                .iter()
                .any(|w| NEGATION_WORDS.contains(&w.as_str()));

            for tag in tags {
                match tag.as_str() {
                    "positive" => {
                        if is_negated {
                            negative += 1;
                        } else {
                            positive += 1;
                        }
                    }
                    "negative" => {
                        if is_negated {
                            positive += 1;
                        } else {
                            negative += 1;
                        }
                    }
                    emotion => {
                        if !is_negated {
                            if let Some(count) = emotion_counts.get_mut(emotion) {
                                *count += 1;
                            }
                        }
                    }
                }
            }
            total_emotional_words += 1;
        }

        let emotions: BTreeMap<String, f64> = emotion_counts
            .iter()
            .map(|(name, count)| ((*name).to_string(), *count as f64 / word_count as f64))
            .collect();
        let sentiment: BTreeMap<String, f64> = [
            ("positive".to_string(), positive as f64 / word_count as f64),
            ("negative".to_string(), negative as f64 / word_count as f64),
        ]
        .into();

        let max_count = emotion_counts.values().copied().max().unwrap_or(0);
        let emotional_variance = if max_count > 0 {
            let values: Vec<f64> = emotions.values().copied().collect();
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
        } else {
            0.0
        };

        // First of the fixed emotion order wins exact ties
        let dominant_emotion = if max_count > 0 {
            BASE_EMOTIONS
                .iter()
                .copied()
                .find(|e| emotion_counts[*e] == max_count)
                .unwrap_or("neutral")
                .to_string()
        } else {
            "neutral".to_string()
        };

        let emotional_word_ratio = total_emotional_words as f64 / word_count as f64;

        let (ai_indicator_score, ai_indicators) = flatness_score(
            emotional_variance,
            emotional_word_ratio,
            &sentiment,
            max_count,
        );

        Some(EmotionDetails {
            emotions,
            sentiment,
            emotional_variance,
            emotional_word_ratio,
            dominant_emotion,
            ai_indicator_score,
            ai_indicators,
            total_emotional_words,
            word_count,
        })
    }
}

/// Additive flatness rules: low variance, few emotional words, perfectly
/// balanced sentiment, and absent emotion all read as AI-like
fn flatness_score(
    variance: f64,
    word_ratio: f64,
    sentiment: &BTreeMap<String, f64>,
    max_emotion_count: usize,
) -> (u32, Vec<String>) {
    let mut score = 0u32;
    let mut indicators = Vec::new();

    if variance < 0.0003 {
        score += 35;
        indicators.push("Very low emotional variance".to_string());
    } else if variance < 0.001 {
        score += 20;
        indicators.push("Low emotional variance".to_string());
    }

    if word_ratio < 0.03 {
        score += 30;
        indicators.push("Minimal emotional language".to_string());
    } else if word_ratio < 0.05 {
        score += 15;
        indicators.push("Low emotional language".to_string());
    }

    let positive = sentiment.get("positive").copied().unwrap_or(0.0);
    let negative = sentiment.get("negative").copied().unwrap_or(0.0);
    if (positive - negative).abs() < 0.01 && (positive > 0.0 || negative > 0.0) {
        score += 20;
        indicators.push("Perfectly balanced sentiment".to_string());
    }

    if max_emotion_count == 0 {
        score += 15;
        indicators.push("No emotional content detected".to_string());
    }

    (score.min(100), indicators)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> EmotionAnalyzer {
        EmotionAnalyzer::new(EmotionLexicon::builtin())
    }

    #[test]
    fn test_too_short_returns_none() {
        assert!(analyzer().analyze("happy sad day").is_none());
    }

    #[test]
    fn test_emotional_text_finds_dominant() {
        let details = analyzer()
            .analyze("I was so happy and excited, a wonderful joy filled the whole celebration")
            .unwrap();
        assert_eq!(details.dominant_emotion, "joy");
        assert!(details.total_emotional_words >= 3);
        assert!(details.emotional_variance > 0.0);
        assert!(details.sentiment["positive"] > details.sentiment["negative"]);
    }

    #[test]
    fn test_neutral_text_is_flat() {
        let details = analyzer()
            .analyze(
                "The quarterly figures were compiled according to the standard \
                 reporting procedure established by the finance committee",
            )
            .unwrap();
        assert_eq!(details.dominant_emotion, "neutral");
        assert_eq!(details.emotional_variance, 0.0);
        assert_eq!(details.total_emotional_words, 0);
        // Flat text fires variance, language and no-content rules
        assert!(details.ai_indicator_score >= 80);
    }

    #[test]
    fn test_negation_flips_sentiment() {
        let positive = analyzer().analyze("We were happy about the decision they made").unwrap();
        let negated = analyzer().analyze("We were not happy about the decision they made").unwrap();
        assert!(positive.sentiment["positive"] > 0.0);
        assert_eq!(negated.sentiment["positive"], 0.0);
        assert!(negated.sentiment["negative"] > 0.0);
        // Base emotion is suppressed, not flipped
        assert_eq!(negated.emotions["joy"], 0.0);
    }

    #[test]
    fn test_lexicon_file_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(
            &path,
            r#"{"zorble": ["joy", "positive"], "quaxy": ["made_up_tag"]}"#,
        )
        .unwrap();

        let lexicon = EmotionLexicon::from_json_file(&path).unwrap();
        // The invalid-tag word is dropped entirely
        assert_eq!(lexicon.len(), 1);

        let details = EmotionAnalyzer::new(lexicon)
            .analyze("the zorble was seen near the river yesterday evening")
            .unwrap();
        assert_eq!(details.dominant_emotion, "joy");
    }

    #[test]
    fn test_missing_lexicon_file_is_config_error() {
        let result = EmotionLexicon::from_json_file(Path::new("/nonexistent/lexicon.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
