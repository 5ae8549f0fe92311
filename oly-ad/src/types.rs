//! Core Types for the AI-Detection Engine
//!
//! Defines the fixed metric vocabulary shared by the 3-tier analysis
//! pipeline:
//! - **Tier 1:** feature extractors (statistical, linguistic, readability,
//!   emotional, marker pass) plus the externally supplied model score
//! - **Tier 2:** metric normalization and weighted ensemble combination
//! - **Tier 3:** cross-group agreement analysis
//!
//! The metric set is closed: signals outside this vocabulary are ignored
//! by the ensemble rather than treated as errors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed metric vocabulary (18 detection signals)
///
/// Serialized names are the wire names used in the JSON report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    /// External model likelihood (pre-scored 0-100, the one model signal)
    Perplexity,
    /// Sentence-length coefficient-of-variation bucket score
    Burstiness,
    /// Inverted bigram Shannon entropy
    NgramEntropy,
    /// Relative sentence-length variance bucket score
    SentenceLengthVariance,
    /// Symmetry of the sentence-length distribution
    SentenceLengthSkewness,
    /// Inverted punctuation-mark entropy
    PunctuationUniformity,
    /// Whitespace/encoding/punctuation-density anomalies
    CharacterIrregularities,
    /// Type-token ratio (inverted during normalization)
    LexicalDiversity,
    /// Share of words appearing exactly once (inverted)
    HapaxLegomenaRate,
    /// Coefficient of variation of word lengths (inverted)
    WordLengthUniformity,
    /// Flesch Reading Ease (deviation-from-norm curve)
    FleschReadingEase,
    /// Gunning Fog grade level
    GunningFog,
    /// SMOG grade level
    SmogIndex,
    /// Variance across normalized emotion frequencies (inverted)
    EmotionalVariance,
    /// Transition phrases per 100 words
    TransitionPhraseDensity,
    /// Repeated sentence-starter ratio
    SentenceStarterRepetition,
    /// Personal pronouns per 100 words (inverted)
    PronounScarcity,
    /// Contractions per 100 words (inverted)
    ContractionAbsence,
}

impl MetricId {
    /// All metrics in the fixed vocabulary
    pub const ALL: [MetricId; 18] = [
        MetricId::Perplexity,
        MetricId::Burstiness,
        MetricId::NgramEntropy,
        MetricId::SentenceLengthVariance,
        MetricId::SentenceLengthSkewness,
        MetricId::PunctuationUniformity,
        MetricId::CharacterIrregularities,
        MetricId::LexicalDiversity,
        MetricId::HapaxLegomenaRate,
        MetricId::WordLengthUniformity,
        MetricId::FleschReadingEase,
        MetricId::GunningFog,
        MetricId::SmogIndex,
        MetricId::EmotionalVariance,
        MetricId::TransitionPhraseDensity,
        MetricId::SentenceStarterRepetition,
        MetricId::PronounScarcity,
        MetricId::ContractionAbsence,
    ];

    /// Wire name (snake_case, matches the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::Perplexity => "perplexity",
            MetricId::Burstiness => "burstiness",
            MetricId::NgramEntropy => "ngram_entropy",
            MetricId::SentenceLengthVariance => "sentence_length_variance",
            MetricId::SentenceLengthSkewness => "sentence_length_skewness",
            MetricId::PunctuationUniformity => "punctuation_uniformity",
            MetricId::CharacterIrregularities => "character_irregularities",
            MetricId::LexicalDiversity => "lexical_diversity",
            MetricId::HapaxLegomenaRate => "hapax_legomena_rate",
            MetricId::WordLengthUniformity => "word_length_uniformity",
            MetricId::FleschReadingEase => "flesch_reading_ease",
            MetricId::GunningFog => "gunning_fog",
            MetricId::SmogIndex => "smog_index",
            MetricId::EmotionalVariance => "emotional_variance",
            MetricId::TransitionPhraseDensity => "transition_phrase_density",
            MetricId::SentenceStarterRepetition => "sentence_starter_repetition",
            MetricId::PronounScarcity => "pronoun_scarcity",
            MetricId::ContractionAbsence => "contraction_absence",
        }
    }

    /// Human-readable display name used in key indicators
    pub fn display_name(&self) -> &'static str {
        match self {
            MetricId::Perplexity => "Perplexity",
            MetricId::Burstiness => "Burstiness",
            MetricId::NgramEntropy => "N-gram Entropy",
            MetricId::SentenceLengthVariance => "Sentence Length Variance",
            MetricId::SentenceLengthSkewness => "Sentence Length Skewness",
            MetricId::PunctuationUniformity => "Punctuation Pattern Uniformity",
            MetricId::CharacterIrregularities => "Character-Level Irregularities",
            MetricId::LexicalDiversity => "Lexical Diversity",
            MetricId::HapaxLegomenaRate => "Hapax Legomena Rate",
            MetricId::WordLengthUniformity => "Word Length Uniformity",
            MetricId::FleschReadingEase => "Flesch Reading Ease",
            MetricId::GunningFog => "Gunning Fog Index",
            MetricId::SmogIndex => "SMOG Index",
            MetricId::EmotionalVariance => "Emotional Variance",
            MetricId::TransitionPhraseDensity => "Transition Phrase Density",
            MetricId::SentenceStarterRepetition => "Sentence Starter Repetition",
            MetricId::PronounScarcity => "Personal Pronoun Scarcity",
            MetricId::ContractionAbsence => "Contraction Absence",
        }
    }

    /// Semantic family used by the agreement analyzer
    pub fn group(&self) -> MetricGroup {
        match self {
            MetricId::Perplexity => MetricGroup::ModelBased,
            MetricId::Burstiness
            | MetricId::NgramEntropy
            | MetricId::SentenceLengthVariance
            | MetricId::SentenceLengthSkewness
            | MetricId::PunctuationUniformity
            | MetricId::CharacterIrregularities => MetricGroup::Statistical,
            MetricId::LexicalDiversity
            | MetricId::HapaxLegomenaRate
            | MetricId::WordLengthUniformity => MetricGroup::Linguistic,
            MetricId::FleschReadingEase | MetricId::GunningFog | MetricId::SmogIndex => {
                MetricGroup::Readability
            }
            MetricId::EmotionalVariance => MetricGroup::Emotional,
            MetricId::TransitionPhraseDensity
            | MetricId::SentenceStarterRepetition
            | MetricId::PronounScarcity
            | MetricId::ContractionAbsence => MetricGroup::AiEstimated,
        }
    }
}

/// Semantic metric families for agreement analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricGroup {
    Statistical,
    Linguistic,
    Readability,
    ModelBased,
    Emotional,
    AiEstimated,
}

impl MetricGroup {
    /// All groups in deterministic order
    pub const ALL: [MetricGroup; 6] = [
        MetricGroup::Statistical,
        MetricGroup::Linguistic,
        MetricGroup::Readability,
        MetricGroup::ModelBased,
        MetricGroup::Emotional,
        MetricGroup::AiEstimated,
    ];

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricGroup::Statistical => "statistical",
            MetricGroup::Linguistic => "linguistic",
            MetricGroup::Readability => "readability",
            MetricGroup::ModelBased => "model_based",
            MetricGroup::Emotional => "emotional",
            MetricGroup::AiEstimated => "ai_estimated",
        }
    }
}

/// Word-count bucket used to select adaptive weight multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthCategory {
    /// Fewer than 200 words
    Short,
    /// 200-1000 words
    Medium,
    /// More than 1000 words
    Long,
}

impl LengthCategory {
    /// Classify a word count into a length bucket
    pub fn classify(word_count: usize) -> Self {
        if word_count < 200 {
            LengthCategory::Short
        } else if word_count <= 1000 {
            LengthCategory::Medium
        } else {
            LengthCategory::Long
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthCategory::Short => "short",
            LengthCategory::Medium => "medium",
            LengthCategory::Long => "long",
        }
    }
}

/// Raw per-metric signal values in their native scales
///
/// Absent metrics stay absent; absence is meaningful (the combiner
/// excludes missing metrics from weighting) and is never coerced to a
/// sentinel value.
#[derive(Debug, Clone, Default)]
pub struct RawMetricBag {
    values: HashMap<MetricId, f64>,
}

impl RawMetricBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw value for a metric
    pub fn insert(&mut self, metric: MetricId, value: f64) {
        self.values.insert(metric, value);
    }

    /// Insert a value only when the extractor produced one
    pub fn insert_opt(&mut self, metric: MetricId, value: Option<f64>) {
        if let Some(v) = value {
            self.values.insert(metric, v);
        }
    }

    /// Raw value for a metric, or `None` if unavailable
    pub fn get(&self, metric: MetricId) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    /// Number of metrics present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no metric is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over present (metric, raw value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (MetricId, f64)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }
}

/// Per-request analysis options
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Pre-scored likelihood (0-100) from the external detection model,
    /// if the caller obtained one
    pub model_score: Option<f64>,

    /// Minimum word count required before analysis runs
    pub min_word_count: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            model_score: None,
            min_word_count: 10,
        }
    }
}
