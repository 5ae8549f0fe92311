//! Fixed ensemble weight tables
//!
//! Base weights sum to 1.00 across the 18-metric vocabulary, organized in
//! five confidence tiers. Length-category multipliers are a sparse
//! override map merged multiplicatively at lookup time; any metric not
//! listed for a category stays at 1.0.
//!
//! These tables are compile-time constants. They are never read from
//! configuration and never mutated at runtime.

use crate::types::{LengthCategory, MetricId};

/// Base ensemble weight for a metric
///
/// Tiers:
/// - high-confidence: perplexity, burstiness, n-gram entropy
/// - statistical: sentence variance/skewness, punctuation, character
/// - linguistic: lexical diversity, hapax rate, word-length uniformity
/// - readability: Flesch, Fog, SMOG
/// - AI-estimated/emotional: marker pass + emotional variance
pub const fn base_weight(metric: MetricId) -> f64 {
    match metric {
        // High-confidence tier
        MetricId::Perplexity => 0.14,
        MetricId::Burstiness => 0.10,
        MetricId::NgramEntropy => 0.08,
        // Statistical tier
        MetricId::SentenceLengthVariance => 0.06,
        MetricId::PunctuationUniformity => 0.05,
        MetricId::CharacterIrregularities => 0.04,
        MetricId::SentenceLengthSkewness => 0.04,
        // Linguistic tier
        MetricId::LexicalDiversity => 0.08,
        MetricId::HapaxLegomenaRate => 0.04,
        MetricId::WordLengthUniformity => 0.04,
        // Readability tier
        MetricId::FleschReadingEase => 0.05,
        MetricId::GunningFog => 0.04,
        MetricId::SmogIndex => 0.03,
        // AI-estimated / emotional tier
        MetricId::TransitionPhraseDensity => 0.06,
        MetricId::SentenceStarterRepetition => 0.05,
        MetricId::PronounScarcity => 0.04,
        MetricId::ContractionAbsence => 0.04,
        MetricId::EmotionalVariance => 0.02,
    }
}

/// Length-adaptive weight multiplier (sparse overrides, default 1.0)
///
/// Short texts lean on vocabulary signals and away from sentence-shape
/// statistics that need many sentences to stabilize; long texts give the
/// sentence-shape statistics more room to speak.
pub fn length_multiplier(metric: MetricId, category: LengthCategory) -> f64 {
    match category {
        LengthCategory::Short => match metric {
            MetricId::LexicalDiversity => 1.5,
            MetricId::Burstiness => 0.7,
            MetricId::SentenceLengthVariance => 0.7,
            MetricId::Perplexity => 0.8,
            MetricId::SmogIndex => 0.5,
            _ => 1.0,
        },
        LengthCategory::Medium => 1.0,
        LengthCategory::Long => match metric {
            MetricId::Burstiness => 1.3,
            MetricId::NgramEntropy => 1.2,
            MetricId::SentenceStarterRepetition => 1.2,
            _ => 1.0,
        },
    }
}

/// Effective weight for a metric at a given length category
pub fn effective_weight(metric: MetricId, category: LengthCategory) -> f64 {
    base_weight(metric) * length_multiplier(metric, category)
}
