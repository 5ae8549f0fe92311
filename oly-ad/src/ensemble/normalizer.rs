//! Metric Normalizer
//!
//! Maps each raw metric value from its native scale onto the common
//! 0-100 AI-likelihood scale (100 = strongly AI-generated, 0 = strongly
//! human-written). Direction and curve are fixed per metric; metrics
//! where a low raw value is the AI-like direction are inverted here.
//!
//! Absence propagates: an unavailable raw value yields `None`, never a
//! neutral 50 or a zero, so the combiner can exclude the metric from
//! weighting.

use crate::types::{MetricId, RawMetricBag};
use std::collections::HashMap;

/// Normalized metric values, all in [0, 100]
pub type NormalizedMetrics = HashMap<MetricId, f64>;

/// Normalize one raw metric value onto the 0-100 AI-likelihood scale
///
/// Returns `None` if the raw value is unavailable. The result is always
/// clamped to [0, 100] after the transform, guarding against raw inputs
/// that wander outside their nominal range.
pub fn normalize(metric: MetricId, raw: Option<f64>) -> Option<f64> {
    let raw = raw?;
    let scored = match metric {
        // Signals already on the 0-100 AI-likelihood scale
        MetricId::Perplexity
        | MetricId::Burstiness
        | MetricId::NgramEntropy
        | MetricId::SentenceLengthVariance
        | MetricId::SentenceLengthSkewness
        | MetricId::PunctuationUniformity
        | MetricId::CharacterIrregularities
        | MetricId::SentenceStarterRepetition => raw,

        // Rich vocabulary is the human direction
        MetricId::LexicalDiversity | MetricId::HapaxLegomenaRate => 100.0 - raw,

        // Low coefficient of variation means uniform word lengths
        MetricId::WordLengthUniformity => 100.0 - raw * 120.0,

        // AI text clusters near the middle of the Flesch scale
        MetricId::FleschReadingEase => (raw - 50.0).abs() * 2.0,

        // Higher formal-complexity grades are the AI-like direction
        MetricId::GunningFog => (raw - 6.0) * 7.0,
        MetricId::SmogIndex => (raw - 6.0) * 8.0,

        // Flat emotional texture is the AI signature
        MetricId::EmotionalVariance => emotional_variance_curve(raw),

        // Markers: density curves from the heuristic pass
        MetricId::TransitionPhraseDensity => raw * 25.0,
        MetricId::PronounScarcity => 100.0 - raw * 50.0,
        MetricId::ContractionAbsence => 100.0 - raw * 40.0,
    };
    Some(scored.clamp(0.0, 100.0))
}

/// Inverted piecewise curve for raw emotion-frequency variance
///
/// Thresholds follow the emotion analyzer's flatness bands: variance
/// below 0.0003 is the strong-AI band, above 0.003 the strong-human band.
fn emotional_variance_curve(variance: f64) -> f64 {
    if variance < 0.0003 {
        90.0
    } else if variance < 0.001 {
        70.0
    } else if variance < 0.003 {
        45.0
    } else {
        20.0
    }
}

/// Normalize every present metric in a raw bag
///
/// Metrics absent from the bag stay absent from the result.
pub fn normalize_bag(bag: &RawMetricBag) -> NormalizedMetrics {
    let mut normalized = NormalizedMetrics::new();
    for (metric, raw) in bag.iter() {
        if let Some(score) = normalize(metric, Some(raw)) {
            normalized.insert(metric, score);
        }
    }
    normalized
}
