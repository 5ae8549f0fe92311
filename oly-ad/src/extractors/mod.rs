//! Tier 1: Feature Extractors
//!
//! Pure text analyzers that populate the raw metric bag consumed by the
//! ensemble. Each extractor degrades gracefully: signals it cannot
//! compute for a given input stay absent from the bag. The single
//! external model signal (a pre-scored 0-100 likelihood) is injected
//! here when the caller supplies one.

pub mod emotion;
pub mod linguistic;
pub mod markers;
pub mod readability;
pub mod statistical;

pub use emotion::{EmotionAnalyzer, EmotionDetails, EmotionLexicon};
pub use linguistic::LinguisticAnalyzer;
pub use markers::MarkerAnalyzer;
pub use readability::ReadabilityAnalyzer;
pub use statistical::StatisticalAnalyzer;

use crate::types::{MetricId, RawMetricBag};
use tracing::debug;

/// Combined extraction output: the raw bag plus the full emotion
/// breakdown for the report
#[derive(Debug, Clone)]
pub struct ExtractionOutput {
    /// Raw metric values in native scales
    pub metrics: RawMetricBag,
    /// Emotion breakdown, when the text was long enough to analyze
    pub emotion: Option<EmotionDetails>,
}

/// Run every extractor and assemble the raw metric bag
pub fn extract(text: &str, model_score: Option<f64>, lexicon: &EmotionLexicon) -> ExtractionOutput {
    let mut bag = RawMetricBag::new();

    // The one model-based signal arrives pre-scored from the caller
    bag.insert_opt(MetricId::Perplexity, model_score);

    let statistical = StatisticalAnalyzer::new().analyze(text);
    bag.insert_opt(MetricId::NgramEntropy, statistical.ngram_entropy);
    bag.insert_opt(MetricId::Burstiness, statistical.burstiness);
    bag.insert_opt(
        MetricId::SentenceLengthVariance,
        statistical.sentence_length_variance,
    );
    bag.insert_opt(
        MetricId::SentenceLengthSkewness,
        statistical.sentence_length_skewness,
    );
    bag.insert_opt(
        MetricId::PunctuationUniformity,
        statistical.punctuation_uniformity,
    );
    bag.insert_opt(
        MetricId::CharacterIrregularities,
        statistical.character_irregularities,
    );

    let linguistic = LinguisticAnalyzer::new().analyze(text);
    bag.insert_opt(MetricId::LexicalDiversity, linguistic.lexical_diversity);
    bag.insert_opt(MetricId::HapaxLegomenaRate, linguistic.hapax_legomena_rate);
    bag.insert_opt(MetricId::WordLengthUniformity, linguistic.word_length_cv);

    let readability = ReadabilityAnalyzer::new().analyze(text);
    bag.insert_opt(MetricId::FleschReadingEase, readability.flesch_reading_ease);
    bag.insert_opt(MetricId::GunningFog, readability.gunning_fog);
    bag.insert_opt(MetricId::SmogIndex, readability.smog_index);

    let markers = MarkerAnalyzer::new().analyze(text);
    bag.insert_opt(
        MetricId::TransitionPhraseDensity,
        markers.transition_phrase_density,
    );
    bag.insert_opt(
        MetricId::SentenceStarterRepetition,
        markers.sentence_starter_repetition,
    );
    bag.insert_opt(MetricId::PronounScarcity, markers.pronoun_rate);
    bag.insert_opt(MetricId::ContractionAbsence, markers.contraction_rate);

    let emotion = EmotionAnalyzer::new(lexicon.clone()).analyze(text);
    if let Some(details) = &emotion {
        bag.insert(MetricId::EmotionalVariance, details.emotional_variance);
    }

    debug!(
        metrics_present = bag.len(),
        has_model_score = model_score.is_some(),
        has_emotion = emotion.is_some(),
        "Feature extraction complete"
    );

    ExtractionOutput {
        metrics: bag,
        emotion,
    }
}
