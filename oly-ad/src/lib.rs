//! oly-ad - AI-Detection Analysis Engine
//!
//! Library interface for the OriginLytics detection pipeline:
//! feature extraction → metric normalization → weighted ensemble
//! combination → cross-group agreement analysis → report assembly.
//!
//! The pipeline is a pure, synchronous computation with no I/O and no
//! shared state; it is safe to invoke concurrently for simultaneous
//! requests.

pub mod ensemble;
pub mod extractors;
pub mod report;
pub mod types;

pub use crate::ensemble::{AgreementStatus, EnsembleResult};
pub use crate::extractors::{EmotionDetails, EmotionLexicon};
pub use crate::report::DetectionReport;
pub use crate::types::{AnalysisOptions, LengthCategory, MetricGroup, MetricId, RawMetricBag};

use oly_common::text::word_count;
use thiserror::Error;
use tracing::info;

/// Analysis request errors
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Input below the configured minimum word count
    #[error("Text too short for analysis: {words} words (minimum {minimum})")]
    TextTooShort { words: usize, minimum: usize },
}

/// Run the full detection pipeline over a text
///
/// The only rejection is an input shorter than the configured minimum;
/// everything past that gate degrades gracefully (sparse or empty metric
/// bags still produce a report with maximal uncertainty).
pub fn analyze(
    text: &str,
    options: &AnalysisOptions,
    lexicon: &EmotionLexicon,
) -> Result<DetectionReport, AnalyzeError> {
    let words = word_count(text);
    if words < options.min_word_count {
        return Err(AnalyzeError::TextTooShort {
            words,
            minimum: options.min_word_count,
        });
    }

    let extraction = extractors::extract(text, options.model_score, lexicon);
    let result = ensemble::evaluate(&extraction.metrics, words);

    info!(
        word_count = words,
        overall_score = result.overall_score,
        confidence = result.confidence,
        agreement = result.agreement_status.as_str(),
        "Analysis complete"
    );

    Ok(report::assemble(
        result,
        extraction.emotion,
        &extraction.metrics,
        words,
    ))
}
