//! Detection Report Assembly
//!
//! Merges the ensemble verdict, the emotion breakdown and request
//! metadata into the JSON report returned to the caller. The report is
//! derived per request and never persisted here.

use crate::ensemble::EnsembleResult;
use crate::extractors::EmotionDetails;
use crate::types::{LengthCategory, MetricId, RawMetricBag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Composite AI-detection report for one analyzed text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Report identifier
    pub report_id: Uuid,
    /// Analysis timestamp (UTC)
    pub analyzed_at: DateTime<Utc>,
    /// Word count of the analyzed text
    pub word_count: usize,
    /// Word-count bucket used for adaptive weighting
    pub length_category: LengthCategory,
    /// The ensemble verdict
    pub ensemble: EnsembleResult,
    /// Emotional-tone breakdown, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionDetails>,
    /// Raw metric values in native scales, for transparency
    pub raw_metrics: BTreeMap<MetricId, f64>,
}

/// Assemble the report envelope around an ensemble result
pub fn assemble(
    ensemble: EnsembleResult,
    emotion: Option<EmotionDetails>,
    raw_bag: &RawMetricBag,
    word_count: usize,
) -> DetectionReport {
    DetectionReport {
        report_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        word_count,
        length_category: ensemble.length_category,
        ensemble,
        emotion,
        raw_metrics: raw_bag.iter().collect(),
    }
}
