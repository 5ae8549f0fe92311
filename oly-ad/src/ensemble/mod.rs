//! Ensemble AI-detection scorer
//!
//! The scoring pipeline over a raw metric bag:
//! normalization → weighted combination, and independently → cross-group
//! agreement analysis, merged into one immutable [`EnsembleResult`].
//!
//! The whole module is a pure, synchronous computation: no I/O, no shared
//! state, safe to invoke concurrently. All weight and threshold tables
//! are immutable constants.

pub mod agreement;
pub mod combiner;
pub mod normalizer;
pub mod weights;

pub use agreement::{AgreementAnalysis, AgreementStatus};
pub use combiner::{CombinedVerdict, ContributingMetric, ImpactLabel};

use crate::types::{LengthCategory, MetricGroup, RawMetricBag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete ensemble verdict: headline score, explainability and
/// cross-group agreement, fully derived from the input bag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsembleResult {
    /// Overall AI-likelihood (0-100)
    pub overall_score: u32,
    /// Vote-agreement confidence (0-100)
    pub confidence: u32,
    /// Human-readable interpretation
    pub interpretation: String,
    /// Top 3 formatted indicator strings
    pub key_indicators: Vec<String>,
    /// Number of metrics that contributed to the score
    pub metrics_used: usize,
    /// Number of weight-table metrics absent from the input
    pub metrics_missing: usize,
    /// Word-count bucket used for adaptive weighting
    pub length_category: LengthCategory,
    /// Top 10 contributing metrics by deviation from neutral
    pub contributing_metrics: Vec<ContributingMetric>,
    /// Mean normalized score per populated metric family
    pub group_scores: BTreeMap<MetricGroup, f64>,
    /// Cross-group agreement classification
    pub agreement_status: AgreementStatus,
    /// Agreement summary message
    pub agreement_message: String,
    /// Families deviating far from the cross-group mean
    pub outlier_groups: Vec<MetricGroup>,
}

/// Score a raw metric bag
///
/// Never fails for type-correct input: missing metrics degrade
/// gracefully and a fully empty bag yields the maximal-uncertainty
/// result (score 50, confidence 0, `insufficient_data`).
pub fn evaluate(bag: &RawMetricBag, word_count: usize) -> EnsembleResult {
    let normalized = normalizer::normalize_bag(bag);

    let verdict = combiner::combine(&normalized, word_count);
    let agreement = agreement::analyze(&normalized);

    EnsembleResult {
        overall_score: verdict.overall_score,
        confidence: verdict.confidence,
        interpretation: verdict.interpretation,
        key_indicators: verdict.key_indicators,
        metrics_used: verdict.metrics_used,
        metrics_missing: verdict.metrics_missing,
        length_category: verdict.length_category,
        contributing_metrics: verdict.contributing_metrics,
        group_scores: agreement.group_scores,
        agreement_status: agreement.status,
        agreement_message: agreement.message,
        outlier_groups: agreement.outlier_groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetricId;

    #[test]
    fn test_empty_bag_is_maximal_uncertainty() {
        let result = evaluate(&RawMetricBag::new(), 300);
        assert_eq!(result.overall_score, 50);
        assert_eq!(result.confidence, 0);
        assert_eq!(result.metrics_used, 0);
        assert_eq!(result.agreement_status, AgreementStatus::InsufficientData);
    }

    #[test]
    fn test_strongly_ai_like_bag() {
        // Raw values in native scales, all strongly AI-like after
        // normalization
        let mut bag = RawMetricBag::new();
        bag.insert(MetricId::Perplexity, 90.0);
        bag.insert(MetricId::Burstiness, 85.0);
        bag.insert(MetricId::LexicalDiversity, 20.0);
        bag.insert(MetricId::EmotionalVariance, 0.0001);

        let result = evaluate(&bag, 500);
        assert!(
            (70..=89).contains(&result.overall_score),
            "expected a 70s-80s score, got {}",
            result.overall_score
        );
        assert!(result.interpretation.contains("likely AI-generated"));
        assert_eq!(result.key_indicators.len(), 3);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = evaluate(&RawMetricBag::new(), 100);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("overallScore").is_some());
        assert!(json.get("keyIndicators").is_some());
        assert!(json.get("agreementStatus").is_some());
        assert_eq!(json["agreementStatus"], "insufficient_data");
        assert_eq!(json["lengthCategory"], "short");
    }

    #[test]
    fn test_evaluate_is_pure() {
        let mut bag = RawMetricBag::new();
        bag.insert(MetricId::Perplexity, 77.0);
        bag.insert(MetricId::GunningFog, 14.0);
        let a = evaluate(&bag, 800);
        let b = evaluate(&bag, 800);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
