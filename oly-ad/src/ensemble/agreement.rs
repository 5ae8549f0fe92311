//! Disagreement Analyzer
//!
//! Sanity-checks the ensemble by measuring whether semantically distinct
//! metric families reach the same verdict. A single blended score can
//! hide the case where statistical metrics shout "AI" while linguistic
//! metrics shout "human"; the cross-group spread surfaces it.
//!
//! Spread is measured across group means (population standard deviation),
//! not across individual metrics, so a large family cannot drown out a
//! small one.

use crate::ensemble::normalizer::NormalizedMetrics;
use crate::types::MetricGroup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Std-dev band above which groups are considered in conflict
const UNCERTAIN_THRESHOLD: f64 = 20.0;
/// Std-dev band above which groups moderately disagree
const MODERATE_THRESHOLD: f64 = 12.0;
/// Outlier distance in units of the cross-group std-dev
const OUTLIER_FACTOR: f64 = 1.5;

/// Cross-group agreement classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgreementStatus {
    /// Groups agree closely (std dev <= 12)
    Confident,
    /// Noticeable spread between groups (12 < std dev <= 20)
    ModerateDisagreement,
    /// Conflicting signals (std dev > 20); manual review recommended
    Uncertain,
    /// Fewer than two groups had data; no agreement verdict possible
    InsufficientData,
}

impl AgreementStatus {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementStatus::Confident => "confident",
            AgreementStatus::ModerateDisagreement => "moderate_disagreement",
            AgreementStatus::Uncertain => "uncertain",
            AgreementStatus::InsufficientData => "insufficient_data",
        }
    }
}

/// Agreement analysis output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementAnalysis {
    /// Mean normalized score per populated group (empty groups omitted)
    pub group_scores: BTreeMap<MetricGroup, f64>,
    /// Agreement classification
    pub status: AgreementStatus,
    /// Human-readable summary of the verdict
    pub message: String,
    /// Groups deviating more than 1.5x the std dev from the mean
    /// (populated only when status is `uncertain`)
    pub outlier_groups: Vec<MetricGroup>,
}

/// Analyze cross-group agreement over normalized metric scores
pub fn analyze(normalized: &NormalizedMetrics) -> AgreementAnalysis {
    // Per-group mean over present members; empty groups are omitted
    // entirely rather than zero-filled
    let mut group_scores: BTreeMap<MetricGroup, f64> = BTreeMap::new();
    for group in MetricGroup::ALL {
        let members: Vec<f64> = normalized
            .iter()
            .filter(|(metric, _)| metric.group() == group)
            .map(|(_, score)| *score)
            .collect();
        if !members.is_empty() {
            group_scores.insert(group, members.iter().sum::<f64>() / members.len() as f64);
        }
    }

    if group_scores.len() < 2 {
        debug!(
            populated_groups = group_scores.len(),
            "Insufficient group coverage for agreement analysis"
        );
        return AgreementAnalysis {
            group_scores,
            status: AgreementStatus::InsufficientData,
            message: "Not enough metric families produced data to cross-check agreement"
                .to_string(),
            outlier_groups: Vec::new(),
        };
    }

    let means: Vec<f64> = group_scores.values().copied().collect();
    let mean = means.iter().sum::<f64>() / means.len() as f64;
    let variance = means.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / means.len() as f64;
    let std_dev = variance.sqrt();

    debug!(
        populated_groups = group_scores.len(),
        cross_group_mean = mean,
        cross_group_std_dev = std_dev,
        "Cross-group agreement measured"
    );

    let (status, message, outlier_groups) = if std_dev > UNCERTAIN_THRESHOLD {
        let outliers: Vec<MetricGroup> = group_scores
            .iter()
            .filter(|(_, score)| (**score - mean).abs() > OUTLIER_FACTOR * std_dev)
            .map(|(group, _)| *group)
            .collect();
        (
            AgreementStatus::Uncertain,
            format!(
                "Metric families conflict strongly (spread {:.1}); manual review recommended",
                std_dev
            ),
            outliers,
        )
    } else if std_dev > MODERATE_THRESHOLD {
        (
            AgreementStatus::ModerateDisagreement,
            format!("Metric families diverge moderately (spread {:.1})", std_dev),
            Vec::new(),
        )
    } else {
        (
            AgreementStatus::Confident,
            format!("Metric families agree (spread {:.1})", std_dev),
            Vec::new(),
        )
    };

    AgreementAnalysis {
        group_scores,
        status,
        message,
        outlier_groups,
    }
}
