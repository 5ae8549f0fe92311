//! Weighted Ensemble Combiner
//!
//! Combines normalized metric scores into the headline verdict: one
//! overall AI-likelihood score, a confidence value derived from binary
//! vote agreement, and the ranked explainability list.
//!
//! Weighting: each present metric contributes its base weight times the
//! length-category multiplier; missing metrics contribute nothing to
//! score or weight. With no metrics present the score defaults to 50
//! (maximal uncertainty) and confidence to 0.

use crate::ensemble::normalizer::NormalizedMetrics;
use crate::ensemble::weights::effective_weight;
use crate::types::{LengthCategory, MetricId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Deviation from neutral (50) required before a metric counts as a
/// contributing indicator
const CONTRIBUTION_THRESHOLD: f64 = 15.0;

/// Direction a contributing metric pushed the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLabel {
    #[serde(rename = "AI-like")]
    AiLike,
    #[serde(rename = "Human-like")]
    HumanLike,
}

impl ImpactLabel {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLabel::AiLike => "AI-like",
            ImpactLabel::HumanLike => "Human-like",
        }
    }
}

/// One metric's contribution to the verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributingMetric {
    /// Metric identifier
    pub name: MetricId,
    /// Normalized 0-100 AI-likelihood score
    pub normalized_score: f64,
    /// Weight actually applied (base x length multiplier)
    pub effective_weight: f64,
    /// Direction of the push
    pub impact_label: ImpactLabel,
}

impl ContributingMetric {
    /// Absolute deviation from the neutral midpoint
    fn deviation(&self) -> f64 {
        (self.normalized_score - 50.0).abs()
    }
}

/// Combiner output: headline score plus explainability
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedVerdict {
    /// Overall AI-likelihood (0-100)
    pub overall_score: u32,
    /// Vote-agreement confidence (0-100)
    pub confidence: u32,
    /// Human-readable interpretation of score and confidence
    pub interpretation: String,
    /// Top 3 formatted indicator strings
    pub key_indicators: Vec<String>,
    /// Number of metrics that contributed to the score
    pub metrics_used: usize,
    /// Number of weight-table metrics absent from the input
    pub metrics_missing: usize,
    /// Word-count bucket the adaptive weights were selected for
    pub length_category: LengthCategory,
    /// Top 10 contributing metrics, ranked by deviation from neutral
    pub contributing_metrics: Vec<ContributingMetric>,
}

/// Combine normalized metrics into the weighted ensemble verdict
pub fn combine(normalized: &NormalizedMetrics, word_count: usize) -> CombinedVerdict {
    let category = LengthCategory::classify(word_count);

    let mut total_score = 0.0_f64;
    let mut total_weight = 0.0_f64;
    let mut ai_votes = 0_usize;
    let mut votes_cast = 0_usize;
    let mut contributing: Vec<ContributingMetric> = Vec::new();
    let mut missing = 0_usize;

    // Fixed iteration order keeps the output deterministic
    for metric in MetricId::ALL {
        let Some(&score) = normalized.get(&metric) else {
            missing += 1;
            continue;
        };

        let weight = effective_weight(metric, category);
        total_score += score * weight;
        total_weight += weight;

        // Strict >50: a score of exactly 50 votes human-like
        votes_cast += 1;
        if score > 50.0 {
            ai_votes += 1;
        }

        if (score - 50.0).abs() > CONTRIBUTION_THRESHOLD {
            contributing.push(ContributingMetric {
                name: metric,
                normalized_score: score,
                effective_weight: weight,
                impact_label: if score > 50.0 {
                    ImpactLabel::AiLike
                } else {
                    ImpactLabel::HumanLike
                },
            });
        }
    }

    let overall_score = if total_weight > 0.0 {
        (total_score / total_weight).round().clamp(0.0, 100.0) as u32
    } else {
        50
    };

    let confidence = if votes_cast > 0 {
        let majority_is_ai = overall_score > 50;
        let agreeing = if majority_is_ai {
            ai_votes
        } else {
            votes_cast - ai_votes
        };
        ((agreeing as f64 / votes_cast as f64) * 100.0).round() as u32
    } else {
        0
    };

    // Rank by deviation magnitude; metric order breaks exact ties
    contributing.sort_by(|a, b| {
        b.deviation()
            .partial_cmp(&a.deviation())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    let key_indicators: Vec<String> = contributing
        .iter()
        .take(3)
        .map(|c| {
            format!(
                "{}: {} ({}/100)",
                c.name.display_name(),
                if c.normalized_score > 50.0 { "high" } else { "low" },
                c.normalized_score.round() as u32
            )
        })
        .collect();

    contributing.truncate(10);

    let verdict = CombinedVerdict {
        overall_score,
        confidence,
        interpretation: interpret(overall_score, confidence),
        key_indicators,
        metrics_used: votes_cast,
        metrics_missing: missing,
        length_category: category,
        contributing_metrics: contributing,
    };

    debug!(
        overall_score = verdict.overall_score,
        confidence = verdict.confidence,
        metrics_used = verdict.metrics_used,
        metrics_missing = verdict.metrics_missing,
        length_category = category.as_str(),
        "Ensemble combination complete"
    );

    verdict
}

/// Interpretation from independent score and confidence bands
fn interpret(score: u32, confidence: u32) -> String {
    let score_label = if score >= 80 {
        "Very likely AI-generated"
    } else if score >= 65 {
        "Likely AI-generated"
    } else if score >= 45 {
        "Uncertain - mixed signals"
    } else if score >= 30 {
        "Likely human-written"
    } else {
        "Very likely human-written"
    };

    let confidence_label = if confidence >= 85 {
        "very high"
    } else if confidence >= 70 {
        "high"
    } else if confidence >= 55 {
        "moderate"
    } else {
        "low"
    };

    format!("{} ({} confidence)", score_label, confidence_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ensemble::normalizer::NormalizedMetrics;

    fn bag_of(entries: &[(MetricId, f64)]) -> NormalizedMetrics {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_empty_input_defaults() {
        let verdict = combine(&NormalizedMetrics::new(), 500);
        assert_eq!(verdict.overall_score, 50);
        assert_eq!(verdict.confidence, 0);
        assert_eq!(verdict.metrics_used, 0);
        assert_eq!(verdict.metrics_missing, MetricId::ALL.len());
        assert!(verdict.key_indicators.is_empty());
        assert!(verdict.contributing_metrics.is_empty());
    }

    #[test]
    fn test_constant_scores_yield_the_constant() {
        // Weighted average of a constant equals the constant
        let normalized: NormalizedMetrics =
            MetricId::ALL.iter().map(|m| (*m, 50.0)).collect();
        let verdict = combine(&normalized, 500);
        assert_eq!(verdict.overall_score, 50);
        // Exactly 50 votes human-like on every metric
        assert_eq!(verdict.confidence, 100);
        assert!(verdict.contributing_metrics.is_empty());
    }

    #[test]
    fn test_unanimous_ai_scores() {
        let normalized: NormalizedMetrics =
            MetricId::ALL.iter().map(|m| (*m, 100.0)).collect();
        let verdict = combine(&normalized, 500);
        assert_eq!(verdict.overall_score, 100);
        assert_eq!(verdict.confidence, 100);
        assert_eq!(verdict.key_indicators.len(), 3);
        assert_eq!(verdict.contributing_metrics.len(), 10);
    }

    #[test]
    fn test_score_always_in_range() {
        let normalized = bag_of(&[
            (MetricId::Perplexity, 0.0),
            (MetricId::Burstiness, 100.0),
            (MetricId::LexicalDiversity, 73.0),
        ]);
        let verdict = combine(&normalized, 50);
        assert!(verdict.overall_score <= 100);
    }

    #[test]
    fn test_missing_metrics_excluded_from_weighting() {
        // One metric at 100: the weighted average must be exactly 100,
        // not diluted by absent metrics
        let normalized = bag_of(&[(MetricId::Perplexity, 100.0)]);
        let verdict = combine(&normalized, 500);
        assert_eq!(verdict.overall_score, 100);
        assert_eq!(verdict.metrics_used, 1);
        assert_eq!(verdict.metrics_missing, MetricId::ALL.len() - 1);
    }

    #[test]
    fn test_vote_tie_at_fifty_counts_human() {
        let normalized = bag_of(&[
            (MetricId::Perplexity, 50.0),
            (MetricId::Burstiness, 40.0),
        ]);
        let verdict = combine(&normalized, 500);
        // Both votes are human-like; overall is below the midpoint
        assert!(verdict.overall_score < 50);
        assert_eq!(verdict.confidence, 100);
    }

    #[test]
    fn test_length_category_shifts_weighted_score() {
        // Lexical diversity is the only divergent metric; its short-text
        // boost must pull the overall score toward its direction
        let normalized = bag_of(&[
            (MetricId::LexicalDiversity, 90.0),
            (MetricId::Perplexity, 40.0),
            (MetricId::Burstiness, 40.0),
        ]);
        let short = combine(&normalized, 150);
        let medium = combine(&normalized, 250);
        assert!(
            short.overall_score > medium.overall_score,
            "short-text emphasis should shift toward lexical diversity: {} vs {}",
            short.overall_score,
            medium.overall_score
        );
    }

    #[test]
    fn test_length_category_without_overrides_is_neutral() {
        // Metrics with no short-category override score identically in
        // short and medium texts
        let normalized = bag_of(&[
            (MetricId::EmotionalVariance, 90.0),
            (MetricId::TransitionPhraseDensity, 30.0),
        ]);
        let short = combine(&normalized, 150);
        let medium = combine(&normalized, 250);
        assert_eq!(short.overall_score, medium.overall_score);
    }

    #[test]
    fn test_key_indicators_exclude_near_neutral() {
        let normalized = bag_of(&[
            (MetricId::Perplexity, 60.0),  // within 15 of neutral
            (MetricId::Burstiness, 64.9),  // within 15 of neutral
            (MetricId::NgramEntropy, 80.0),
        ]);
        let verdict = combine(&normalized, 500);
        assert_eq!(verdict.contributing_metrics.len(), 1);
        assert_eq!(verdict.key_indicators.len(), 1);
        assert!(verdict.key_indicators[0].starts_with("N-gram Entropy: high (80/100)"));
    }

    #[test]
    fn test_contributing_ranked_by_deviation() {
        let normalized = bag_of(&[
            (MetricId::Perplexity, 70.0),        // deviation 20
            (MetricId::LexicalDiversity, 10.0),  // deviation 40
            (MetricId::Burstiness, 80.0),        // deviation 30
        ]);
        let verdict = combine(&normalized, 500);
        let names: Vec<MetricId> = verdict
            .contributing_metrics
            .iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![MetricId::LexicalDiversity, MetricId::Burstiness, MetricId::Perplexity]
        );
        assert_eq!(
            verdict.contributing_metrics[0].impact_label,
            ImpactLabel::HumanLike
        );
    }

    #[test]
    fn test_interpretation_bands() {
        assert_eq!(interpret(85, 90), "Very likely AI-generated (very high confidence)");
        assert_eq!(interpret(70, 75), "Likely AI-generated (high confidence)");
        assert_eq!(interpret(50, 60), "Uncertain - mixed signals (moderate confidence)");
        assert_eq!(interpret(35, 40), "Likely human-written (low confidence)");
        assert_eq!(interpret(10, 95), "Very likely human-written (very high confidence)");
    }

    #[test]
    fn test_idempotent_combination() {
        let normalized = bag_of(&[
            (MetricId::Perplexity, 82.0),
            (MetricId::Burstiness, 33.0),
            (MetricId::EmotionalVariance, 90.0),
        ]);
        let a = combine(&normalized, 640);
        let b = combine(&normalized, 640);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}
