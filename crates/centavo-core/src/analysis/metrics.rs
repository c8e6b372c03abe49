//! Composite behavioral metrics and risk classification

use crate::models::RiskLevel;

use super::types::{Anomaly, BehavioralMetrics, CategoryTrends, RecurringPattern};
use super::{round1, round2, AnalysisConfig};

/// Synthesize the scalar behavioral indicators from the detector outputs.
///
/// The self-control indicator is a hand-tuned linear combination; the
/// weights and risk cut points live in [`AnalysisConfig`]. All indicator
/// values are clamped into [0, 1].
pub fn compute_metrics(
    trends: &CategoryTrends,
    anomalies: &[Anomaly],
    recurring: &[RecurringPattern],
    config: &AnalysisConfig,
) -> BehavioralMetrics {
    // Mean absolute latest-month growth across categories with history
    let mut total_growth = 0.0;
    let mut cat_count = 0usize;
    for entries in trends.trends.values() {
        if entries.len() < 2 {
            continue;
        }
        if let Some(last) = entries.last() {
            total_growth += last.growth_pct.abs();
            cat_count += 1;
        }
    }
    let category_growth_rate = if cat_count > 0 {
        round1(total_growth / cat_count as f64)
    } else {
        0.0
    };

    // Drift: summed anomaly severity, saturating at 1
    let drift_raw: f64 = anomalies.iter().map(|a| a.deviation_pct).sum();
    let behavioral_drift_index = round2((drift_raw / config.drift_saturation).min(1.0));

    // Max confidence across recurring patterns
    let recurring_spike_confidence = recurring
        .iter()
        .map(|r| r.confidence)
        .fold(0.0, f64::max);

    // Self-control: 1 minus weighted penalties, floored at 0
    let anomaly_penalty =
        (anomalies.len() as f64 * config.anomaly_penalty_weight).min(config.anomaly_penalty_cap);
    let drift_penalty = behavioral_drift_index * config.drift_penalty_weight;
    let spike_penalty = recurring_spike_confidence * config.spike_penalty_weight;
    let self_control_indicator =
        round2((1.0 - anomaly_penalty - drift_penalty - spike_penalty).max(0.0));

    let behavioral_risk_level = classify_risk(self_control_indicator, config);

    BehavioralMetrics {
        category_growth_rate,
        behavioral_drift_index,
        recurring_spike_confidence,
        self_control_indicator,
        behavioral_risk_level,
    }
}

/// Map the self-control indicator onto the four-tier risk scale.
/// Cut points are strictly-less-than comparisons.
fn classify_risk(indicator: f64, config: &AnalysisConfig) -> RiskLevel {
    if indicator < config.risk_cut_high {
        RiskLevel::Alto
    } else if indicator < config.risk_cut_moderate {
        RiskLevel::Moderado
    } else if indicator < config.risk_cut_low {
        RiskLevel::Bajo
    } else {
        RiskLevel::Normal
    }
}
