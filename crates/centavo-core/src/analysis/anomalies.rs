//! Increment anomaly detection: current month vs trailing baseline

use super::types::{Anomaly, CategoryTrends};
use super::{round1, round2, AnalysisConfig};

/// Flag categories whose current-month total exceeds the mean of their up to
/// 3 most recent non-current months by strictly more than the threshold.
///
/// Categories without a current-month entry, without any past entries, or
/// with a zero baseline are skipped silently: missing baseline data is not
/// an error condition.
pub fn detect_anomalies(
    trends: &CategoryTrends,
    current_month: &str,
    config: &AnalysisConfig,
) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    for (category, entries) in &trends.trends {
        let Some(current) = entries.iter().find(|e| e.month == current_month) else {
            continue;
        };

        // Trailing window: the last (up to) N entries before the current month
        let past: Vec<f64> = entries
            .iter()
            .filter(|e| e.month != current_month)
            .map(|e| e.total)
            .collect();
        let window = &past[past.len().saturating_sub(config.months_for_average)..];
        if window.is_empty() {
            continue;
        }

        let avg_past = window.iter().sum::<f64>() / window.len() as f64;
        if avg_past == 0.0 {
            continue;
        }

        let deviation = (current.total - avg_past) / avg_past;
        if deviation > config.anomaly_threshold {
            anomalies.push(Anomaly {
                category: *category,
                current_total: current.total,
                avg_past: round2(avg_past),
                deviation_pct: round1(deviation * 100.0),
                month: current_month.to_string(),
            });
        }
    }

    anomalies
}
