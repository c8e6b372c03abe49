//! Recurring spike detection: streaks of consecutive months above baseline

use crate::models::Category;

use super::types::{CategoryTrends, RecurringPattern, SpikeMonth};
use super::{round1, AnalysisConfig};

/// Find streaks of 2+ consecutive months whose total exceeds the rolling
/// 3-month average by strictly more than the threshold.
///
/// Needs at least 4 months of history per category; the first 3 entries only
/// seed the rolling baseline. A zero baseline counts as a non-spike month
/// and breaks any open streak. A streak still open at the end of the series
/// is emitted as well.
pub fn detect_recurring_spikes(
    trends: &CategoryTrends,
    config: &AnalysisConfig,
) -> Vec<RecurringPattern> {
    let window = config.months_for_average;
    let mut recurring = Vec::new();

    for (category, entries) in &trends.trends {
        if entries.len() < window + 1 {
            continue;
        }

        let mut streak: Vec<SpikeMonth> = Vec::new();
        for i in window..entries.len() {
            let baseline = entries[i - window..i]
                .iter()
                .map(|e| e.total)
                .sum::<f64>()
                / window as f64;

            let deviation = if baseline > 0.0 {
                (entries[i].total - baseline) / baseline
            } else {
                0.0
            };

            if baseline > 0.0 && deviation > config.anomaly_threshold {
                streak.push(SpikeMonth {
                    month: entries[i].month.clone(),
                    deviation_pct: round1(deviation * 100.0),
                });
            } else {
                flush_streak(&mut streak, *category, config, &mut recurring);
            }
        }

        // An open trailing streak still counts
        flush_streak(&mut streak, *category, config, &mut recurring);
    }

    recurring
}

/// Emit the accumulated streak if long enough, then reset it
fn flush_streak(
    streak: &mut Vec<SpikeMonth>,
    category: Category,
    config: &AnalysisConfig,
    out: &mut Vec<RecurringPattern>,
) {
    if streak.len() >= config.recurring_min_months {
        let confidence = (streak.len() as f64 / config.confidence_saturation).min(1.0);
        out.push(RecurringPattern {
            category,
            months: std::mem::take(streak),
            confidence,
        });
    } else {
        streak.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute_trends;
    use crate::models::MonthlyCategoryTotal;

    fn trends_for(totals: &[f64]) -> CategoryTrends {
        let rows: Vec<MonthlyCategoryTotal> = totals
            .iter()
            .enumerate()
            .map(|(i, total)| MonthlyCategoryTotal {
                month: format!("2026-{:02}", i + 1),
                category: Category::Gusto,
                total: *total,
                count: 1,
            })
            .collect();
        compute_trends(&rows)
    }

    #[test]
    fn test_single_spike_month_not_recurring() {
        let trends = trends_for(&[100.0, 100.0, 100.0, 100.0, 200.0]);
        let patterns = detect_recurring_spikes(&trends, &AnalysisConfig::default());
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_two_month_streak_emitted_with_half_confidence() {
        // Months 4 and 5 both exceed their rolling baseline by >15%,
        // month 6 falls back under it
        let trends = trends_for(&[100.0, 100.0, 100.0, 130.0, 140.0, 100.0]);
        let patterns = detect_recurring_spikes(&trends, &AnalysisConfig::default());

        assert_eq!(patterns.len(), 1);
        let p = &patterns[0];
        assert_eq!(p.category, Category::Gusto);
        assert_eq!(p.months.len(), 2);
        assert_eq!(p.months[0].month, "2026-04");
        assert_eq!(p.months[1].month, "2026-05");
        assert_eq!(p.confidence, 0.5);
    }

    #[test]
    fn test_trailing_open_streak_counts() {
        // Streak runs through the final month with no confirmed end
        let trends = trends_for(&[100.0, 100.0, 100.0, 100.0, 200.0, 210.0, 220.0]);
        let patterns = detect_recurring_spikes(&trends, &AnalysisConfig::default());

        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].months.len(), 3);
        assert_eq!(patterns[0].confidence, 0.75);
    }

    #[test]
    fn test_confidence_saturates_at_one() {
        // 5 consecutive spike months: each grows 30% over its rolling mean
        let trends = trends_for(&[
            100.0, 100.0, 100.0, 150.0, 200.0, 270.0, 360.0, 480.0,
        ]);
        let patterns = detect_recurring_spikes(&trends, &AnalysisConfig::default());
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].months.len(), 5);
        assert_eq!(patterns[0].confidence, 1.0);
    }

    #[test]
    fn test_gap_splits_into_separate_patterns() {
        // Spike-spike, quiet stretch back at baseline, spike-spike again
        let trends = trends_for(&[
            100.0, 100.0, 100.0, 130.0, 140.0, 100.0, 100.0, 100.0, 130.0, 140.0,
        ]);
        let patterns = detect_recurring_spikes(&trends, &AnalysisConfig::default());
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].months[0].month, "2026-04");
        assert_eq!(patterns[1].months[0].month, "2026-09");
    }

    #[test]
    fn test_needs_at_least_four_months() {
        let trends = trends_for(&[100.0, 200.0, 300.0]);
        let patterns = detect_recurring_spikes(&trends, &AnalysisConfig::default());
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_zero_baseline_breaks_streak() {
        // Two spike months, then three empty months zero the baseline out;
        // the later single spike month cannot extend the old streak
        let trends = trends_for(&[
            100.0, 100.0, 100.0, 130.0, 140.0, 0.0, 0.0, 0.0, 50.0,
        ]);
        let patterns = detect_recurring_spikes(&trends, &AnalysisConfig::default());

        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].months.len(), 2);
    }
}
