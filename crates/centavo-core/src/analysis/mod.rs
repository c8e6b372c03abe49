//! Behavioral analysis engine
//!
//! Pure, deterministic computations over a user's monthly category-spend
//! series, organized as a pipeline:
//! - `trends` - month-over-month growth per category
//! - `anomalies` - current month vs trailing 3-month baseline
//! - `recurring` - multi-month spike streak detection
//! - `metrics` - composite behavioral indicators and risk classification
//! - `structural` - static profile analysis (income, 50/30/20, alerts)
//! - `monthly` - actual vs ideal split for a recorded month
//! - `recommendations` - split-adjustment suggestions
//! - `report` - orchestrator assembling the full behavioral report

mod anomalies;
mod metrics;
mod monthly;
mod recommendations;
mod recurring;
mod report;
mod structural;
mod trends;
mod types;

pub use anomalies::detect_anomalies;
pub use metrics::compute_metrics;
pub use monthly::{analyze_month, MonthlyAnalysis, SplitTotals};
pub use recommendations::split_recommendations;
pub use recurring::detect_recurring_spikes;
pub use report::BehavioralAnalyzer;
pub use structural::{analyze_financial_structure, detect_alerts, ideal_split, monthly_income};
pub use trends::compute_trends;
pub use types::{
    Anomaly, BehavioralMetrics, BehavioralReport, CategoryComparison, CategoryTrends, IdealSplit,
    RecurringPattern, SpikeMonth, SplitComparison, StructuralAnalysis, TrendEntry,
};

/// Fixed policy constants for the behavioral engine.
///
/// The weights are hand-tuned, not statistically fit; downstream alerting is
/// calibrated to the defaults, so change them deliberately.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Deviation above baseline that counts as a spike (fraction, 0.15 = 15%)
    pub anomaly_threshold: f64,
    /// Minimum consecutive spike months for a recurring pattern
    pub recurring_min_months: usize,
    /// Trailing baseline window in months
    pub months_for_average: usize,
    /// Full trend window fetched from the aggregation adapter
    pub months_for_trends: u32,
    /// Penalty per anomaly on the self-control indicator
    pub anomaly_penalty_weight: f64,
    /// Cap on the total anomaly penalty
    pub anomaly_penalty_cap: f64,
    /// Weight of the drift index on the self-control indicator
    pub drift_penalty_weight: f64,
    /// Weight of the spike confidence on the self-control indicator
    pub spike_penalty_weight: f64,
    /// Sum of anomaly deviation percentages that saturates the drift index
    pub drift_saturation: f64,
    /// Streak length at which recurring confidence saturates at 1.0
    pub confidence_saturation: f64,
    /// Self-control cut points: below these the risk is alto/moderado/bajo
    pub risk_cut_high: f64,
    pub risk_cut_moderate: f64,
    pub risk_cut_low: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            anomaly_threshold: 0.15,
            recurring_min_months: 2,
            months_for_average: 3,
            months_for_trends: 6,
            anomaly_penalty_weight: 0.15,
            anomaly_penalty_cap: 0.5,
            drift_penalty_weight: 0.3,
            spike_penalty_weight: 0.2,
            drift_saturation: 50.0,
            confidence_saturation: 4.0,
            risk_cut_high: 0.4,
            risk_cut_moderate: 0.65,
            risk_cut_low: 0.85,
        }
    }
}

/// Round to 2 decimal places (money and indices)
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Round to 1 decimal place (percentages)
pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
