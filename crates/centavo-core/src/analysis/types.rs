//! Data model for the behavioral analysis engine

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Category, FinancialProfile, RiskLevel};

/// One month of a category's trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    /// YYYY-MM month key
    pub month: String,
    /// Total spend, rounded to 2 decimals
    pub total: f64,
    /// Month-over-month growth percentage, 0 for the first entry or when the
    /// previous month had no spend
    pub growth_pct: f64,
}

/// Per-category trend series over the aggregation window
///
/// Keyed with a `BTreeMap` so iteration order (and therefore every derived
/// output list) is deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryTrends {
    pub trends: BTreeMap<Category, Vec<TrendEntry>>,
    /// Sorted month keys present in the window
    pub months: Vec<String>,
}

/// A category whose current-month spend exceeds its trailing baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub category: Category,
    pub current_total: f64,
    /// Mean of the trailing (up to 3) non-current months
    pub avg_past: f64,
    /// Deviation above the baseline, as a percentage with 1 decimal
    pub deviation_pct: f64,
    pub month: String,
}

/// One spiking month inside a recurring pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeMonth {
    pub month: String,
    pub deviation_pct: f64,
}

/// A streak of 2+ consecutive months above the rolling baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringPattern {
    pub category: Category,
    pub months: Vec<SpikeMonth>,
    /// min(streak length / 4, 1)
    pub confidence: f64,
}

/// Composite behavioral indicators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralMetrics {
    /// Mean absolute latest-month growth across categories with history
    pub category_growth_rate: f64,
    /// Aggregate divergence from baseline, clamped to [0, 1]
    pub behavioral_drift_index: f64,
    /// Max confidence across recurring patterns, 0 if none
    pub recurring_spike_confidence: f64,
    /// 1 minus weighted penalties, floored at 0
    pub self_control_indicator: f64,
    pub behavioral_risk_level: RiskLevel,
}

/// Ideal 50/30/20 amounts for a monthly income
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealSplit {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

/// Real vs ideal amounts for one budget bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryComparison {
    pub real: f64,
    pub ideal: f64,
    pub diff: f64,
}

/// Real vs ideal 50/30/20 comparison across the three buckets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitComparison {
    pub needs: CategoryComparison,
    pub wants: CategoryComparison,
    pub savings: CategoryComparison,
}

/// Static analysis of the declared financial profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralAnalysis {
    /// Declared salary normalized to a monthly figure
    pub monthly_income: f64,
    /// Needs: transport + food + services + study + debt installment
    pub fixed_expenses: f64,
    /// Wants: leisure
    pub variable_expenses: f64,
    pub total_expenses: f64,
    /// Income minus total declared expenses
    pub savings_capacity: f64,
    /// Savings capacity as a fraction of income (0 when income is 0)
    pub savings_percent: f64,
    pub debt_income_ratio: f64,
    pub debt_total: f64,
    pub debt_monthly: f64,
    pub is_student: bool,
    pub comparison: SplitComparison,
}

/// The full behavioral report for one user.
///
/// Constructed fresh per invocation; never cached. Building it also writes
/// the four derived scalar fields back onto the profile (best effort).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralReport {
    pub user_id: i64,
    /// YYYY-MM key of the month under analysis
    pub current_month: String,
    /// Fixed declared salary (normalized) plus ad hoc income this month
    pub monthly_income: f64,
    pub trends: CategoryTrends,
    pub anomalies: Vec<Anomaly>,
    pub recurring: Vec<RecurringPattern>,
    pub metrics: BehavioralMetrics,
    pub structural: Option<StructuralAnalysis>,
    pub alerts: Vec<String>,
    pub split_recommendations: Vec<String>,
    pub profile: Option<FinancialProfile>,
}
