//! Report orchestrator: runs the full pipeline and persists the snapshot

use chrono::{Datelike, NaiveDate, Utc};
use tracing::warn;

use crate::db::Database;
use crate::error::Result;
use crate::models::{ProfileUpdate, TransactionType};

use super::anomalies::detect_anomalies;
use super::metrics::compute_metrics;
use super::recommendations::split_recommendations;
use super::recurring::detect_recurring_spikes;
use super::structural::{analyze_financial_structure, detect_alerts, monthly_income};
use super::trends::compute_trends;
use super::types::BehavioralReport;
use super::AnalysisConfig;

/// Runs the behavioral pipeline for a user and assembles the report.
///
/// The report is built fresh on every call. Building it also upserts the
/// derived snapshot fields onto the user's profile; that write is best
/// effort and its failure never reaches the caller.
pub struct BehavioralAnalyzer<'a> {
    db: &'a Database,
    config: AnalysisConfig,
}

impl<'a> BehavioralAnalyzer<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(db: &'a Database, config: AnalysisConfig) -> Self {
        Self { db, config }
    }

    /// Full behavioral report anchored on today's date
    pub fn report(&self, user_id: i64) -> Result<BehavioralReport> {
        self.report_as_of(user_id, Utc::now().date_naive())
    }

    /// Full behavioral report anchored on an explicit date.
    ///
    /// `as_of` fixes both the aggregation window and the "current month"
    /// the anomaly detector compares against.
    pub fn report_as_of(&self, user_id: i64, as_of: NaiveDate) -> Result<BehavioralReport> {
        let profile = self.db.get_financial_profile(user_id)?;

        let rows =
            self.db
                .get_monthly_category_totals(user_id, self.config.months_for_trends, as_of)?;
        let current_month = as_of.format("%Y-%m").to_string();

        let trends = compute_trends(&rows);
        let anomalies = detect_anomalies(&trends, &current_month, &self.config);
        let recurring = detect_recurring_spikes(&trends, &self.config);
        let metrics = compute_metrics(&trends, &anomalies, &recurring, &self.config);

        // Structural analysis only applies once onboarding is done and a
        // salary has been declared, same gate as the fixed income below
        let structural = profile
            .as_ref()
            .filter(|p| p.onboarding_completed && p.salary.unwrap_or(0.0) > 0.0)
            .map(analyze_financial_structure);
        let alerts = structural.as_ref().map(detect_alerts).unwrap_or_default();

        let split_recs =
            split_recommendations(&anomalies, &recurring, &metrics, structural.as_ref());

        // Fixed declared salary (normalized) plus ad hoc income this month
        let variable_income = self.db.get_total_by_type(
            user_id,
            TransactionType::Income,
            as_of.year(),
            as_of.month(),
        )?;
        let fixed_income = profile
            .as_ref()
            .filter(|p| p.onboarding_completed && p.salary.unwrap_or(0.0) > 0.0)
            .map(|p| monthly_income(p.salary.unwrap_or(0.0), p.payment_frequency))
            .unwrap_or(0.0);

        let report = BehavioralReport {
            user_id,
            current_month,
            monthly_income: fixed_income + variable_income,
            trends,
            anomalies,
            recurring,
            metrics,
            structural,
            alerts,
            split_recommendations: split_recs,
            profile,
        };

        if let Err(err) = self.persist_snapshot(user_id, &report) {
            warn!(user_id, error = %err, "failed to persist behavioral snapshot");
        }

        Ok(report)
    }

    fn persist_snapshot(&self, user_id: i64, report: &BehavioralReport) -> Result<()> {
        let update = ProfileUpdate {
            category_trends: Some(serde_json::to_string(&report.trends.trends)?),
            monthly_deviation_score: Some(report.metrics.behavioral_drift_index),
            recurring_spike_pattern: Some(serde_json::to_string(&report.recurring)?),
            behavioral_risk_level: Some(report.metrics.behavioral_risk_level),
            ..Default::default()
        };
        self.db.upsert_financial_profile(user_id, &update)
    }
}
