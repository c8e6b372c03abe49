//! Integration tests for centavo-core
//!
//! These tests exercise the full record → analyze → report workflow.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use centavo_core::{
    analysis::BehavioralAnalyzer,
    db::Database,
    models::{
        Category, NewTransaction, PayFrequency, ProfileUpdate, RiskLevel, TransactionType,
    },
    TrendEntry,
};

/// Report date used throughout; transactions are placed relative to it
const AS_OF: &str = "2026-08-15";

fn as_of() -> NaiveDate {
    AS_OF.parse().unwrap()
}

fn setup_user(db: &Database) -> i64 {
    db.create_user("integration", Some("Integration Tester"))
        .expect("Failed to create user")
}

/// Record one expense per month, ending in the report month (2026-08)
fn record_monthly_expenses(db: &Database, user_id: i64, category: Category, totals: &[f64]) {
    let last_month = 8;
    let first_month = last_month - (totals.len() as u32 - 1);
    for (i, amount) in totals.iter().enumerate() {
        let month = first_month + i as u32;
        db.insert_transaction(
            user_id,
            &NewTransaction {
                tx_type: TransactionType::Expense,
                amount: *amount,
                category: Some(category),
                description: None,
                date: NaiveDate::from_ymd_opt(2026, month, 10).unwrap(),
            },
        )
        .expect("Failed to insert transaction");
    }
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_single_spike_month_yields_anomaly_but_no_pattern() {
    let db = Database::in_memory().unwrap();
    let user_id = setup_user(&db);

    // Four steady months then one doubled month
    record_monthly_expenses(&db, user_id, Category::Gusto, &[100.0, 100.0, 100.0, 100.0, 200.0]);

    let report = BehavioralAnalyzer::new(&db)
        .report_as_of(user_id, as_of())
        .unwrap();

    assert_eq!(report.current_month, "2026-08");
    assert_eq!(report.anomalies.len(), 1);
    let anomaly = &report.anomalies[0];
    assert_eq!(anomaly.category, Category::Gusto);
    assert_eq!(anomaly.current_total, 200.0);
    assert_eq!(anomaly.avg_past, 100.0);
    assert_eq!(anomaly.deviation_pct, 100.0);

    // One spiking month is not a recurring pattern
    assert!(report.recurring.is_empty());
}

#[test]
fn test_sustained_spike_yields_recurring_pattern() {
    let db = Database::in_memory().unwrap();
    let user_id = setup_user(&db);

    // Three steady months, then three months of escalating spend
    record_monthly_expenses(
        &db,
        user_id,
        Category::Gusto,
        &[100.0, 100.0, 100.0, 100.0, 200.0, 210.0, 220.0],
    );

    let report = BehavioralAnalyzer::new(&db)
        .report_as_of(user_id, as_of())
        .unwrap();

    assert_eq!(report.recurring.len(), 1);
    let pattern = &report.recurring[0];
    assert_eq!(pattern.category, Category::Gusto);
    assert_eq!(pattern.months.len(), 3);
    assert_eq!(pattern.confidence, 0.75);
    assert_eq!(pattern.months[0].month, "2026-06");
    assert_eq!(pattern.months[2].month, "2026-08");

    // The sustained pattern drives the first recommendation
    assert!(report.split_recommendations[0].contains("recurrente"));
    assert!(report.split_recommendations[0].contains("3 meses"));
}

#[test]
fn test_report_without_declared_salary() {
    let db = Database::in_memory().unwrap();
    let user_id = setup_user(&db);

    // Profile exists but holds no salary: structural analysis must stay off
    db.upsert_financial_profile(
        user_id,
        &ProfileUpdate {
            is_student: Some(true),
            food_cost: Some(250.0),
            onboarding_completed: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
    record_monthly_expenses(&db, user_id, Category::Gusto, &[100.0, 100.0, 100.0, 100.0, 200.0]);
    record_monthly_expenses(&db, user_id, Category::Necesidad, &[300.0, 300.0, 310.0, 305.0, 300.0]);

    let report = BehavioralAnalyzer::new(&db)
        .report_as_of(user_id, as_of())
        .unwrap();

    // Behavioral side is fully populated
    assert_eq!(report.trends.trends.len(), 2);
    assert_eq!(report.anomalies.len(), 1);
    assert!(report.metrics.self_control_indicator < 1.0);

    // Structural side is absent and its rules stay silent
    assert!(report.structural.is_none());
    assert!(report.alerts.is_empty());
    assert_eq!(report.split_recommendations.len(), 1);
    assert!(report.split_recommendations[0].contains("ocio"));
}

#[test]
fn test_full_report_with_profile_and_alerts() {
    let db = Database::in_memory().unwrap();
    let user_id = setup_user(&db);

    db.upsert_financial_profile(
        user_id,
        &ProfileUpdate {
            salary: Some(1000.0),
            payment_frequency: Some(PayFrequency::Mensual),
            food_cost: Some(500.0),
            transport_cost: Some(200.0),
            services_cost: Some(150.0),
            leisure_cost: Some(100.0),
            has_debt: Some(true),
            debt_total: Some(5000.0),
            debt_monthly: Some(450.0),
            onboarding_completed: Some(true),
            ..Default::default()
        },
    )
    .unwrap();
    record_monthly_expenses(&db, user_id, Category::Gusto, &[100.0, 100.0, 100.0, 100.0, 200.0]);

    let report = BehavioralAnalyzer::new(&db)
        .report_as_of(user_id, as_of())
        .unwrap();

    let structural = report.structural.as_ref().unwrap();
    assert_eq!(structural.monthly_income, 1000.0);
    assert_eq!(structural.fixed_expenses, 1300.0);
    assert_eq!(structural.variable_expenses, 100.0);
    assert!(structural.savings_capacity < 0.0);

    // Deficit and overindebtedness both fire
    assert!(report.alerts.iter().any(|a| a.contains("Déficit")));
    assert!(report.alerts.iter().any(|a| a.contains("Sobreendeudamiento")));

    // Leisure spike plus debt ratio over 30% adds the debt-priority advice
    assert!(report
        .split_recommendations
        .iter()
        .any(|s| s.contains("deuda/ingreso")));
}

// =============================================================================
// Persistence round-trip
// =============================================================================

#[test]
fn test_snapshot_blobs_round_trip_through_profile_store() {
    let db = Database::in_memory().unwrap();
    let user_id = setup_user(&db);
    record_monthly_expenses(
        &db,
        user_id,
        Category::Gusto,
        &[100.0, 100.0, 100.0, 100.0, 200.0, 210.0, 220.0],
    );
    record_monthly_expenses(&db, user_id, Category::Ahorro, &[50.0, 50.0, 55.5, 60.0]);

    let report = BehavioralAnalyzer::new(&db)
        .report_as_of(user_id, as_of())
        .unwrap();

    let profile = db.get_financial_profile(user_id).unwrap().unwrap();
    assert_eq!(
        profile.behavioral_risk_level,
        Some(report.metrics.behavioral_risk_level)
    );
    assert_eq!(
        profile.monthly_deviation_score,
        Some(report.metrics.behavioral_drift_index)
    );

    let trends_blob = profile.category_trends.unwrap();
    let restored: BTreeMap<Category, Vec<TrendEntry>> =
        serde_json::from_str(&trends_blob).unwrap();
    assert_eq!(restored, report.trends.trends);

    let recurring_blob = profile.recurring_spike_pattern.unwrap();
    let restored_patterns: serde_json::Value = serde_json::from_str(&recurring_blob).unwrap();
    assert_eq!(restored_patterns[0]["confidence"], 0.75);
    assert_eq!(restored_patterns[0]["category"], "gusto");
}

#[test]
fn test_repeated_reports_overwrite_snapshot() {
    let db = Database::in_memory().unwrap();
    let user_id = setup_user(&db);
    record_monthly_expenses(&db, user_id, Category::Gusto, &[100.0, 100.0, 100.0, 100.0]);

    let first = BehavioralAnalyzer::new(&db)
        .report_as_of(user_id, as_of())
        .unwrap();
    assert_eq!(first.metrics.behavioral_risk_level, RiskLevel::Normal);

    // A new doubled month degrades the snapshot on the next run
    db.insert_transaction(
        user_id,
        &NewTransaction {
            tx_type: TransactionType::Expense,
            amount: 200.0,
            category: Some(Category::Gusto),
            description: None,
            date: NaiveDate::from_ymd_opt(2026, 8, 12).unwrap(),
        },
    )
    .unwrap();

    let second = BehavioralAnalyzer::new(&db)
        .report_as_of(user_id, as_of())
        .unwrap();
    assert_eq!(second.anomalies.len(), 1);

    let profile = db.get_financial_profile(user_id).unwrap().unwrap();
    assert_eq!(
        profile.monthly_deviation_score,
        Some(second.metrics.behavioral_drift_index)
    );
    assert!(profile.monthly_deviation_score.unwrap() > 0.0);
}
