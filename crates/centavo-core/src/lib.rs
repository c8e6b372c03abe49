//! Centavo Core Library
//!
//! Shared functionality for the Centavo personal finance tracker:
//! - Database access and migrations (users, transactions, profiles, goals)
//! - Behavioral analysis engine (trends, anomalies, recurring spikes,
//!   composite metrics, risk classification)
//! - Structural 50/30/20 budget analysis and alert detection
//! - Split recommendation synthesis
//! - Report orchestration with best-effort profile snapshots

pub mod analysis;
pub mod db;
pub mod error;
pub mod models;

pub use analysis::{
    analyze_financial_structure, analyze_month, compute_metrics, compute_trends, detect_alerts,
    detect_anomalies, detect_recurring_spikes, ideal_split, monthly_income, split_recommendations,
    AnalysisConfig, Anomaly, BehavioralAnalyzer, BehavioralMetrics, BehavioralReport,
    CategoryComparison, CategoryTrends, IdealSplit, MonthlyAnalysis, RecurringPattern, SpikeMonth,
    SplitComparison, SplitTotals, StructuralAnalysis, TrendEntry,
};
pub use db::{Database, MonthSummaryRow};
pub use error::{Error, Result};
pub use models::{
    Category, FinancialProfile, Goal, MonthlyCategoryTotal, NewTransaction, PayFrequency,
    ProfileUpdate, RiskLevel, Transaction, TransactionType, User,
};
