//! Domain models for Centavo

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Stable external handle (e.g. messaging platform id)
    pub handle: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" | "ingreso" => Ok(Self::Income),
            "expense" | "gasto" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Budget category an expense is tagged with at entry time.
///
/// Every expense belongs to exactly one of the three 50/30/20 buckets.
/// The wire strings are the Spanish tags the bot historically stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Needs (fixed expenses)
    Necesidad,
    /// Wants (leisure / variable expenses)
    Gusto,
    /// Savings-tagged expense
    Ahorro,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Necesidad => "necesidad",
            Self::Gusto => "gusto",
            Self::Ahorro => "ahorro",
        }
    }

    /// Human-readable label used in report output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Necesidad => "Necesidades",
            Self::Gusto => "Ocio",
            Self::Ahorro => "Ahorro",
        }
    }

    pub fn all() -> [Category; 3] {
        [Self::Necesidad, Self::Gusto, Self::Ahorro]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "necesidad" | "need" | "needs" => Ok(Self::Necesidad),
            "gusto" | "want" | "wants" => Ok(Self::Gusto),
            "ahorro" | "saving" | "savings" => Ok(Self::Ahorro),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded income/expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub amount: f64,
    /// Budget category; set for expenses, absent for income
    pub category: Option<Category>,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A transaction to be inserted (no id yet)
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub tx_type: TransactionType,
    pub amount: f64,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub date: NaiveDate,
}

/// Declared pay frequency for the fixed salary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    /// Weekly (~52 pay periods / 12 months)
    Semanal,
    /// Biweekly
    Quincenal,
    /// Monthly
    Mensual,
}

impl PayFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Semanal => "semanal",
            Self::Quincenal => "quincenal",
            Self::Mensual => "mensual",
        }
    }

    /// Multiplier that converts a per-period amount into a monthly figure
    pub fn monthly_multiplier(&self) -> f64 {
        match self {
            Self::Semanal => 4.33,
            Self::Quincenal => 2.0,
            Self::Mensual => 1.0,
        }
    }
}

impl std::str::FromStr for PayFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "semanal" | "weekly" => Ok(Self::Semanal),
            "quincenal" | "biweekly" => Ok(Self::Quincenal),
            "mensual" | "monthly" => Ok(Self::Mensual),
            _ => Err(format!("Unknown pay frequency: {}", s)),
        }
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Behavioral risk classification persisted onto the profile.
///
/// Wire strings are fixed; downstream alerting is tuned to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Normal,
    Bajo,
    Moderado,
    Alto,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bajo => "bajo",
            Self::Moderado => "moderado",
            Self::Alto => "alto",
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "bajo" => Ok(Self::Bajo),
            "moderado" => Ok(Self::Moderado),
            "alto" => Ok(Self::Alto),
            _ => Err(format!("Unknown risk level: {}", s)),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The user's static financial profile, filled in by onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub user_id: i64,
    /// Declared salary per pay period
    pub salary: Option<f64>,
    pub payment_frequency: Option<PayFrequency>,
    pub is_student: bool,
    pub study_cost: f64,
    pub transport_cost: f64,
    pub food_cost: f64,
    pub leisure_cost: f64,
    pub services_cost: f64,
    pub has_debt: bool,
    pub debt_total: f64,
    pub debt_monthly: f64,
    pub current_savings: f64,
    pub is_employed: bool,
    pub income_type: Option<String>,
    pub onboarding_completed: bool,
    // Derived fields written back by the behavioral report (opaque to readers)
    pub category_trends: Option<String>,
    pub monthly_deviation_score: Option<f64>,
    pub recurring_spike_pattern: Option<String>,
    pub behavioral_risk_level: Option<RiskLevel>,
    pub updated_at: DateTime<Utc>,
}

/// Typed partial update for a financial profile.
///
/// Only fields set to `Some(..)` are written; everything else is left
/// untouched. This replaces the dynamically-keyed upsert of the original
/// profile store.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub salary: Option<f64>,
    pub payment_frequency: Option<PayFrequency>,
    pub is_student: Option<bool>,
    pub study_cost: Option<f64>,
    pub transport_cost: Option<f64>,
    pub food_cost: Option<f64>,
    pub leisure_cost: Option<f64>,
    pub services_cost: Option<f64>,
    pub has_debt: Option<bool>,
    pub debt_total: Option<f64>,
    pub debt_monthly: Option<f64>,
    pub current_savings: Option<f64>,
    pub is_employed: Option<bool>,
    pub income_type: Option<String>,
    pub onboarding_completed: Option<bool>,
    pub category_trends: Option<String>,
    pub monthly_deviation_score: Option<f64>,
    pub recurring_spike_pattern: Option<String>,
    pub behavioral_risk_level: Option<RiskLevel>,
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One aggregation row: total expense spend for a (month, category) pair.
///
/// Produced by the aggregation query over expense transactions, ordered by
/// month ascending. `month` is a `YYYY-MM` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyCategoryTotal {
    pub month: String,
    pub category: Category,
    pub total: f64,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_category_roundtrip() {
        for cat in Category::all() {
            assert_eq!(Category::from_str(cat.as_str()).unwrap(), cat);
        }
        assert_eq!(Category::from_str("wants").unwrap(), Category::Gusto);
        assert!(Category::from_str("vacaciones").is_err());
    }

    #[test]
    fn test_pay_frequency_multipliers() {
        assert_eq!(PayFrequency::Semanal.monthly_multiplier(), 4.33);
        assert_eq!(PayFrequency::Quincenal.monthly_multiplier(), 2.0);
        assert_eq!(PayFrequency::Mensual.monthly_multiplier(), 1.0);
    }

    #[test]
    fn test_risk_level_wire_strings() {
        assert_eq!(RiskLevel::Alto.as_str(), "alto");
        assert_eq!(RiskLevel::from_str("moderado").unwrap(), RiskLevel::Moderado);
        assert_eq!(
            serde_json::to_string(&RiskLevel::Bajo).unwrap(),
            "\"bajo\""
        );
    }

    #[test]
    fn test_category_serializes_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Category::Gusto, 1);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "{\"gusto\":1}");
    }
}
