//! Financial profile store
//!
//! One row per user. Updates are typed partial updates: only fields set on
//! the `ProfileUpdate` touch their columns, so the behavioral write-back can
//! refresh its four derived fields without clobbering onboarding data.

use rusqlite::{params, ToSql};

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{FinancialProfile, ProfileUpdate};

const PROFILE_COLUMNS: &str = "user_id, salary, payment_frequency, is_student, study_cost, \
     transport_cost, food_cost, leisure_cost, services_cost, has_debt, debt_total, \
     debt_monthly, current_savings, is_employed, income_type, onboarding_completed, \
     category_trends, monthly_deviation_score, recurring_spike_pattern, \
     behavioral_risk_level, updated_at";

impl Database {
    /// Fetch a user's financial profile, if one exists
    pub fn get_financial_profile(&self, user_id: i64) -> Result<Option<FinancialProfile>> {
        let conn = self.conn()?;

        let sql = format!(
            "SELECT {} FROM financial_profiles WHERE user_id = ?1",
            PROFILE_COLUMNS
        );
        let result = conn.query_row(&sql, params![user_id], Self::row_to_profile);

        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Upsert a financial profile: update provided fields on the existing
    /// row, or insert a new row carrying them.
    ///
    /// Concurrent writers race last-writer-wins per column set; the
    /// behavioral write-back only ever touches its own four fields.
    pub fn upsert_financial_profile(&self, user_id: i64, update: &ProfileUpdate) -> Result<()> {
        let (columns, values) = Self::update_fields(update);

        let conn = self.conn()?;
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM financial_profiles WHERE user_id = ?1",
                params![user_id],
                |_| Ok(true),
            )
            .unwrap_or(false);

        if exists {
            if columns.is_empty() {
                return Ok(());
            }
            let set_clauses: Vec<String> = columns
                .iter()
                .enumerate()
                .map(|(i, col)| format!("{} = ?{}", col, i + 1))
                .collect();
            let sql = format!(
                "UPDATE financial_profiles SET {}, updated_at = datetime('now') WHERE user_id = ?{}",
                set_clauses.join(", "),
                columns.len() + 1
            );
            let mut bound: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
            bound.push(&user_id);
            conn.execute(&sql, bound.as_slice())?;
        } else {
            let mut cols = vec!["user_id".to_string()];
            cols.extend(columns.iter().map(|c| c.to_string()));
            let placeholders: Vec<String> =
                (1..=cols.len()).map(|i| format!("?{}", i)).collect();
            let sql = format!(
                "INSERT INTO financial_profiles ({}) VALUES ({})",
                cols.join(", "),
                placeholders.join(", ")
            );
            let mut bound: Vec<&dyn ToSql> = vec![&user_id];
            bound.extend(values.iter().map(|v| v.as_ref()));
            conn.execute(&sql, bound.as_slice())?;
        }

        Ok(())
    }

    /// Collect (column, value) pairs for the fields present on the update
    fn update_fields(update: &ProfileUpdate) -> (Vec<&'static str>, Vec<Box<dyn ToSql>>) {
        let mut columns: Vec<&'static str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        macro_rules! field {
            ($name:ident, $value:expr) => {
                if let Some(v) = &update.$name {
                    columns.push(stringify!($name));
                    values.push(Box::new($value(v)));
                }
            };
        }

        field!(salary, |v: &f64| *v);
        field!(payment_frequency, |v: &crate::models::PayFrequency| v
            .as_str()
            .to_string());
        field!(is_student, |v: &bool| *v);
        field!(study_cost, |v: &f64| *v);
        field!(transport_cost, |v: &f64| *v);
        field!(food_cost, |v: &f64| *v);
        field!(leisure_cost, |v: &f64| *v);
        field!(services_cost, |v: &f64| *v);
        field!(has_debt, |v: &bool| *v);
        field!(debt_total, |v: &f64| *v);
        field!(debt_monthly, |v: &f64| *v);
        field!(current_savings, |v: &f64| *v);
        field!(is_employed, |v: &bool| *v);
        field!(income_type, |v: &String| v.clone());
        field!(onboarding_completed, |v: &bool| *v);
        field!(category_trends, |v: &String| v.clone());
        field!(monthly_deviation_score, |v: &f64| *v);
        field!(recurring_spike_pattern, |v: &String| v.clone());
        field!(behavioral_risk_level, |v: &crate::models::RiskLevel| v
            .as_str()
            .to_string());

        (columns, values)
    }

    fn row_to_profile(row: &rusqlite::Row) -> rusqlite::Result<FinancialProfile> {
        let payment_frequency: Option<String> = row.get(2)?;
        let behavioral_risk_level: Option<String> = row.get(19)?;
        let updated_at: String = row.get(20)?;

        Ok(FinancialProfile {
            user_id: row.get(0)?,
            salary: row.get(1)?,
            payment_frequency: payment_frequency.and_then(|s| s.parse().ok()),
            is_student: row.get(3)?,
            study_cost: row.get(4)?,
            transport_cost: row.get(5)?,
            food_cost: row.get(6)?,
            leisure_cost: row.get(7)?,
            services_cost: row.get(8)?,
            has_debt: row.get(9)?,
            debt_total: row.get(10)?,
            debt_monthly: row.get(11)?,
            current_savings: row.get(12)?,
            is_employed: row.get(13)?,
            income_type: row.get(14)?,
            onboarding_completed: row.get(15)?,
            category_trends: row.get(16)?,
            monthly_deviation_score: row.get(17)?,
            recurring_spike_pattern: row.get(18)?,
            behavioral_risk_level: behavioral_risk_level.and_then(|s| s.parse().ok()),
            updated_at: parse_datetime(&updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayFrequency, RiskLevel};

    #[test]
    fn test_upsert_creates_then_updates() {
        let db = Database::in_memory().unwrap();
        let user = db.create_user("mia", None).unwrap();

        assert!(db.get_financial_profile(user).unwrap().is_none());

        db.upsert_financial_profile(
            user,
            &ProfileUpdate {
                salary: Some(1200.0),
                payment_frequency: Some(PayFrequency::Quincenal),
                onboarding_completed: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let profile = db.get_financial_profile(user).unwrap().unwrap();
        assert_eq!(profile.salary, Some(1200.0));
        assert_eq!(profile.payment_frequency, Some(PayFrequency::Quincenal));
        assert!(profile.onboarding_completed);

        // Partial update must leave other fields untouched
        db.upsert_financial_profile(
            user,
            &ProfileUpdate {
                behavioral_risk_level: Some(RiskLevel::Moderado),
                monthly_deviation_score: Some(0.42),
                ..Default::default()
            },
        )
        .unwrap();

        let profile = db.get_financial_profile(user).unwrap().unwrap();
        assert_eq!(profile.salary, Some(1200.0));
        assert_eq!(profile.behavioral_risk_level, Some(RiskLevel::Moderado));
        assert_eq!(profile.monthly_deviation_score, Some(0.42));
    }

    #[test]
    fn test_empty_update_is_noop() {
        let db = Database::in_memory().unwrap();
        let user = db.create_user("mia", None).unwrap();

        db.upsert_financial_profile(user, &ProfileUpdate::default())
            .unwrap();
        // Row gets created carrying only defaults
        let profile = db.get_financial_profile(user).unwrap().unwrap();
        assert!(!profile.onboarding_completed);

        db.upsert_financial_profile(user, &ProfileUpdate::default())
            .unwrap();
        assert!(db.get_financial_profile(user).unwrap().is_some());
    }

    #[test]
    fn test_blob_fields_roundtrip() {
        let db = Database::in_memory().unwrap();
        let user = db.create_user("mia", None).unwrap();

        let trends = r#"{"gusto":[{"month":"2026-01","total":50.0,"growth_pct":0.0}]}"#;
        db.upsert_financial_profile(
            user,
            &ProfileUpdate {
                category_trends: Some(trends.to_string()),
                recurring_spike_pattern: Some("[]".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        let profile = db.get_financial_profile(user).unwrap().unwrap();
        assert_eq!(profile.category_trends.as_deref(), Some(trends));
        assert_eq!(profile.recurring_spike_pattern.as_deref(), Some("[]"));
    }
}
