//! Transaction operations and monthly aggregations
//!
//! Includes the aggregation queries the behavioral engine consumes:
//! per-month category totals and per-month income/expense totals.

use chrono::NaiveDate;
use rusqlite::params;
use tracing::warn;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{
    Category, MonthlyCategoryTotal, NewTransaction, Transaction, TransactionType,
};

/// Per-(type, category) totals for one calendar month
#[derive(Debug, Clone)]
pub struct MonthSummaryRow {
    pub tx_type: TransactionType,
    pub category: Option<Category>,
    pub total: f64,
    pub count: i64,
}

/// First and last day of a calendar month
pub(crate) fn month_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    let from = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::InvalidData(format!("Invalid month: {}-{}", year, month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let to = next
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| Error::InvalidData(format!("Invalid month: {}-{}", year, month)))?;
    Ok((from, to))
}

impl Database {
    /// Insert an income/expense entry for a user
    ///
    /// Expenses must carry a budget category; income entries must not.
    pub fn insert_transaction(&self, user_id: i64, tx: &NewTransaction) -> Result<i64> {
        if !tx.amount.is_finite() || tx.amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Amount must be a positive number, got {}",
                tx.amount
            )));
        }
        match (tx.tx_type, tx.category) {
            (TransactionType::Expense, None) => {
                return Err(Error::InvalidData(
                    "Expense entries require a category".to_string(),
                ))
            }
            (TransactionType::Income, Some(_)) => {
                return Err(Error::InvalidData(
                    "Income entries do not take a category".to_string(),
                ))
            }
            _ => {}
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO transactions (user_id, type, amount, category, description, date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                user_id,
                tx.tx_type.as_str(),
                tx.amount,
                tx.category.map(|c| c.as_str()),
                tx.description,
                tx.date.to_string(),
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List a user's most recent transactions, newest first
    pub fn list_recent_transactions(&self, user_id: i64, limit: usize) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, type, amount, category, description, date, created_at
            FROM transactions
            WHERE user_id = ?1
            ORDER BY date DESC, id DESC
            LIMIT ?2
            "#,
        )?;

        let rows = stmt.query_map(params![user_id, limit as i64], Self::row_to_transaction)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Total amount of a transaction type within one calendar month
    pub fn get_total_by_type(
        &self,
        user_id: i64,
        tx_type: TransactionType,
        year: i32,
        month: u32,
    ) -> Result<f64> {
        let (from, to) = month_range(year, month)?;
        let conn = self.conn()?;

        let total: f64 = conn.query_row(
            r#"
            SELECT COALESCE(SUM(amount), 0)
            FROM transactions
            WHERE user_id = ?1 AND type = ?2 AND date BETWEEN ?3 AND ?4
            "#,
            params![user_id, tx_type.as_str(), from.to_string(), to.to_string()],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// Per-(type, category) totals for one calendar month
    pub fn get_summary_by_month(
        &self,
        user_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<MonthSummaryRow>> {
        let (from, to) = month_range(year, month)?;
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT type, category, SUM(amount) AS total, COUNT(*) AS count
            FROM transactions
            WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
            GROUP BY type, category
            ORDER BY type, category
            "#,
        )?;

        let raw = stmt.query_map(
            params![user_id, from.to_string(), to.to_string()],
            |row| {
                let tx_type: String = row.get(0)?;
                let category: Option<String> = row.get(1)?;
                let total: f64 = row.get(2)?;
                let count: i64 = row.get(3)?;
                Ok((tx_type, category, total, count))
            },
        )?;

        let mut summary = Vec::new();
        for row in raw {
            let (tx_type, category, total, count) = row?;
            let Ok(tx_type) = tx_type.parse::<TransactionType>() else {
                warn!(value = %tx_type, "Skipping row with unknown transaction type");
                continue;
            };
            let category = match category {
                Some(c) => match c.parse::<Category>() {
                    Ok(cat) => Some(cat),
                    Err(_) => {
                        warn!(value = %c, "Skipping row with unknown category tag");
                        continue;
                    }
                },
                None => None,
            };
            summary.push(MonthSummaryRow {
                tx_type,
                category,
                total,
                count,
            });
        }
        Ok(summary)
    }

    /// Monthly category totals for expense entries over a trailing window
    ///
    /// Rows are grouped by (YYYY-MM month key, category) and ordered month
    /// ascending. The window is `months_back` months before `as_of`; callers
    /// inject `as_of` so the window is testable without wall-clock coupling.
    pub fn get_monthly_category_totals(
        &self,
        user_id: i64,
        months_back: u32,
        as_of: NaiveDate,
    ) -> Result<Vec<MonthlyCategoryTotal>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT
                strftime('%Y-%m', date) AS month,
                category,
                SUM(amount) AS total,
                COUNT(*) AS tx_count
            FROM transactions
            WHERE user_id = ?1
              AND type = 'expense'
              AND category IS NOT NULL
              AND date >= date(?2, ?3)
              AND date <= ?2
            GROUP BY month, category
            ORDER BY month ASC, category ASC
            "#,
        )?;

        let modifier = format!("-{} months", months_back);
        let raw = stmt.query_map(
            params![user_id, as_of.to_string(), modifier],
            |row| {
                let month: String = row.get(0)?;
                let category: String = row.get(1)?;
                let total: f64 = row.get(2)?;
                let count: i64 = row.get(3)?;
                Ok((month, category, total, count))
            },
        )?;

        let mut totals = Vec::new();
        for row in raw {
            let (month, category, total, count) = row?;
            let Ok(category) = category.parse::<Category>() else {
                warn!(value = %category, "Skipping aggregation row with unknown category tag");
                continue;
            };
            totals.push(MonthlyCategoryTotal {
                month,
                category,
                total,
                count,
            });
        }
        Ok(totals)
    }

    fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let tx_type: String = row.get(2)?;
        let category: Option<String> = row.get(4)?;
        let date: String = row.get(6)?;
        let created_at: String = row.get(7)?;

        Ok(Transaction {
            id: row.get(0)?,
            user_id: row.get(1)?,
            tx_type: tx_type.parse().unwrap_or(TransactionType::Expense),
            amount: row.get(3)?,
            category: category.and_then(|c| c.parse().ok()),
            description: row.get(5)?,
            date: NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .unwrap_or_else(|_| chrono::Local::now().date_naive()),
            created_at: parse_datetime(&created_at),
        })
    }
}
