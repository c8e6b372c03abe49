//! Savings goal operations

use chrono::NaiveDate;
use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::Goal;

impl Database {
    /// Create a savings goal
    pub fn create_goal(
        &self,
        user_id: i64,
        name: &str,
        target_amount: f64,
        deadline: Option<NaiveDate>,
    ) -> Result<i64> {
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Goal target must be a positive number, got {}",
                target_amount
            )));
        }

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO goals (user_id, name, target_amount, deadline)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![user_id, name, target_amount, deadline.map(|d| d.to_string())],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// List a user's goals, newest first
    pub fn list_goals(&self, user_id: i64) -> Result<Vec<Goal>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, name, target_amount, current_amount, deadline,
                   created_at, updated_at
            FROM goals
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )?;

        let rows = stmt.query_map(params![user_id], Self::row_to_goal)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Add progress toward a goal, returning the updated goal
    pub fn add_goal_progress(&self, goal_id: i64, amount: f64) -> Result<Goal> {
        let conn = self.conn()?;

        let updated = conn.execute(
            r#"
            UPDATE goals
            SET current_amount = current_amount + ?1,
                updated_at = datetime('now')
            WHERE id = ?2
            "#,
            params![amount, goal_id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("Goal {}", goal_id)));
        }

        let goal = conn.query_row(
            r#"
            SELECT id, user_id, name, target_amount, current_amount, deadline,
                   created_at, updated_at
            FROM goals
            WHERE id = ?1
            "#,
            params![goal_id],
            Self::row_to_goal,
        )?;
        Ok(goal)
    }

    /// Delete a goal owned by a user
    pub fn delete_goal(&self, goal_id: i64, user_id: i64) -> Result<()> {
        let conn = self.conn()?;
        let deleted = conn.execute(
            "DELETE FROM goals WHERE id = ?1 AND user_id = ?2",
            params![goal_id, user_id],
        )?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("Goal {}", goal_id)));
        }
        Ok(())
    }

    fn row_to_goal(row: &rusqlite::Row) -> rusqlite::Result<Goal> {
        let deadline: Option<String> = row.get(5)?;
        let created_at: String = row.get(6)?;
        let updated_at: String = row.get(7)?;

        Ok(Goal {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            target_amount: row.get(3)?,
            current_amount: row.get(4)?,
            deadline: deadline.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
            created_at: parse_datetime(&created_at),
            updated_at: parse_datetime(&updated_at),
        })
    }
}
