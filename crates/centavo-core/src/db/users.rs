//! User operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::User;

impl Database {
    /// Create a user if the handle is new, returning its id either way
    pub fn create_user(&self, handle: &str, display_name: Option<&str>) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT OR IGNORE INTO users (handle, display_name) VALUES (?1, ?2)",
            params![handle, display_name],
        )?;

        let id: i64 = conn.query_row(
            "SELECT id FROM users WHERE handle = ?1",
            params![handle],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Look up a user by handle
    pub fn find_user(&self, handle: &str) -> Result<Option<User>> {
        let conn = self.conn()?;

        let result = conn.query_row(
            "SELECT id, handle, display_name, created_at FROM users WHERE handle = ?1",
            params![handle],
            Self::row_to_user,
        );

        match result {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// List all users, oldest first
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn()?;

        let mut stmt =
            conn.prepare("SELECT id, handle, display_name, created_at FROM users ORDER BY id")?;
        let rows = stmt.query_map([], Self::row_to_user)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
        let created_at: String = row.get(3)?;
        Ok(User {
            id: row.get(0)?,
            handle: row.get(1)?,
            display_name: row.get(2)?,
            created_at: parse_datetime(&created_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_is_idempotent() {
        let db = Database::in_memory().unwrap();

        let id1 = db.create_user("luis", Some("Luis")).unwrap();
        let id2 = db.create_user("luis", Some("Luis")).unwrap();
        assert_eq!(id1, id2);

        let users = db.list_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].handle, "luis");
    }

    #[test]
    fn test_find_missing_user() {
        let db = Database::in_memory().unwrap();
        assert!(db.find_user("nobody").unwrap().is_none());
    }
}
