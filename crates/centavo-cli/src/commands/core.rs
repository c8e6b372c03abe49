//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `resolve_user` - Map a handle to a user id
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use centavo_core::db::Database;

pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

/// Resolve a handle to a user id, failing with a hint if it is unknown
pub fn resolve_user(db: &Database, handle: &str) -> Result<i64> {
    let user = db
        .find_user(handle)?
        .with_context(|| format!("User '{}' not found. Register with: centavo user add {}", handle, handle))?;
    Ok(user.id)
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    let user_id = db.create_user("default", None)?;
    println!("   Created default user (id {})", user_id);

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record an expense: centavo expense 12.50 gusto -d \"cafe\"");
    println!("  2. Declare your salary: centavo profile set --salary 1200 --frequency mensual --complete");
    println!("  3. Get your report: centavo report");

    Ok(())
}
