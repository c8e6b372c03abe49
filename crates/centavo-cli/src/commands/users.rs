//! User command implementations

use anyhow::Result;
use centavo_core::db::Database;

pub fn cmd_user_add(db: &Database, handle: &str, name: Option<&str>) -> Result<()> {
    let user_id = db.create_user(handle, name)?;
    println!("✅ User '{}' ready (id {})", handle, user_id);
    println!("   Use it with: centavo --user {} <command>", handle);
    Ok(())
}

pub fn cmd_user_list(db: &Database) -> Result<()> {
    let users = db.list_users()?;

    if users.is_empty() {
        println!("No users yet. Add one with: centavo user add <handle>");
        return Ok(());
    }

    println!();
    println!("👥 Users");
    println!("   ─────────────────────────────────────────");
    for user in users {
        println!(
            "   [{}] {} {}",
            user.id,
            user.handle,
            user.display_name.as_deref().unwrap_or("")
        );
    }

    Ok(())
}
