//! Savings goal command implementations

use anyhow::Result;
use centavo_core::db::Database;
use chrono::NaiveDate;

use super::transactions::parse_date;

pub fn cmd_goal_add(
    db: &Database,
    user_id: i64,
    name: &str,
    target: f64,
    deadline: Option<&str>,
) -> Result<()> {
    let deadline: Option<NaiveDate> = deadline.map(|d| parse_date(Some(d))).transpose()?;
    let id = db.create_goal(user_id, name, target, deadline)?;

    println!("✅ Goal created [{}]: {} (${:.2})", id, name, target);
    if let Some(d) = deadline {
        println!("   Deadline: {}", d);
    }
    Ok(())
}

pub fn cmd_goal_list(db: &Database, user_id: i64) -> Result<()> {
    let goals = db.list_goals(user_id)?;

    if goals.is_empty() {
        println!("No goals yet. Create one with:");
        println!("  centavo goal add \"Vacaciones\" 500");
        return Ok(());
    }

    println!();
    println!("🎯 Savings Goals");
    println!("   ─────────────────────────────────────────────────────");

    for goal in goals {
        let pct = if goal.target_amount > 0.0 {
            (goal.current_amount / goal.target_amount * 100.0).min(100.0)
        } else {
            0.0
        };
        let deadline = goal
            .deadline
            .map(|d| format!(" (by {})", d))
            .unwrap_or_default();

        println!(
            "   [{}] {:<20} ${:>8.2} / ${:>8.2}  {:>5.1}%{}",
            goal.id, goal.name, goal.current_amount, goal.target_amount, pct, deadline
        );
    }

    Ok(())
}

pub fn cmd_goal_progress(db: &Database, goal_id: i64, amount: f64) -> Result<()> {
    let goal = db.add_goal_progress(goal_id, amount)?;

    println!(
        "✅ Added ${:.2} to '{}': ${:.2} / ${:.2}",
        amount, goal.name, goal.current_amount, goal.target_amount
    );
    if goal.current_amount >= goal.target_amount {
        println!("   🎉 Goal reached!");
    }
    Ok(())
}

pub fn cmd_goal_delete(db: &Database, user_id: i64, goal_id: i64) -> Result<()> {
    db.delete_goal(goal_id, user_id)?;
    println!("✅ Goal {} deleted", goal_id);
    Ok(())
}
