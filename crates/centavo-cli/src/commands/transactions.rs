//! Transaction command implementations: record entries, list, monthly summary

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use centavo_core::analysis::analyze_month;
use centavo_core::db::Database;
use centavo_core::models::{Category, NewTransaction, TransactionType};

use super::truncate;

/// Parse an optional YYYY-MM-DD date, defaulting to today
pub fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}' (use YYYY-MM-DD)", s)),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn cmd_income(
    db: &Database,
    user_id: i64,
    amount: f64,
    description: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let date = parse_date(date)?;
    let id = db.insert_transaction(
        user_id,
        &NewTransaction {
            tx_type: TransactionType::Income,
            amount,
            category: None,
            description: description.map(str::to_string),
            date,
        },
    )?;

    println!("✅ Income recorded [{}]: +${:.2} on {}", id, amount, date);
    Ok(())
}

pub fn cmd_expense(
    db: &Database,
    user_id: i64,
    amount: f64,
    category: &str,
    description: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let category: Category = category.parse().map_err(|_: String| {
        let valid: Vec<&str> = Category::all().iter().map(Category::as_str).collect();
        anyhow!(
            "Unknown category '{}' (expected one of: {})",
            category,
            valid.join(", ")
        )
    })?;
    let date = parse_date(date)?;
    let id = db.insert_transaction(
        user_id,
        &NewTransaction {
            tx_type: TransactionType::Expense,
            amount,
            category: Some(category),
            description: description.map(str::to_string),
            date,
        },
    )?;

    println!(
        "✅ Expense recorded [{}]: ${:.2} ({}) on {}",
        id,
        amount,
        category.label(),
        date
    );
    Ok(())
}

pub fn cmd_transactions_list(db: &Database, user_id: i64, limit: usize) -> Result<()> {
    let transactions = db.list_recent_transactions(user_id, limit)?;

    if transactions.is_empty() {
        println!("No transactions yet. Record one with:");
        println!("  centavo expense 12.50 gusto -d \"cafe\"");
        return Ok(());
    }

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in transactions {
        let amount_str = match tx.tx_type {
            TransactionType::Expense => format!("\x1b[31m${:.2}\x1b[0m", tx.amount),
            TransactionType::Income => format!("\x1b[32m+${:.2}\x1b[0m", tx.amount),
        };
        let category = tx.category.map(|c| c.label()).unwrap_or("-");

        println!(
            "   {} │ {:>10} │ {:<12} │ {}",
            tx.date,
            amount_str,
            category,
            truncate(tx.description.as_deref().unwrap_or(""), 40)
        );
    }

    Ok(())
}

pub fn cmd_summary(
    db: &Database,
    user_id: i64,
    year: Option<i32>,
    month: Option<u32>,
) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let income = db.get_total_by_type(user_id, TransactionType::Income, year, month)?;
    let summary = db.get_summary_by_month(user_id, year, month)?;
    let analysis = analyze_month(income, &summary);

    println!();
    println!("📊 Summary for {}-{:02}", year, month);
    println!("   ─────────────────────────────────────────");
    println!("   Income:          ${:>10.2}", analysis.income);
    println!("   Expenses:        ${:>10.2}", analysis.total_expenses);
    println!("   Surplus:         ${:>10.2}", analysis.surplus);
    println!();
    println!("   50/30/20                actual       ideal");
    println!(
        "   Necesidades:     ${:>10.2} ${:>10.2}",
        analysis.actual.needs, analysis.ideal.needs
    );
    println!(
        "   Ocio:            ${:>10.2} ${:>10.2}",
        analysis.actual.wants, analysis.ideal.wants
    );
    println!(
        "   Ahorro:          ${:>10.2} ${:>10.2}",
        analysis.actual.savings, analysis.ideal.savings
    );

    if !analysis.alerts.is_empty() {
        println!();
        for alert in &analysis.alerts {
            println!("   {}", alert);
        }
    }

    Ok(())
}
