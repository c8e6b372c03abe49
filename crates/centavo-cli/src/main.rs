//! Centavo CLI - Personal finance tracker with behavioral analysis
//!
//! Usage:
//!   centavo init                       Initialize database
//!   centavo expense 12.50 gusto        Record an expense
//!   centavo income 1200 -d "salary"    Record an income
//!   centavo report                     Full behavioral report

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::User { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                UserAction::Add { handle, name } => {
                    commands::cmd_user_add(&db, &handle, name.as_deref())
                }
                UserAction::List => commands::cmd_user_list(&db),
            }
        }
        Commands::Income {
            amount,
            description,
            date,
        } => {
            let db = commands::open_db(&cli.db)?;
            let user_id = commands::resolve_user(&db, &cli.user)?;
            commands::cmd_income(&db, user_id, amount, description.as_deref(), date.as_deref())
        }
        Commands::Expense {
            amount,
            category,
            description,
            date,
        } => {
            let db = commands::open_db(&cli.db)?;
            let user_id = commands::resolve_user(&db, &cli.user)?;
            commands::cmd_expense(
                &db,
                user_id,
                amount,
                &category,
                description.as_deref(),
                date.as_deref(),
            )
        }
        Commands::Transactions { limit } => {
            let db = commands::open_db(&cli.db)?;
            let user_id = commands::resolve_user(&db, &cli.user)?;
            commands::cmd_transactions_list(&db, user_id, limit)
        }
        Commands::Profile { action } => {
            let db = commands::open_db(&cli.db)?;
            let user_id = commands::resolve_user(&db, &cli.user)?;
            match action {
                ProfileAction::Set(args) => commands::cmd_profile_set(&db, user_id, &args),
                ProfileAction::Show => commands::cmd_profile_show(&db, user_id),
            }
        }
        Commands::Goal { action } => {
            let db = commands::open_db(&cli.db)?;
            let user_id = commands::resolve_user(&db, &cli.user)?;
            match action {
                GoalAction::Add {
                    name,
                    target,
                    deadline,
                } => commands::cmd_goal_add(&db, user_id, &name, target, deadline.as_deref()),
                GoalAction::List => commands::cmd_goal_list(&db, user_id),
                GoalAction::Progress { id, amount } => {
                    commands::cmd_goal_progress(&db, id, amount)
                }
                GoalAction::Delete { id } => commands::cmd_goal_delete(&db, user_id, id),
            }
        }
        Commands::Summary { year, month } => {
            let db = commands::open_db(&cli.db)?;
            let user_id = commands::resolve_user(&db, &cli.user)?;
            commands::cmd_summary(&db, user_id, year, month)
        }
        Commands::Report { json, as_of } => {
            let db = commands::open_db(&cli.db)?;
            let user_id = commands::resolve_user(&db, &cli.user)?;
            commands::cmd_report(&db, user_id, json, as_of.as_deref())
        }
    }
}
