//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Centavo - Personal finance tracker with behavioral analysis
#[derive(Parser)]
#[command(name = "centavo")]
#[command(about = "Track income and expenses, get behavioral spending insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "centavo.db", global = true)]
    pub db: PathBuf,

    /// User handle the command acts on
    #[arg(short, long, default_value = "default", global = true)]
    pub user: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Record an income entry
    Income {
        /// Amount received
        amount: f64,

        /// What the income was
        #[arg(short, long)]
        description: Option<String>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record an expense entry
    Expense {
        /// Amount spent
        amount: f64,

        /// Budget category: necesidad, gusto, ahorro
        category: String,

        /// What the expense was
        #[arg(short, long)]
        description: Option<String>,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List recent transactions
    Transactions {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Manage the financial profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage savings goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Show the 50/30/20 summary for a month
    Summary {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Generate the full behavioral report
    Report {
        /// Print the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Anchor date for the analysis window (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        as_of: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// Register a user
    Add {
        /// Unique handle
        handle: String,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List registered users
    List,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Update profile fields (only the flags you pass are changed)
    Set(ProfileSetArgs),

    /// Show the profile, including the latest behavioral snapshot
    Show,
}

#[derive(Args, Default)]
pub struct ProfileSetArgs {
    /// Salary per pay period
    #[arg(long)]
    pub salary: Option<f64>,

    /// Pay frequency: semanal, quincenal, mensual
    #[arg(long)]
    pub frequency: Option<String>,

    /// Whether the user is a student
    #[arg(long)]
    pub student: Option<bool>,

    /// Monthly study cost
    #[arg(long)]
    pub study: Option<f64>,

    /// Monthly transport cost
    #[arg(long)]
    pub transport: Option<f64>,

    /// Monthly food cost
    #[arg(long)]
    pub food: Option<f64>,

    /// Monthly leisure cost
    #[arg(long)]
    pub leisure: Option<f64>,

    /// Monthly services cost (rent, utilities, phone)
    #[arg(long)]
    pub services: Option<f64>,

    /// Total outstanding debt
    #[arg(long)]
    pub debt_total: Option<f64>,

    /// Monthly debt installment
    #[arg(long)]
    pub debt_monthly: Option<f64>,

    /// Current savings balance
    #[arg(long)]
    pub savings: Option<f64>,

    /// Whether the user is employed
    #[arg(long)]
    pub employed: Option<bool>,

    /// Income type (e.g. fijo, variable)
    #[arg(long)]
    pub income_type: Option<String>,

    /// Mark onboarding as completed
    #[arg(long)]
    pub complete: bool,
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,

        /// Target amount
        target: f64,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// List goals with progress
    List,

    /// Add progress toward a goal
    Progress {
        /// Goal ID
        id: i64,

        /// Amount to add
        amount: f64,
    },

    /// Delete a goal
    Delete {
        /// Goal ID
        id: i64,
    },
}
