//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init) and shared utilities (open_db, resolve_user)
//! - `users` - User registration and listing
//! - `transactions` - Income/expense recording, listing, monthly summary
//! - `profile` - Financial profile commands (set, show)
//! - `goals` - Savings goal commands
//! - `report` - Behavioral report command

pub mod core;
pub mod goals;
pub mod profile;
pub mod report;
pub mod transactions;
pub mod users;

// Re-export command functions for main.rs
pub use core::*;
pub use goals::*;
pub use profile::*;
pub use report::*;
pub use transactions::*;
pub use users::*;

/// Truncate a string to a maximum number of characters, adding "..." if
/// truncated. Counts chars, not bytes, so multi-byte text never splits.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
