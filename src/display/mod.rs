//! Display formatting for terminal output
//!
//! Provides utilities for formatting groups and expenses for terminal display.
//! The balance report formats itself (see [`crate::reports::BalanceReport`]).

pub mod expense;
pub mod group;

pub use expense::{format_expense_details, format_expense_list};
pub use group::{format_group_details, format_group_list, format_member_list};
