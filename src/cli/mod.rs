//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod group;

pub use expense::{handle_balances_command, handle_expense_command, ExpenseCommands};
pub use group::{handle_group_command, handle_member_command, GroupCommands, MemberCommands};
