//! split-ledger - Terminal-based shared expense tracker
//!
//! This library provides the core functionality for the `split` command. A
//! group of people records shared expenses; the balance engine turns those
//! expenses into a simplified pairwise "who owes whom" matrix.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `balances`: Pairwise balance matrix and the computation engine
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (groups, members, expenses, money)
//! - `storage`: JSON storage layer
//! - `services`: Business logic layer
//! - `reports`: Balance reports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use split_ledger::models::Money;
//! use split_ledger::services::{ExpenseService, GroupService, NewExpense};
//! use split_ledger::storage::Storage;
//!
//! # fn main() -> split_ledger::SplitResult<()> {
//! let storage = Storage::in_memory();
//! let groups = GroupService::new(&storage);
//! groups.create("Trip")?;
//! groups.add_member("Trip", "A")?;
//! groups.add_member("Trip", "B")?;
//!
//! let expenses = ExpenseService::new(&storage);
//! expenses.add(
//!     "Trip",
//!     NewExpense {
//!         payer: "A".into(),
//!         amount: Money::from_cents(6000),
//!         description: "Dinner".into(),
//!         split: vec![],
//!     },
//! )?;
//!
//! let report = expenses.report("Trip")?;
//! assert!(!report.is_settled());
//! # Ok(())
//! # }
//! ```

pub mod balances;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
