//! Reports for split-ledger
//!
//! - Balance report: who owes whom within a group

pub mod balance;

pub use balance::{BalanceReport, Counterparty, MemberBalance};
