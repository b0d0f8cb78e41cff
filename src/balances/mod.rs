//! Balance engine
//!
//! Computes who owes whom within a group. The engine is a set of pure
//! functions over borrowed members and expenses:
//!
//! - [`accumulate`] divides each expense equally among its split and records
//!   one share per participant against the payer.
//! - [`BalanceMatrix::simplify`] nets reciprocal debts so each pair of members
//!   has at most one non-zero direction.
//! - [`compute_balances`] does both.
//!
//! Amounts are exact decimals; rounding is left to presentation code.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use split_ledger::balances::compute_balances;
//! use split_ledger::models::{Expense, Member, Money};
//!
//! let members = vec![Member::new("A"), Member::new("B"), Member::new("C")];
//! let dinner = Expense::new(Member::new("A"), Money::from_cents(9000), "Dinner", members.clone());
//!
//! let matrix = compute_balances(&members, &[dinner]);
//! assert_eq!(matrix.get("B", "A"), Decimal::new(30, 0));
//! assert_eq!(matrix.get("A", "B"), Decimal::ZERO);
//! ```

mod engine;
mod matrix;

pub use engine::{accumulate, compute_balances};
pub use matrix::{BalanceMatrix, Debt};
