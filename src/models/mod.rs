//! Core data models for split-ledger
//!
//! Groups, their members, the expenses they share, and the `Money` type used
//! for stored amounts.

pub mod expense;
pub mod group;
pub mod ids;
pub mod member;
pub mod money;

pub use expense::{Expense, ExpenseValidationError};
pub use group::{Group, GroupError};
pub use ids::ExpenseId;
pub use member::{Member, MemberValidationError};
pub use money::{format_decimal, Money, MoneyParseError};
