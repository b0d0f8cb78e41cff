//! Expense model
//!
//! An expense records who paid, how much, and which members share the cost.
//! The split is stored explicitly on every expense; defaulting an empty split
//! to the group's members happens once, when the expense is added to a group
//! (see [`Group::add_expense`](super::Group::add_expense)).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ids::ExpenseId;
use super::member::Member;
use super::money::Money;

/// A shared expense paid by one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Member who paid
    pub payer: Member,

    /// Total amount paid
    pub amount: Money,

    pub description: String,

    /// Members sharing the cost, in selection order, without duplicates
    pub split: Vec<Member>,

    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense; duplicate split entries keep their first occurrence
    pub fn new(
        payer: Member,
        amount: Money,
        description: impl Into<String>,
        split: impl IntoIterator<Item = Member>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            payer,
            amount,
            description: description.into().trim().to_string(),
            split: dedup_members(split),
            created_at: Utc::now(),
        }
    }

    /// Whether `member` shares the cost of this expense
    pub fn includes(&self, member: &str) -> bool {
        self.split.iter().any(|m| m.as_str() == member)
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.payer.validate().is_err() {
            return Err(ExpenseValidationError::MissingPayer);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::MissingDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} paid {}",
            self.description, self.payer, self.amount
        )
    }
}

pub(crate) fn dedup_members(members: impl IntoIterator<Item = Member>) -> Vec<Member> {
    let mut seen = HashSet::new();
    members
        .into_iter()
        .filter(|m| seen.insert(m.clone()))
        .collect()
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    MissingPayer,
    MissingDescription,
    NonPositiveAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPayer => write!(f, "Expense must have a payer"),
            Self::MissingDescription => write!(f, "Expense must have a description"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(names: &[&str]) -> Vec<Member> {
        names.iter().map(|n| Member::new(n)).collect()
    }

    #[test]
    fn test_new_dedups_split() {
        let expense = Expense::new(
            Member::new("Ana"),
            Money::from_cents(900),
            "Taxi",
            members(&["Ana", "Ben", "Ana", "Cy", "Ben"]),
        );
        assert_eq!(expense.split, members(&["Ana", "Ben", "Cy"]));
        assert!(expense.includes("Cy"));
        assert!(!expense.includes("Dee"));
    }

    #[test]
    fn test_validation() {
        let ok = Expense::new(Member::new("Ana"), Money::from_cents(100), "Tea", vec![]);
        assert!(ok.validate().is_ok());

        let no_payer = Expense::new(Member::new(" "), Money::from_cents(100), "Tea", vec![]);
        assert_eq!(no_payer.validate(), Err(ExpenseValidationError::MissingPayer));

        let no_desc = Expense::new(Member::new("Ana"), Money::from_cents(100), "  ", vec![]);
        assert_eq!(
            no_desc.validate(),
            Err(ExpenseValidationError::MissingDescription)
        );

        let zero = Expense::new(Member::new("Ana"), Money::zero(), "Tea", vec![]);
        assert!(matches!(
            zero.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_serialization_keeps_split_order() {
        let expense = Expense::new(
            Member::new("Cy"),
            Money::from_cents(1234),
            "Dinner",
            members(&["Cy", "Ana", "Ben"]),
        );
        let json = serde_json::to_string(&expense).unwrap();
        let restored: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, expense);
        assert_eq!(restored.split, members(&["Cy", "Ana", "Ben"]));
    }
}
