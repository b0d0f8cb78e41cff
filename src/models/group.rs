//! Group model
//!
//! A group owns an ordered member list and an ordered expense history. Both
//! only ever grow.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::{Expense, ExpenseValidationError};
use super::member::{Member, MemberValidationError};

/// A named collection of members and their shared expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique group name
    pub name: String,

    #[serde(default)]
    pub members: Vec<Member>,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            members: Vec::new(),
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.as_str() == name)
    }

    /// Append a member; names must be unique within the group
    pub fn add_member(&mut self, member: Member) -> Result<(), GroupError> {
        member.validate().map_err(GroupError::InvalidMember)?;

        if self.has_member(member.as_str()) {
            return Err(GroupError::DuplicateMember(member));
        }

        self.members.push(member);
        Ok(())
    }

    /// Append an expense to the history
    ///
    /// An empty split is replaced by a snapshot of the current member list.
    /// Members added later are never added to this expense.
    pub fn add_expense(&mut self, mut expense: Expense) -> Result<&Expense, GroupError> {
        expense.validate().map_err(GroupError::InvalidExpense)?;

        if !self.has_member(expense.payer.as_str()) {
            return Err(GroupError::UnknownMember(expense.payer));
        }

        if expense.split.is_empty() {
            expense.split = self.members.clone();
        }

        if let Some(stranger) = expense.split.iter().find(|m| !self.has_member(m.as_str())) {
            return Err(GroupError::UnknownMember(stranger.clone()));
        }

        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount.to_decimal()).sum()
    }

    pub fn validate(&self) -> Result<(), GroupError> {
        if self.name.trim().is_empty() {
            return Err(GroupError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(GroupError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Errors raised while building up a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    EmptyName,
    NameTooLong(usize),
    InvalidMember(MemberValidationError),
    DuplicateMember(Member),
    UnknownMember(Member),
    InvalidExpense(ExpenseValidationError),
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Group name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Group name too long ({} chars, max 100)", len),
            Self::InvalidMember(e) => write!(f, "{}", e),
            Self::DuplicateMember(m) => write!(f, "Member already in group: {}", m),
            Self::UnknownMember(m) => write!(f, "Not a member of the group: {}", m),
            Self::InvalidExpense(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GroupError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use rust_decimal_macros::dec;

    fn group_with(names: &[&str]) -> Group {
        let mut group = Group::new("Trip");
        for name in names {
            group.add_member(Member::new(name)).unwrap();
        }
        group
    }

    fn expense(payer: &str, cents: i64, split: &[&str]) -> Expense {
        Expense::new(
            Member::new(payer),
            Money::from_cents(cents),
            "Something",
            split.iter().map(|n| Member::new(n)),
        )
    }

    #[test]
    fn test_add_member_rejects_duplicates_and_blanks() {
        let mut group = group_with(&["Ana"]);

        assert_eq!(
            group.add_member(Member::new("Ana")),
            Err(GroupError::DuplicateMember(Member::new("Ana")))
        );
        assert_eq!(
            group.add_member(Member::new("  ")),
            Err(GroupError::InvalidMember(MemberValidationError::EmptyName))
        );
        assert_eq!(group.members.len(), 1);
    }

    #[test]
    fn test_empty_split_snapshots_current_members() {
        let mut group = group_with(&["Ana", "Ben", "Cy"]);
        group.add_expense(expense("Ana", 9000, &[])).unwrap();

        group.add_member(Member::new("Dee")).unwrap();

        let split: Vec<_> = group.expenses[0].split.iter().map(|m| m.as_str()).collect();
        assert_eq!(split, vec!["Ana", "Ben", "Cy"]);
    }

    #[test]
    fn test_unknown_payer_rejected() {
        let mut group = group_with(&["Ana", "Ben"]);
        let err = group.add_expense(expense("Zed", 100, &[])).unwrap_err();
        assert_eq!(err, GroupError::UnknownMember(Member::new("Zed")));
        assert!(group.expenses.is_empty());
    }

    #[test]
    fn test_unknown_split_member_rejected() {
        let mut group = group_with(&["Ana", "Ben"]);
        let err = group
            .add_expense(expense("Ana", 100, &["Ana", "Zed"]))
            .unwrap_err();
        assert_eq!(err, GroupError::UnknownMember(Member::new("Zed")));
        assert!(group.expenses.is_empty());
    }

    #[test]
    fn test_invalid_expense_rejected() {
        let mut group = group_with(&["Ana"]);
        let err = group.add_expense(expense("Ana", 0, &[])).unwrap_err();
        assert!(matches!(err, GroupError::InvalidExpense(_)));
    }

    #[test]
    fn test_total_spent() {
        let mut group = group_with(&["Ana", "Ben"]);
        group.add_expense(expense("Ana", 1000, &[])).unwrap();
        group.add_expense(expense("Ben", 250, &["Ana"])).unwrap();
        assert_eq!(group.total_spent(), dec!(12.50));
    }

    #[test]
    fn test_total_spent_of_largest_amounts() {
        let mut group = group_with(&["Ana", "Ben"]);
        let max = Money::parse("92233720368547758.07").unwrap();
        for payer in ["Ana", "Ben"] {
            group
                .add_expense(Expense::new(Member::new(payer), max, "Yacht", vec![]))
                .unwrap();
        }
        assert_eq!(group.total_spent(), dec!(184467440737095516.14));
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(Group::new("  ").validate(), Err(GroupError::EmptyName));
        assert!(Group::new("Flat 3B").validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let group: Group = serde_json::from_str(r#"{"name": "Trip"}"#).unwrap();
        assert_eq!(group.name, "Trip");
        assert!(group.members.is_empty());
        assert!(group.expenses.is_empty());
    }
}
