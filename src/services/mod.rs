//! Service layer for split-ledger
//!
//! The service layer provides business logic on top of the storage layer:
//! validating submitted groups, members and expenses, persisting accepted
//! changes, and running the balance engine. A rejected submission never
//! changes stored data.

pub mod expense;
pub mod group;

pub use expense::{ExpenseService, NewExpense};
pub use group::GroupService;

use crate::error::SplitError;
use crate::models::GroupError;

/// Translate a model-level rejection into a service error for `group`
pub(crate) fn group_error(group: &str, err: GroupError) -> SplitError {
    match err {
        GroupError::DuplicateMember(member) => SplitError::Duplicate {
            entity_type: "Member",
            identifier: member.to_string(),
        },
        GroupError::UnknownMember(member) => SplitError::UnknownMember {
            group: group.to_string(),
            member: member.to_string(),
        },
        other => SplitError::Validation(other.to_string()),
    }
}
