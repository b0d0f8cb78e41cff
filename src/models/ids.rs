//! Strongly-typed ID wrappers
//!
//! Groups and members are identified by their names; expenses have no natural
//! key, so each one carries a random UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const EXPENSE_PREFIX: &str = "exp-";

/// Identifier of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

/// Short form: prefix plus the first eight hex digits
impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EXPENSE_PREFIX, &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let display = ExpenseId::new().to_string();
        assert!(display.starts_with("exp-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ExpenseId::new(), ExpenseId::new());
    }

    #[test]
    fn test_serializes_as_plain_uuid() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json.len(), 38);
        let restored: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, restored);
    }
}
