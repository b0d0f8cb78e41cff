//! Group member model

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A member of a group, identified by name
///
/// Names are compared exactly: "Ana" and "ana" are two different members.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member(String);

impl Member {
    /// Create a member, trimming surrounding whitespace
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.0.is_empty() {
            return Err(MemberValidationError::EmptyName);
        }

        if self.0.len() > 100 {
            return Err(MemberValidationError::NameTooLong(self.0.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Member {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Member {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Member {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Member name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for MemberValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims() {
        assert_eq!(Member::new("  Ana ").as_str(), "Ana");
    }

    #[test]
    fn test_validation() {
        assert!(Member::new("Ana").validate().is_ok());
        assert_eq!(
            Member::new("   ").validate(),
            Err(MemberValidationError::EmptyName)
        );
        assert!(matches!(
            Member::new("x".repeat(101)).validate(),
            Err(MemberValidationError::NameTooLong(101))
        ));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_ne!(Member::new("Ana"), Member::new("ana"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Member::new("Ana")).unwrap();
        assert_eq!(json, "\"Ana\"");
    }
}
