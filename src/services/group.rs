//! Group service
//!
//! Provides business logic for creating groups and managing their members.

use tracing::info;

use super::group_error;
use crate::error::{SplitError, SplitResult};
use crate::models::{Group, Member};
use crate::storage::Storage;

/// Service for group and member management
pub struct GroupService<'a> {
    storage: &'a Storage,
}

impl<'a> GroupService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new, empty group
    pub fn create(&self, name: &str) -> SplitResult<Group> {
        let group = Group::new(name);
        group
            .validate()
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        self.storage.groups.insert(group.clone())?;

        info!(group = %group.name, "created group");
        Ok(group)
    }

    /// Get a group by name, failing if it doesn't exist
    pub fn get(&self, name: &str) -> SplitResult<Group> {
        self.find(name)?
            .ok_or_else(|| SplitError::group_not_found(name.trim()))
    }

    pub fn find(&self, name: &str) -> SplitResult<Option<Group>> {
        self.storage.groups.get(name.trim())
    }

    /// List all groups in creation order
    pub fn list(&self) -> SplitResult<Vec<Group>> {
        self.storage.groups.get_all()
    }

    /// Add a member to a group
    pub fn add_member(&self, group_name: &str, member_name: &str) -> SplitResult<Group> {
        let mut group = self.get(group_name)?;
        let member = Member::new(member_name);

        group
            .add_member(member.clone())
            .map_err(|e| group_error(&group.name, e))?;

        self.storage.groups.update(group.clone())?;

        info!(group = %group.name, member = %member, "added member");
        Ok(group)
    }

    /// Members of a group, in the order they joined
    pub fn members(&self, group_name: &str) -> SplitResult<Vec<Member>> {
        Ok(self.get(group_name)?.members)
    }

    pub fn count(&self) -> SplitResult<usize> {
        self.storage.groups.count()
    }
}
