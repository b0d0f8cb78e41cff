//! Group repository
//!
//! In-memory cache of the group list in front of a [`GroupStore`]. Every
//! change is written to the store first; the cache only moves once the store
//! has accepted the new list.

use std::sync::RwLock;

use crate::error::SplitError;
use crate::models::Group;

use super::store::GroupStore;

/// Repository for group persistence
pub struct GroupRepository {
    store: Box<dyn GroupStore>,
    /// Groups in creation order
    data: RwLock<Vec<Group>>,
}

impl GroupRepository {
    pub fn new(store: Box<dyn GroupStore>) -> Self {
        Self {
            store,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load groups from the store, replacing the cache
    pub fn load(&self) -> Result<(), SplitError> {
        let groups = self.store.load()?.unwrap_or_default();

        let mut data = self
            .data
            .write()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = groups;

        Ok(())
    }

    /// Apply `change` to a copy of the cache, persist it, then swap it in
    fn commit<F>(&self, change: F) -> Result<(), SplitError>
    where
        F: FnOnce(&mut Vec<Group>) -> Result<(), SplitError>,
    {
        let mut data = self
            .data
            .write()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut next = data.clone();
        change(&mut next)?;
        self.store.save(&next)?;
        *data = next;

        Ok(())
    }

    /// Get a group by exact name
    pub fn get(&self, name: &str) -> Result<Option<Group>, SplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|g| g.name == name).cloned())
    }

    /// Get all groups in creation order
    pub fn get_all(&self) -> Result<Vec<Group>, SplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Add and persist a new group; names must be unique
    pub fn insert(&self, group: Group) -> Result<(), SplitError> {
        self.commit(|groups| {
            if groups.iter().any(|g| g.name == group.name) {
                return Err(SplitError::Duplicate {
                    entity_type: "Group",
                    identifier: group.name,
                });
            }

            groups.push(group);
            Ok(())
        })
    }

    /// Replace and persist the group with the same name, keeping its position
    pub fn update(&self, group: Group) -> Result<(), SplitError> {
        self.commit(|groups| match groups.iter_mut().find(|g| g.name == group.name) {
            Some(slot) => {
                *slot = group;
                Ok(())
            }
            None => Err(SplitError::group_not_found(group.name)),
        })
    }

    pub fn count(&self) -> Result<usize, SplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
