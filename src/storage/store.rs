//! Group stores
//!
//! A store keeps the complete list of groups under a single key and is only
//! ever read or written as a whole.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SplitError;
use crate::models::Group;

use super::file_io::{read_json, write_json_atomic};

/// Persistence backend for the group list
pub trait GroupStore: Send + Sync {
    /// Load every group, or `None` if nothing has been saved yet
    fn load(&self) -> Result<Option<Vec<Group>>, SplitError>;

    /// Replace the stored group list
    fn save(&self, groups: &[Group]) -> Result<(), SplitError>;
}

/// Stores the group list as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl GroupStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<Group>>, SplitError> {
        read_json(&self.path)
    }

    fn save(&self, groups: &[Group]) -> Result<(), SplitError> {
        write_json_atomic(&self.path, groups)
    }
}

/// Keeps the serialized group list in memory
///
/// Data goes through the same JSON encoding as [`JsonFileStore`], so
/// round-trip behaviour is identical.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RwLock<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GroupStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<Group>>, SplitError> {
        let value = self
            .value
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        match value.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, groups: &[Group]) -> Result<(), SplitError> {
        let json = serde_json::to_string(groups)?;
        let mut value = self
            .value
            .write()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *value = Some(json);
        Ok(())
    }
}
