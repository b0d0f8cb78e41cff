//! Storage layer for split-ledger
//!
//! All groups live under one key (`groups-data`). The default backend is a
//! JSON file written atomically; an in-memory backend is available for tests
//! and embedding.

pub mod file_io;
pub mod groups;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use groups::GroupRepository;
pub use store::{GroupStore, JsonFileStore, MemoryStore};

use crate::config::paths::SplitPaths;
use crate::error::SplitError;

/// Main storage coordinator
pub struct Storage {
    pub groups: GroupRepository,
}

impl Storage {
    /// Create file-backed storage under the given paths
    pub fn new(paths: &SplitPaths) -> Result<Self, SplitError> {
        paths.ensure_directories()?;
        Ok(Self::with_store(Box::new(JsonFileStore::new(
            paths.groups_file(),
        ))))
    }

    /// Create storage on top of an arbitrary backend
    pub fn with_store(store: Box<dyn GroupStore>) -> Self {
        Self {
            groups: GroupRepository::new(store),
        }
    }

    /// Create storage that never touches the filesystem
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Load all data from the backend
    pub fn load_all(&self) -> Result<(), SplitError> {
        self.groups.load()
    }
}
