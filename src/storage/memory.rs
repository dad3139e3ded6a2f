//! In-memory storage

use std::sync::{Arc, Mutex, MutexGuard};

use rustc_hash::FxHashMap;

use super::{KeyValueStore, StorageError};

/// Process-local storage.
///
/// Clones share the same slots, so two stores built over clones of one `MemoryStorage` behave
/// like two browser tabs over one origin's local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<FxHashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    /// Create empty storage with no size limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty storage that holds at most `quota` bytes of keys and values.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, FxHashMap<String, String>>, StorageError> {
        self.slots.lock().map_err(|_poisoned| StorageError::Unavailable)
    }
}

fn used_bytes(slots: &FxHashMap<String, String>, skip: &str) -> usize {
    slots
        .iter()
        .filter(|(key, _)| key.as_str() != skip)
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.lock()?;

        if let Some(quota) = self.quota {
            let needed = used_bytes(&slots, key) + key.len() + value.len();

            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        slots.insert(key.to_string(), value.to_string());

        Ok(())
    }
}
