//! Disabled storage

use super::{KeyValueStore, StorageError};

/// Storage that refuses every operation, as when the user has turned local storage off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStorage;

impl KeyValueStore for DisabledStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Disabled)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Disabled)
    }
}
