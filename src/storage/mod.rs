//! Durable key-value storage
//!
//! The cart persists to a single slot in a per-device key-value store. Backends report every
//! failure as a [`StorageError`]; deciding what a failure means is left to the caller.

use std::io;

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

mod disabled;
mod file;
mod memory;

pub use disabled::DisabledStorage;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors reported by storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed.
    #[error("storage I/O error")]
    Io(#[from] io::Error),

    /// The key contains characters the backend cannot store.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// Writing the value would exceed the backend's capacity.
    #[error("storage quota exceeded: {needed} bytes needed, {quota} bytes available")]
    QuotaExceeded {
        /// Bytes the store would hold after the write
        needed: usize,

        /// Bytes the store may hold
        quota: usize,
    },

    /// Storage has been turned off for this device.
    #[error("storage is disabled")]
    Disabled,

    /// The backend is in a state where it cannot be used.
    #[error("storage unavailable")]
    Unavailable,
}

/// A durable string key-value store, the way a browser exposes local storage.
#[cfg_attr(test, automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
