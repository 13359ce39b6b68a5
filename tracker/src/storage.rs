//! Durable key/value storage boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store only needs three string operations. Backends:
//! [`MemoryStorage`] here (tests, server-side rendering), `localStorage` in
//! the browser client, and a JSON file in the CLI.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Failure of the underlying storage medium.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage medium exists (private browsing, no window, no config dir).
    #[error("storage unavailable")]
    Unavailable,
    /// The medium exists but the operation failed.
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// String key/value storage that survives a reload.
pub trait Storage {
    /// Read `key`. `Ok(None)` means the entry does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the medium cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same map, which lets tests play the
/// part of a second tab writing to the same origin.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `key` fail until reset with `None`.
    pub fn fail_writes_to(&self, key: Option<&str>) {
        *self.fail_writes.borrow_mut() = key.map(str::to_owned);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn check_write(&self, key: &str) -> Result<(), StorageError> {
        match self.fail_writes.borrow().as_deref() {
            Some(k) if k == key => Err(StorageError::Backend(format!("write to {key} rejected"))),
            _ => Ok(()),
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
