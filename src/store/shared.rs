//! Shared store wrapper
//!
//! [`ObjectStore`] is single-threaded by design: every operation runs to
//! completion before the next begins, and the calling framework is
//! expected to serialize requests to one provider instance.
//!
//! ## Concurrency Model: Coarse-Grained Mutual Exclusion
//!
//! When a store must be visible from more than one thread, `SharedStore`
//! applies the minimum viable discipline:
//!
//! - ONE mutex around the whole store
//! - Every public operation takes the lock for its full duration
//! - No finer granularity — operations are cheap, short, and never block
//!   on I/O, so contention is bounded by the work itself
//!
//! Compound read-modify-write sequences that must be atomic should go
//! through [`SharedStore::with`], which holds the lock across the closure.

use parking_lot::Mutex;

use crate::error::Result;
use crate::key::Key;
use crate::record::Record;

use super::{Entry, ObjectStore};

/// A mutex-guarded [`ObjectStore`] safe to share across threads
#[derive(Debug)]
pub struct SharedStore {
    inner: Mutex<ObjectStore>,
}

impl SharedStore {
    /// Create an empty shared store ordering by the named record property
    pub fn new(ordering_field: impl Into<String>) -> Self {
        Self::from_store(ObjectStore::new(ordering_field))
    }

    /// Wrap an existing store
    pub fn from_store(store: ObjectStore) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    /// Insert a new entry (see [`ObjectStore::insert`])
    pub fn insert(&self, key: Key, record: Record) -> Result<()> {
        self.inner.lock().insert(key, record)
    }

    /// Exact composite-key lookup (see [`ObjectStore::exact_find`])
    pub fn exact_find(&self, key: &Key) -> Option<usize> {
        self.inner.lock().exact_find(key)
    }

    /// Partial composite-key lookup (see [`ObjectStore::fuzzy_find`])
    pub fn fuzzy_find(&self, query: &Key) -> Option<usize> {
        self.inner.lock().fuzzy_find(query)
    }

    /// Delete by exact key match (see [`ObjectStore::delete`])
    pub fn delete(&self, key: &Key) -> Result<Entry> {
        self.inner.lock().delete(key)
    }

    /// Replace by exact key match (see [`ObjectStore::replace`])
    pub fn replace(&self, key: &Key, record: Record) -> Result<Record> {
        self.inner.lock().replace(key, record)
    }

    /// Snapshot the records ascending by ordering field.
    ///
    /// Clones under the lock; the returned sequence does not track later
    /// mutations.
    pub fn enumerate(&self) -> Vec<Record> {
        self.inner.lock().enumerate().cloned().collect()
    }

    /// Snapshot the keys in enumeration order
    pub fn keys(&self) -> Vec<Key> {
        self.inner.lock().keys().cloned().collect()
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// True if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// Run a compound operation while holding the lock
    pub fn with<R>(&self, f: impl FnOnce(&mut ObjectStore) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
