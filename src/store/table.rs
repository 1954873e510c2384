//! ObjectStore implementation
//!
//! Vec-backed keyed store, re-sorted after every mutation.

use crate::error::{KeyrackError, Result};
use crate::key::Key;
use crate::record::Record;

use super::Entry;

/// In-memory store of keyed records, ordered by a numeric record field
#[derive(Debug, Clone)]
pub struct ObjectStore {
    /// Name of the record property that orders enumeration
    ordering_field: String,

    /// Entries, kept ascending by ordering value between operations
    entries: Vec<Entry>,
}

impl ObjectStore {
    /// Create an empty store ordering by the named record property
    pub fn new(ordering_field: impl Into<String>) -> Self {
        Self {
            ordering_field: ordering_field.into(),
            entries: Vec::new(),
        }
    }

    /// The ordering-field name
    pub fn ordering_field(&self) -> &str {
        &self.ordering_field
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Insert a new entry.
    ///
    /// Fails with [`KeyrackError::AlreadyExists`] if an entry with an
    /// exact-matching key is present; the store is left unchanged.
    pub fn insert(&mut self, key: Key, record: Record) -> Result<()> {
        if self.exact_find(&key).is_some() {
            return Err(KeyrackError::AlreadyExists(key.to_string()));
        }

        self.entries.push(Entry { key, record });
        self.resort();

        Ok(())
    }

    /// Find the entry whose key exactly matches `key`.
    ///
    /// Exact matching compares the field sets order-independently and
    /// requires the full set on both sides; a query missing any stored
    /// key field does not match.
    pub fn exact_find(&self, key: &Key) -> Option<usize> {
        self.entries.iter().position(|e| e.key.exact_match(key))
    }

    /// Find the first entry, in store order, whose key satisfies every
    /// field of `query`.
    ///
    /// Fields present in a stored key but absent from the query are
    /// ignored, so callers may search with a subset of the key fields.
    /// Caller hazard: an empty query matches vacuously, returning the
    /// first stored entry; and when several entries satisfy the query,
    /// which one wins depends on the current sort order.
    pub fn fuzzy_find(&self, query: &Key) -> Option<usize> {
        tracing::trace!(%query, entries = self.entries.len(), "fuzzy lookup");
        self.entries.iter().position(|e| e.key.partial_match(query))
    }

    /// The entry at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Remove the entry at `index` and re-sort
    pub fn remove_entry(&mut self, index: usize) -> Option<Entry> {
        if index >= self.entries.len() {
            return None;
        }

        let entry = self.entries.remove(index);
        self.resort();

        Some(entry)
    }

    /// Delete the entry whose key exactly matches `key`.
    ///
    /// Fails with [`KeyrackError::NotFound`] if no entry matches; the
    /// store is left unchanged.
    pub fn delete(&mut self, key: &Key) -> Result<Entry> {
        let index = self
            .exact_find(key)
            .ok_or_else(|| KeyrackError::NotFound(key.to_string()))?;

        let entry = self.entries.remove(index);
        self.resort();

        Ok(entry)
    }

    /// Replace the record stored under `key`, returning the old record.
    ///
    /// Modeled as delete-then-insert: the old entry is removed and a new
    /// entry with the same key is added, then the store re-sorts. Fails
    /// with [`KeyrackError::NotFound`] if no entry exactly matches.
    pub fn replace(&mut self, key: &Key, record: Record) -> Result<Record> {
        let index = self
            .exact_find(key)
            .ok_or_else(|| KeyrackError::NotFound(key.to_string()))?;

        let old = self.entries.remove(index);
        self.entries.push(Entry {
            key: key.clone(),
            record,
        });
        self.resort();

        Ok(old.record)
    }

    /// Enumerate records ascending by the ordering field.
    ///
    /// Reflects the current store state; call again after mutations for a
    /// fresh pass.
    pub fn enumerate(&self) -> impl Iterator<Item = &Record> + '_ {
        self.entries.iter().map(|e| &e.record)
    }

    /// Enumerate keys in the same order as [`enumerate`](Self::enumerate)
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.entries.iter().map(|e| &e.key)
    }

    /// The entries in current sort order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Re-sort ascending by ordering value. Entries whose ordering field
    /// is absent or non-numeric order as 0; ties fall wherever the
    /// unstable sort puts them.
    fn resort(&mut self) {
        let Self {
            ordering_field,
            entries,
        } = self;
        entries.sort_unstable_by_key(|e| e.record.ordering_value(ordering_field));
    }
}
