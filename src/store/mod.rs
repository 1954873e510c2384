//! Object Store Module
//!
//! In-memory ordered collection of keyed records.
//!
//! ## Responsibilities
//! - Hold (key, record) entries, one record per composite key
//! - Enforce key uniqueness at insert time
//! - Exact and partial composite-key lookup
//! - Deterministic enumeration, ascending by a numeric ordering field
//!
//! ## Data Structure Choice
//! A single `Vec` of entries, fully re-sorted after every mutation:
//! - One sequence, so key and record can never drift out of step
//! - O(n log n) per mutation, O(n) lookup — the right trade at the small
//!   entry counts this store is built for; a sorted-insertion strategy is
//!   the known upgrade path for larger datasets

mod shared;
mod table;

pub use shared::SharedStore;
pub use table::ObjectStore;

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::record::Record;

/// A stored entry: a composite key and the record it addresses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub key: Key,
    pub record: Record,
}
