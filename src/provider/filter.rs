//! Query filter seam
//!
//! Query parsing and evaluation live outside this crate. The provider
//! only pipes its enumeration through a caller-supplied predicate, so a
//! query engine plugs in by implementing [`RecordFilter`] over its
//! compiled WHERE clause.

use crate::record::Record;
use crate::value::Value;

/// A predicate over records, applied during `query`
pub trait RecordFilter {
    /// True if the record belongs in the result set
    fn matches(&self, record: &Record) -> bool;
}

/// The empty WHERE clause: admits every record
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl RecordFilter for MatchAll {
    fn matches(&self, _record: &Record) -> bool {
        true
    }
}

/// A single name = value comparison
#[derive(Debug, Clone)]
pub struct PropertyEquals {
    name: String,
    value: Value,
}

impl PropertyEquals {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl RecordFilter for PropertyEquals {
    fn matches(&self, record: &Record) -> bool {
        record.get(&self.name) == Some(&self.value)
    }
}
