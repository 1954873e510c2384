//! Composite keys
//!
//! A key is an ordered set of named scalar values identifying exactly one
//! stored record. Two matching modes exist:
//!
//! - **Exact**: the field sets are equal as unordered sets — every field of
//!   one appears in the other with an equal value, and the counts agree.
//! - **Partial**: every field of the *query* appears in the stored key with
//!   an equal value; fields the query does not mention are ignored.
//!
//! Field names compare case-insensitively in both modes; values compare by
//! typed equality.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One named field of a composite key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyField {
    pub name: String,
    pub value: Value,
}

/// A composite key: an ordered set of named scalar values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Key {
    fields: Vec<KeyField>,
}

impl Key {
    /// Create an empty key
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any existing field with the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field in place, replacing any existing field with the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self
            .fields
            .iter_mut()
            .find(|f| f.name.eq_ignore_ascii_case(&name))
        {
            Some(field) => field.value = value,
            None => self.fields.push(KeyField { name, value }),
        }
    }

    /// Look up a field's value by name (case-insensitive)
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .map(|f| &f.value)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the key has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The fields in insertion order
    pub fn fields(&self) -> &[KeyField] {
        &self.fields
    }

    /// Exact-set equality: same field count, and every field of `self` is
    /// present in `other` with an equal value. Field order is irrelevant.
    pub fn exact_match(&self, other: &Key) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|f| other.value_of(&f.name) == Some(&f.value))
    }

    /// Partial match: every field of `query` is present in `self` with an
    /// equal value. Fields of `self` absent from the query are ignored.
    /// An empty query matches vacuously.
    pub fn partial_match(&self, query: &Key) -> bool {
        query
            .fields
            .iter()
            .all(|f| self.value_of(&f.name) == Some(&f.value))
    }
}

impl fmt::Display for Key {
    /// Render as `Name="text",Id=2` — text-like values quoted, the rest bare
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match &field.value {
                Value::String(_) | Value::Char(_) | Value::Timestamp(_) => {
                    write!(f, "{}=\"{}\"", field.name, field.value)?
                }
                other => write!(f, "{}={}", field.name, other)?,
            }
        }
        Ok(())
    }
}
