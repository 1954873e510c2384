//! Records
//!
//! A record is an application-defined bag of named scalar properties. The
//! store treats records as opaque payloads except for two things: the
//! numeric ordering field that keeps enumeration deterministic, and the
//! key properties a provider projects into a [`Key`](crate::key::Key).

use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::value::Value;

/// One named property of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: Value,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A record: named scalar properties, last set wins per name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    properties: Vec<Property>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, replacing any existing property with the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property in place, replacing any existing property with the
    /// same name (case-insensitive)
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self
            .properties
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(&name))
        {
            Some(property) => property.value = value,
            None => self.properties.push(Property { name, value }),
        }
    }

    /// Look up a property's value by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| &p.value)
    }

    /// Number of properties
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// The properties in insertion order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// The record's position under the store's ordering.
    ///
    /// A property that is absent, non-numeric, or negative orders as 0.
    /// The fallback is silent; callers that care must validate the field
    /// before insert.
    pub fn ordering_value(&self, field: &str) -> u64 {
        self.get(field).and_then(Value::as_ordering).unwrap_or(0)
    }

    /// Project the named properties into a [`Key`], preserving the given
    /// field order. Returns `None` if any named property is missing.
    pub fn key_for<S: AsRef<str>>(&self, fields: &[S]) -> Option<Key> {
        let mut key = Key::new();
        for field in fields {
            let name = field.as_ref();
            key.set(name, self.get(name)?.clone());
        }
        Some(key)
    }
}
