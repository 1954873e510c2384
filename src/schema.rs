//! Schema validation
//!
//! A [`Schema`] describes one class of records: the declared properties
//! (name, expected type, optional numeric bounds) and the subset of
//! property names that forms the composite key. Validation runs *before*
//! the store sees a record — the store itself assumes records were already
//! checked.

use serde::{Deserialize, Serialize};

use crate::error::{KeyrackError, Result};
use crate::key::Key;
use crate::record::Record;
use crate::value::ValueType;

// =============================================================================
// Property Specs
// =============================================================================

/// Inclusive numeric bounds for a declared property
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// One declared property of a class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    pub value_type: ValueType,
    pub bounds: Option<Bounds>,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            bounds: None,
        }
    }

    /// Require values to be at least `min` (inclusive)
    pub fn with_min(mut self, min: f64) -> Self {
        self.bounds.get_or_insert_with(Bounds::default).min = Some(min);
        self
    }

    /// Require values to be at most `max` (inclusive)
    pub fn with_max(mut self, max: f64) -> Self {
        self.bounds.get_or_insert_with(Bounds::default).max = Some(max);
        self
    }
}

// =============================================================================
// Schema
// =============================================================================

/// The declared shape of one class of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    class: String,
    properties: Vec<PropertySpec>,
    keys: Vec<String>,
}

impl Schema {
    /// Create a schema for the named class
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            properties: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// Declare a non-key property
    pub fn with_property(mut self, spec: PropertySpec) -> Self {
        self.properties.push(spec);
        self
    }

    /// Declare a key property: part of the property set and the key set
    pub fn with_key_property(mut self, spec: PropertySpec) -> Self {
        self.keys.push(spec.name.clone());
        self.properties.push(spec);
        self
    }

    /// The class name
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The key-field names, in declaration order
    pub fn key_fields(&self) -> &[String] {
        &self.keys
    }

    /// The declared properties
    pub fn properties(&self) -> &[PropertySpec] {
        &self.properties
    }

    fn spec_for(&self, name: &str) -> Option<&PropertySpec> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Check that a key carries the full declared key-field set.
    ///
    /// The key must have at least as many fields as the schema declares
    /// keys, and every declared key name must be present. Extra fields are
    /// tolerated.
    pub fn validate_key(&self, key: &Key) -> bool {
        if key.len() < self.keys.len() {
            tracing::debug!(
                class = %self.class,
                got = key.len(),
                want = self.keys.len(),
                "key has too few fields"
            );
            return false;
        }

        for name in &self.keys {
            if key.value_of(name).is_none() {
                tracing::debug!(class = %self.class, field = %name, "key field missing");
                return false;
            }
        }

        true
    }

    /// Check a record against the declared property set and project its
    /// key fields into a [`Key`].
    ///
    /// In strict mode the property count must match exactly and every
    /// declared property must be present. In both modes, a missing key
    /// property makes the projection impossible and yields `None`.
    pub fn validate_record(&self, record: &Record, strict: bool) -> Option<Key> {
        if record.property_count() != self.properties.len() {
            tracing::debug!(
                class = %self.class,
                got = record.property_count(),
                want = self.properties.len(),
                "property count mismatch"
            );
            if strict {
                return None;
            }
        }

        for spec in &self.properties {
            if record.get(&spec.name).is_none() {
                tracing::debug!(class = %self.class, property = %spec.name, "property missing");
                if strict {
                    return None;
                }
            }
        }

        // Key projection uses the declared casing, not the record's
        record.key_for(&self.keys)
    }

    /// Check every declared property present in the record for type and
    /// bounds conformance. Properties the schema does not declare pass
    /// unexamined.
    pub fn check_values(&self, record: &Record) -> Result<()> {
        for property in record.properties() {
            let Some(spec) = self.spec_for(&property.name) else {
                continue;
            };

            let actual = property.value.type_of();
            if actual != spec.value_type {
                return Err(KeyrackError::InvalidParameter(format!(
                    "property {} has type {}, expected {}",
                    property.name, actual, spec.value_type
                )));
            }

            if let (Some(bounds), Some(number)) = (&spec.bounds, property.value.as_f64()) {
                if bounds.min.is_some_and(|min| number < min)
                    || bounds.max.is_some_and(|max| number > max)
                {
                    return Err(KeyrackError::InvalidParameter(format!(
                        "property {} value {} is out of range",
                        property.name, property.value
                    )));
                }
            }
        }

        Ok(())
    }
}
