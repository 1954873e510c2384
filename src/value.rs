//! Scalar values
//!
//! The typed value model for record properties and key fields.
//!
//! ## Responsibilities
//! - Carry every scalar shape a record property can hold
//! - Canonical string rendering (used for logs and display-form keys)
//! - Typed equality: two values compare equal only when the variant and
//!   payload both agree, never through a rendered-string detour
//! - Numeric extraction for the store's ordering field

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KeyrackError, Result};

// =============================================================================
// Timestamp
// =============================================================================

/// A fixed-format timestamp literal.
///
/// Format: `yyyymmddhhmmss.uuuuuu` followed by a UTC-offset marker
/// (`+`, `-`, or `:`) and three digits — 25 characters total, e.g.
/// `20010515104354.000000:000`. The literal is validated on construction
/// and kept as text; no calendar arithmetic is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(String);

impl Timestamp {
    /// Parse and validate a timestamp literal
    pub fn parse(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();

        let well_formed = bytes.len() == 25
            && bytes[0..14].iter().all(|b| b.is_ascii_digit())
            && bytes[14] == b'.'
            && bytes[15..21].iter().all(|b| b.is_ascii_digit())
            && matches!(bytes[21], b'+' | b'-' | b':')
            && bytes[22..25].iter().all(|b| b.is_ascii_digit());

        if !well_formed {
            return Err(KeyrackError::InvalidParameter(format!(
                "malformed timestamp literal: {:?}",
                text
            )));
        }

        Ok(Self(text.to_string()))
    }

    /// The underlying literal text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Value Types
// =============================================================================

/// Type tag for a [`Value`], used by schema validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Boolean,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Sint8,
    Sint16,
    Sint32,
    Sint64,
    Real32,
    Real64,
    Char,
    String,
    Timestamp,
    Array,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Boolean => "boolean",
            ValueType::Uint8 => "uint8",
            ValueType::Uint16 => "uint16",
            ValueType::Uint32 => "uint32",
            ValueType::Uint64 => "uint64",
            ValueType::Sint8 => "sint8",
            ValueType::Sint16 => "sint16",
            ValueType::Sint32 => "sint32",
            ValueType::Sint64 => "sint64",
            ValueType::Real32 => "real32",
            ValueType::Real64 => "real64",
            ValueType::Char => "char",
            ValueType::String => "string",
            ValueType::Timestamp => "timestamp",
            ValueType::Array => "array",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Value
// =============================================================================

/// A scalar value held by a record property or key field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Boolean(bool),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Sint8(i8),
    Sint16(i16),
    Sint32(i32),
    Sint64(i64),
    Real32(f32),
    Real64(f64),
    Char(char),
    String(String),
    Timestamp(Timestamp),
    /// Homogeneity is the caller's concern; the store never indexes arrays
    Array(Vec<Value>),
}

impl Value {
    /// The type tag for this value
    pub fn type_of(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Uint8(_) => ValueType::Uint8,
            Value::Uint16(_) => ValueType::Uint16,
            Value::Uint32(_) => ValueType::Uint32,
            Value::Uint64(_) => ValueType::Uint64,
            Value::Sint8(_) => ValueType::Sint8,
            Value::Sint16(_) => ValueType::Sint16,
            Value::Sint32(_) => ValueType::Sint32,
            Value::Sint64(_) => ValueType::Sint64,
            Value::Real32(_) => ValueType::Real32,
            Value::Real64(_) => ValueType::Real64,
            Value::Char(_) => ValueType::Char,
            Value::String(_) => ValueType::String,
            Value::Timestamp(_) => ValueType::Timestamp,
            Value::Array(_) => ValueType::Array,
        }
    }

    /// Extract this value as an ordering number, if it has one.
    ///
    /// Unsigned widths widen; signed widths must be non-negative; decimal
    /// strings parse. Everything else yields `None`, which the store maps
    /// to ordering position 0.
    pub fn as_ordering(&self) -> Option<u64> {
        match self {
            Value::Uint8(v) => Some(u64::from(*v)),
            Value::Uint16(v) => Some(u64::from(*v)),
            Value::Uint32(v) => Some(u64::from(*v)),
            Value::Uint64(v) => Some(*v),
            Value::Sint8(v) => u64::try_from(*v).ok(),
            Value::Sint16(v) => u64::try_from(*v).ok(),
            Value::Sint32(v) => u64::try_from(*v).ok(),
            Value::Sint64(v) => u64::try_from(*v).ok(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Widen any numeric value to f64 for range checks
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Uint8(v) => Some(f64::from(*v)),
            Value::Uint16(v) => Some(f64::from(*v)),
            Value::Uint32(v) => Some(f64::from(*v)),
            Value::Uint64(v) => Some(*v as f64),
            Value::Sint8(v) => Some(f64::from(*v)),
            Value::Sint16(v) => Some(f64::from(*v)),
            Value::Sint32(v) => Some(f64::from(*v)),
            Value::Sint64(v) => Some(*v as f64),
            Value::Real32(v) => Some(f64::from(*v)),
            Value::Real64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Canonical string rendering: `true`/`false` for booleans, plain
    /// decimal for numbers, the literal text for strings and timestamps,
    /// `{a,b,c}` for arrays.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Uint8(v) => write!(f, "{}", v),
            Value::Uint16(v) => write!(f, "{}", v),
            Value::Uint32(v) => write!(f, "{}", v),
            Value::Uint64(v) => write!(f, "{}", v),
            Value::Sint8(v) => write!(f, "{}", v),
            Value::Sint16(v) => write!(f, "{}", v),
            Value::Sint32(v) => write!(f, "{}", v),
            Value::Sint64(v) => write!(f, "{}", v),
            Value::Real32(v) => write!(f, "{}", v),
            Value::Real64(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
            Value::Timestamp(v) => write!(f, "{}", v),
            Value::Array(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("}")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Boolean,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    i8 => Sint8,
    i16 => Sint16,
    i32 => Sint32,
    i64 => Sint64,
    f32 => Real32,
    f64 => Real64,
    char => Char,
    String => String,
    Timestamp => Timestamp,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}
