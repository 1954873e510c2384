//! # Keyrack
//!
//! An in-memory keyed object store with:
//! - Composite keys: order-independent named field sets, one per record
//! - Exact and best-effort (partial) key matching
//! - Deterministic enumeration, ascending by a numeric ordering field
//! - A CRUD provider surface mapping failures onto wire status codes
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  InstanceProvider                            │
//! │        (namespace/class routing, write gate,                 │
//! │         control methods, status mapping)                     │
//! └─────────┬──────────────────────────┬────────────────────────┘
//!           │                          │
//!           ▼                          ▼
//!    ┌─────────────┐           ┌───────────────┐
//!    │   Schema    │           │  RecordFilter │
//!    │ (key/value  │           │  (query seam) │
//!    │ validation) │           └───────────────┘
//!    └──────┬──────┘
//!           │ validated records
//!           ▼
//!    ┌─────────────────────────────┐
//!    │        ObjectStore          │
//!    │  (sorted Vec of entries,    │
//!    │   exact + partial lookup)   │
//!    └──────────────┬──────────────┘
//!                   │
//!                   ▼
//!            ┌─────────────┐
//!            │ Key / Record│
//!            │   (Value)   │
//!            └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod value;
pub mod key;
pub mod record;
pub mod schema;
pub mod store;
pub mod provider;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KeyrackError, Result};
pub use config::Config;
pub use value::{Timestamp, Value, ValueType};
pub use key::{Key, KeyField};
pub use record::{Property, Record};
pub use schema::{Bounds, PropertySpec, Schema};
pub use store::{Entry, ObjectStore, SharedStore};
pub use provider::{
    ClassRegistration, InstanceProvider, MatchAll, PropertyEquals, RecordFilter, Status,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Keyrack
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
