//! Provider Module
//!
//! The CRUD surface that fronts the object stores: routes requests by
//! namespace and class, validates against the class schema, drives the
//! store, and maps failures onto wire status codes.
//!
//! ## Operations
//! - `create`  — derive the key from the record, validate, insert
//! - `get`     — validate the key, locate the record
//! - `set`     — replace the record behind an existing key
//! - `delete`  — remove the record behind an existing key
//! - `enumerate` / `enumerate_names` — ordered snapshots
//! - `query`   — enumerate through a caller-supplied filter
//! - `invoke`  — control methods (ping, enableModifications, reset)
//!
//! ## Status Codes
//! - 0:  OK
//! - 1:  FAILED
//! - 3:  INVALID_NAMESPACE
//! - 4:  INVALID_PARAMETER
//! - 5:  INVALID_CLASS
//! - 6:  NOT_FOUND
//! - 7:  NOT_SUPPORTED
//! - 11: ALREADY_EXISTS
//! - 16: METHOD_NOT_AVAILABLE

mod filter;
mod instance;
mod status;

pub use filter::{MatchAll, PropertyEquals, RecordFilter};
pub use instance::{ClassRegistration, InstanceProvider, SeedFn, QUERY_LANGUAGE};
pub use status::Status;
