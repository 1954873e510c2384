//! Error types for Keyrack
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using KeyrackError
pub type Result<T> = std::result::Result<T, KeyrackError>;

/// Unified error type for Keyrack operations
#[derive(Debug, Error)]
pub enum KeyrackError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("an entry with key {0} already exists")]
    AlreadyExists(String),

    #[error("no entry matches key {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Routing Errors
    // -------------------------------------------------------------------------
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("invalid class: {0}")]
    InvalidClass(String),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    // -------------------------------------------------------------------------
    // Capability Errors
    // -------------------------------------------------------------------------
    #[error("not supported: {0}")]
    NotSupported(String),

    #[error("method not available: {0}")]
    MethodNotAvailable(String),
}
