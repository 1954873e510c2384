//! Status code definitions
//!
//! Wire-level status codes a calling protocol layer reports back to its
//! clients. Every [`KeyrackError`] maps onto exactly one code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{KeyrackError, Result};

/// Operation status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    Failed = 1,
    InvalidNamespace = 3,
    InvalidParameter = 4,
    InvalidClass = 5,
    NotFound = 6,
    NotSupported = 7,
    AlreadyExists = 11,
    MethodNotAvailable = 16,
}

impl Status {
    /// The numeric wire code
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The status an operation result maps to
    pub fn of<T>(result: &Result<T>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => Status::from(e),
        }
    }
}

impl From<&KeyrackError> for Status {
    fn from(error: &KeyrackError) -> Self {
        match error {
            KeyrackError::AlreadyExists(_) => Status::AlreadyExists,
            KeyrackError::NotFound(_) => Status::NotFound,
            KeyrackError::InvalidNamespace(_) => Status::InvalidNamespace,
            KeyrackError::InvalidClass(_) => Status::InvalidClass,
            KeyrackError::InvalidParameter(_) => Status::InvalidParameter,
            KeyrackError::NotSupported(_) => Status::NotSupported,
            KeyrackError::MethodNotAvailable(_) => Status::MethodNotAvailable,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "OK",
            Status::Failed => "FAILED",
            Status::InvalidNamespace => "INVALID_NAMESPACE",
            Status::InvalidParameter => "INVALID_PARAMETER",
            Status::InvalidClass => "INVALID_CLASS",
            Status::NotFound => "NOT_FOUND",
            Status::NotSupported => "NOT_SUPPORTED",
            Status::AlreadyExists => "ALREADY_EXISTS",
            Status::MethodNotAvailable => "METHOD_NOT_AVAILABLE",
        };
        f.write_str(name)
    }
}
