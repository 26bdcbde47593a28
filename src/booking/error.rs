//! Error types for the booking shell
//!
//! The allocation core has exactly one failure kind; everything else that can
//! go wrong here comes from the surrounding tooling (serialization, IO,
//! configuration). This module wraps them all behind a single error enum so
//! the front desk and the demo binary can use one result alias.

use crate::allocation::AllocationError;
use thiserror::Error;

/// Result type alias for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

/// Errors raised by the front desk and its surrounding tooling
#[derive(Error, Debug)]
pub enum BookingError {
    /// The allocator could not satisfy the request
    #[error("Booking failed: {0}")]
    Allocation(#[from] AllocationError),

    /// Configuration was missing or inconsistent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing or deserializing JSON failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BookingError {
    /// Create a configuration error with a custom message
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl From<String> for BookingError {
    fn from(msg: String) -> Self {
        Self::Configuration(msg)
    }
}

impl From<&str> for BookingError {
    fn from(msg: &str) -> Self {
        Self::Configuration(msg.to_string())
    }
}
