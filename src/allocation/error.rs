//! Error types for the allocation engine

use thiserror::Error;

/// Result type alias for allocation operations
pub type AllocationResult<T> = Result<T, AllocationError>;

/// Errors raised by the room allocator
///
/// Callers get a single failure kind whether the party size is outside the
/// bookable range or the hotel simply cannot seat the party; internal search
/// misses (a floor without a window, an exhausted center floor) recover by
/// moving on to the next candidate and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// The request cannot be satisfied from the supplied availability
    #[error("not enough available rooms to satisfy the request")]
    InsufficientAvailability,
}
