//! Core types and identifiers for the hotel room allocator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the allocation engine and the booking demo.
//!
//! # Overview
//!
//! The types module provides the foundational data types:
//!
//! - **Identifiers**: room numbers and booking confirmation codes
//! - **Enums**: the output format selector for the demo binary
//! - **Configuration**: demo configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::types::*;
//!
//! // Room ids are plain display numbers
//! let room_id = RoomId::new(101);
//!
//! // Booking confirmations are random UUIDs
//! let booking_id = BookingId::new();
//!
//! // Configure the demo
//! let config = DemoConfig {
//!     bookings: vec![3, 2],
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
