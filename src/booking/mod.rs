//! Booking workflow and demo shell
//!
//! This module contains the front desk workflow around the allocation core,
//! plus the rendering, logging, and error plumbing the demo binary uses.
//!
//! # Overview
//!
//! - **FrontDesk**: Owns the layout and occupancy, and commits bookings
//! - **BookingRecord**: A confirmed booking with its travel time
//! - **render_grid**: Text rendering of the floor grid and availability
//! - **LoggingConfig**: Tracing subscriber setup for the binary
//! - **BookingError**: Error handling for booking operations
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::booking::*;
//! use hotel_room_allocator::hotel::HotelLayout;
//!
//! // An empty hotel books the leftmost rooms on the first floor
//! let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();
//! let record = desk.book(3).unwrap();
//! assert_eq!(record.travel_minutes, 2);
//!
//! // The grid marks the fresh booking
//! let grid = render_grid(desk.layout(), desk.occupied(), &record.rooms);
//! assert!(grid.contains("[101]"));
//! ```

pub mod desk;
pub mod error;
pub mod grid;
pub mod logging;

// Re-export all public types for convenience
pub use desk::*;
pub use error::*;
pub use grid::*;
pub use logging::*;
