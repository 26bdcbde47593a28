//! Hotel Room Allocator
//!
//! A walking-distance-aware room allocation engine for a fixed 97-room hotel,
//! with a front-desk booking demo built around it.
//!
//! # Overview
//!
//! This library assigns groups of rooms to parties so the rooms sit as close
//! together as possible. One floor with enough free rooms always wins; when no
//! floor can host the whole party, a cross-floor search minimizes the longest
//! walk between any two rooms of the group, counting one minute per room along
//! a corridor and two minutes per floor via the stairs and lift next to the
//! first room of every floor.
//!
//! ## Key Features
//!
//! - **Fixed Layout**: Floors 1-9 with ten rooms each, floor 10 with seven
//! - **Same-Floor Preference**: Tightest window of adjacent free rooms first
//! - **Cross-Floor Fallback**: Candidate centers scored by total travel time
//! - **Deterministic Results**: Equal inputs always produce equal bookings
//! - **Front Desk Demo**: Random occupancy, sequential bookings, grid output
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_room_allocator::booking::FrontDesk;
//! use hotel_room_allocator::hotel::HotelLayout;
//!
//! let mut desk = FrontDesk::new(HotelLayout::new())?;
//!
//! // Book the closest group of four free rooms
//! let record = desk.book(4)?;
//! println!("Rooms {:?} in {} min", record.room_numbers(), record.travel_minutes);
//! # Ok::<(), hotel_room_allocator::booking::BookingError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core identifiers, enums, and configuration
//! - [`hotel`]: The fixed layout, rooms, and occupancy generation
//! - [`allocation`]: Distance model and the room selection algorithm
//! - [`booking`]: Front desk workflow, grid rendering, and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌───────────┐     ┌────────────┐
//! │   Types   │◄────┤   Hotel   │◄────┤ Allocation │
//! │           │     │           │     │            │
//! │ RoomId    │     │ Layout    │     │ Distance   │
//! │ BookingId │     │ Occupancy │     │ Selectors  │
//! └───────────┘     └───────────┘     └────────────┘
//!                                            ▲
//!                                     ┌────────────┐
//!                                     │  Booking   │
//!                                     │            │
//!                                     │ FrontDesk  │
//!                                     │ Grid/Logs  │
//!                                     └────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod allocation;
pub mod booking;
pub mod hotel;
pub mod types;

// Re-export the main entry points at the crate root

// Core types and identifiers
pub use types::{BookingId, DemoConfig, OutputFormat, RoomId};

// Hotel layout and occupancy
pub use hotel::{HotelLayout, OccupancyGenerator, Room};

// Allocation engine
pub use allocation::{distance, travel_cost, AllocationError, RoomAllocator};

// Booking workflow
pub use booking::{BookingError, BookingRecord, FrontDesk, LoggingConfig};
