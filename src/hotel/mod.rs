//! The hotel building and its occupancy state
//!
//! This module models the physical side of the system: the fixed 97-room
//! building layout, the room descriptors, and the random starting occupancy
//! used by the booking demo.
//!
//! # Overview
//!
//! - **Room**: an immutable room descriptor with a derived display number
//! - **HotelLayout**: the fixed building shape (floors 1-9 with ten rooms,
//!   floor 10 with seven)
//! - **OccupancyGenerator**: seedable per-room Bernoulli occupancy draws
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::hotel::*;
//!
//! let layout = HotelLayout::new();
//! assert_eq!(layout.room_count(), 97);
//!
//! // Seeded draws are reproducible
//! let mut generator = OccupancyGenerator::with_seed(42);
//! let occupied = generator.draw(&layout, 0.35);
//! let free = available_rooms(&layout, &occupied);
//! assert_eq!(free.len() + occupied.len(), 97);
//! ```

pub mod layout;
pub mod occupancy;
pub mod room;

// Re-export all public types for convenience
pub use layout::{floor_width, HotelLayout, FLOOR_COUNT, ROOMS_PER_FLOOR, TOP_FLOOR_ROOMS, TOTAL_ROOMS};
pub use occupancy::{available_rooms, OccupancyGenerator};
pub use room::Room;
