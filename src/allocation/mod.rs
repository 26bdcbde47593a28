//! The room allocation engine
//!
//! This module selects the set of rooms a party should be given, minimizing
//! the walking the group will do between their doors.
//!
//! # Overview
//!
//! - **Distance model**: pairwise travel cost in minutes and the worst-case
//!   cost of a room set
//! - **Window search**: the tightest run of consecutive available rooms on
//!   one floor
//! - **Floor availability**: deterministic per-floor grouping of a snapshot
//! - **Cross-floor selector**: candidate sets anchored on center floors when
//!   no single floor can seat the party
//! - **RoomAllocator**: the public entry point tying the strategies together
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::allocation::RoomAllocator;
//! use hotel_room_allocator::hotel::HotelLayout;
//!
//! let layout = HotelLayout::new();
//! let allocator = RoomAllocator::new();
//!
//! // An empty hotel seats a party of three side by side
//! let rooms = allocator.allocate(layout.rooms(), 3).unwrap();
//! assert_eq!(rooms.len(), 3);
//! assert!(rooms.iter().all(|r| r.floor() == rooms[0].floor()));
//! ```

pub mod allocator;
pub mod availability;
pub mod cross_floor;
pub mod distance;
pub mod error;
pub mod window;

// Re-export all public types for convenience
pub use allocator::{RoomAllocator, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
pub use availability::FloorAvailability;
pub use cross_floor::{cross_floor_pick, MAX_CANDIDATE_CENTERS};
pub use distance::{distance, travel_cost};
pub use error::{AllocationError, AllocationResult};
pub use window::best_window;
