//! The fixed hotel building layout
//!
//! This module builds the immutable set of room descriptors for the building:
//! floors 1-9 hold ten rooms each, floor 10 holds seven, for 97 rooms total.
//! The stairs and lift sit at the left end of every corridor, before
//! position 0.

use crate::hotel::room::Room;
use crate::types::RoomId;
use serde::{Deserialize, Serialize};

/// Number of floors in the building
pub const FLOOR_COUNT: u8 = 10;

/// Rooms per floor on floors 1-9
pub const ROOMS_PER_FLOOR: u8 = 10;

/// Rooms on the top floor
pub const TOP_FLOOR_ROOMS: u8 = 7;

/// Total rooms in the building
pub const TOTAL_ROOMS: usize = 97;

/// Number of rooms on the given floor
pub fn floor_width(floor: u8) -> u8 {
    if floor == FLOOR_COUNT {
        TOP_FLOOR_ROOMS
    } else {
        ROOMS_PER_FLOOR
    }
}

/// The complete set of rooms in the building
///
/// Built once per session and never mutated; occupancy lives elsewhere.
/// Rooms are ordered by floor ascending, then by corridor position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelLayout {
    rooms: Vec<Room>,
}

impl HotelLayout {
    /// Build the fixed layout
    pub fn new() -> Self {
        let mut rooms = Vec::with_capacity(TOTAL_ROOMS);

        for floor in 1..=FLOOR_COUNT {
            for pos in 0..floor_width(floor) {
                rooms.push(Room::new(floor, pos));
            }
        }

        Self { rooms }
    }

    /// All rooms in layout order (floor ascending, then position)
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Total number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Look up a room by its identifier
    pub fn get_room(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == room_id)
    }

    /// Check if a room exists in the building
    pub fn contains_room(&self, room_id: RoomId) -> bool {
        self.rooms.iter().any(|r| r.id() == room_id)
    }

    /// All rooms on one floor, ordered by corridor position
    pub fn rooms_on_floor(&self, floor: u8) -> Vec<&Room> {
        self.rooms.iter().filter(|r| r.floor() == floor).collect()
    }

    /// Validate the layout's structural invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.rooms.len() != TOTAL_ROOMS {
            return Err(format!(
                "Layout must contain {} rooms, found {}",
                TOTAL_ROOMS,
                self.rooms.len()
            ));
        }

        for floor in 1..=FLOOR_COUNT {
            let expected = floor_width(floor) as usize;
            let actual = self.rooms_on_floor(floor).len();
            if actual != expected {
                return Err(format!("Floor {} must hold {} rooms, found {}", floor, expected, actual));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for room in &self.rooms {
            if !seen.insert((room.floor(), room.pos())) {
                return Err(format!(
                    "Duplicate room at floor {} position {}",
                    room.floor(),
                    room.pos()
                ));
            }
        }

        Ok(())
    }
}

impl Default for HotelLayout {
    fn default() -> Self {
        Self::new()
    }
}
