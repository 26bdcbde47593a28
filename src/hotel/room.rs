//! Room descriptors for the hotel building
//!
//! This module contains the Room struct used throughout the allocation engine.
//! Rooms are immutable values: the display number is derived from the floor
//! and position at construction time and can never drift from them.

use crate::hotel::layout::{floor_width, FLOOR_COUNT};
use crate::types::RoomId;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single room at a fixed position within the building
///
/// `pos` counts from 0 at the end of the corridor nearest the stairs and
/// lift. Fields are private; the display number is computed by the
/// constructor, so a room can never carry a number that disagrees with its
/// `(floor, pos)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    id: RoomId,
    floor: u8,
    pos: u8,
}

impl Room {
    /// Create a room at the given floor and corridor position
    ///
    /// Floors 1-9 number their rooms `floor*100 + (pos+1)`; floor 10 uses
    /// `1000 + (pos+1)`.
    pub fn new(floor: u8, pos: u8) -> Self {
        let number = if floor < 10 {
            u16::from(floor) * 100 + u16::from(pos) + 1
        } else {
            1000 + u16::from(pos) + 1
        };

        Self { id: RoomId::new(number), floor, pos }
    }

    /// The room's identifier (its display number)
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The room's display number
    pub fn number(&self) -> u16 {
        self.id.number()
    }

    /// The floor this room is on (1-10)
    pub fn floor(&self) -> u8 {
        self.floor
    }

    /// Zero-based corridor position, counted from the stairs and lift
    pub fn pos(&self) -> u8 {
        self.pos
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<'de> Deserialize<'de> for Room {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            floor: u8,
            pos: u8,
        }

        // Rooms are reconstructed from their coordinates; a hand-edited id
        // field is ignored rather than trusted.
        let repr = Repr::deserialize(deserializer)?;

        if repr.floor < 1 || repr.floor > FLOOR_COUNT {
            return Err(serde::de::Error::custom(format!(
                "floor {} is outside the building (1-{})",
                repr.floor, FLOOR_COUNT
            )));
        }
        if repr.pos >= floor_width(repr.floor) {
            return Err(serde::de::Error::custom(format!(
                "position {} does not exist on floor {}",
                repr.pos, repr.floor
            )));
        }

        Ok(Room::new(repr.floor, repr.pos))
    }
}
