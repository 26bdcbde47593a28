//! Identifier types for the hotel room allocator
//!
//! This module contains the room-number identifier used throughout the
//! allocation engine and the UUID-based confirmation identifier stamped on
//! finalized bookings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Identifier for a physical room, equal to its display number
///
/// Floors 1-9 number their rooms `floor*100 + position`, floor 10 numbers
/// them `1000 + position` (position counted from 1 at the stairs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u16);

impl RoomId {
    /// Create a room ID from a display number
    pub fn new(number: u16) -> Self {
        Self(number)
    }

    /// Get the display number
    pub fn number(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RoomId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Room ids travel as decimal strings, matching the number shown on
        // the door plate.
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(u16),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(number) => Ok(RoomId(number)),
            Repr::Text(text) => {
                let number = text.parse::<u16>().map_err(serde::de::Error::custom)?;
                Ok(RoomId(number))
            }
        }
    }
}

/// Unique identifier for a finalized booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub Uuid);

impl BookingId {
    /// Create a new random booking ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BKG_{}", self.0.simple())
    }
}

impl Serialize for BookingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("BKG_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("BKG_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(BookingId(uuid))
        } else {
            // Fallback: accept a raw UUID without the prefix
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(BookingId(uuid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_display() {
        assert_eq!(RoomId::new(101).to_string(), "101");
        assert_eq!(RoomId::new(1007).to_string(), "1007");
    }

    #[test]
    fn test_room_id_accessors() {
        let id = RoomId::new(304);
        assert_eq!(id.number(), 304);
        assert_eq!(id.0, 304);
    }

    #[test]
    fn test_room_id_serialization() {
        let id = RoomId::new(512);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"512\"");

        let deserialized: RoomId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_room_id_deserialization_from_number() {
        // Bare integers are accepted alongside the string form
        let id: RoomId = serde_json::from_str("512").unwrap();
        assert_eq!(id, RoomId::new(512));
    }

    #[test]
    fn test_room_id_deserialization_rejects_garbage() {
        let result: Result<RoomId, _> = serde_json::from_str("\"lobby\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_room_id_ordering() {
        let mut ids = vec![RoomId::new(1001), RoomId::new(101), RoomId::new(910)];
        ids.sort();
        assert_eq!(ids, vec![RoomId::new(101), RoomId::new(910), RoomId::new(1001)]);
    }

    #[test]
    fn test_room_id_hash_and_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(RoomId::new(101));
        set.insert(RoomId::new(102));
        set.insert(RoomId::new(101));

        assert_eq!(set.len(), 2);
        assert!(set.contains(&RoomId::new(101)));
    }

    #[test]
    fn test_booking_id_creation() {
        let id1 = BookingId::new();
        let id2 = BookingId::new();

        // IDs should be unique
        assert_ne!(id1, id2);

        // Default should create a new ID
        let id3 = BookingId::default();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_booking_id_display() {
        let id = BookingId::new();
        let display_str = format!("{}", id);

        // Should start with BKG_ prefix, followed by 32 hex chars
        assert!(display_str.starts_with("BKG_"));
        assert_eq!(display_str.len(), 36);
    }

    #[test]
    fn test_booking_id_serialization() {
        let id = BookingId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.contains("BKG_"));

        let deserialized: BookingId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_booking_id_deserialization_without_prefix() {
        let raw_uuid = Uuid::new_v4();
        let json = format!("\"{}\"", raw_uuid);

        let id: BookingId = serde_json::from_str(&json).unwrap();
        assert_eq!(id.0, raw_uuid);
    }
}
