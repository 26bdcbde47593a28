//! Availability snapshots grouped by floor
//!
//! Every allocation call receives a flat list of bookable rooms. This module
//! turns that list into the deterministic per-floor view the selectors work
//! from: floors in ascending order, each floor's rooms sorted by corridor
//! position.

use crate::hotel::Room;
use std::collections::BTreeMap;

/// An availability snapshot grouped by floor
///
/// Only floors holding at least one available room appear. Iteration order
/// is pinned to ascending floor numbers, so equal-quality candidates always
/// resolve the same way regardless of input order.
#[derive(Debug, Clone)]
pub struct FloorAvailability {
    by_floor: BTreeMap<u8, Vec<Room>>,
}

impl FloorAvailability {
    /// Group the supplied rooms by floor
    pub fn new(available: &[Room]) -> Self {
        let mut by_floor: BTreeMap<u8, Vec<Room>> = BTreeMap::new();

        for room in available {
            by_floor.entry(room.floor()).or_default().push(*room);
        }
        for rooms in by_floor.values_mut() {
            rooms.sort_by_key(|r| r.pos());
        }

        Self { by_floor }
    }

    /// Total number of available rooms
    pub fn total(&self) -> usize {
        self.by_floor.values().map(Vec::len).sum()
    }

    /// Available rooms on one floor, sorted by position
    ///
    /// Empty for floors with no availability.
    pub fn on_floor(&self, floor: u8) -> &[Room] {
        self.by_floor.get(&floor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Floors holding at least one available room, ascending
    pub fn floors(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_floor.keys().copied()
    }

    /// Iterate floors with their rooms, ascending by floor number
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[Room])> {
        self.by_floor.iter().map(|(floor, rooms)| (*floor, rooms.as_slice()))
    }

    /// Candidate center floors for the cross-floor selector
    ///
    /// Floors ranked by available-room count descending, equal counts
    /// resolving to the lower floor number, truncated to `limit`.
    pub fn candidate_centers(&self, limit: usize) -> Vec<u8> {
        let mut floors: Vec<(u8, usize)> =
            self.by_floor.iter().map(|(floor, rooms)| (*floor, rooms.len())).collect();

        floors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        floors.truncate(limit);
        floors.into_iter().map(|(floor, _)| floor).collect()
    }
}
