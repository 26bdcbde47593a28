//! The room allocator
//!
//! This module orchestrates the two selection strategies: a single-floor
//! window whenever one floor can seat the whole party, and the cross-floor
//! selector otherwise. Allocation is pure; callers own occupancy and decide
//! what to do with the returned rooms.

use crate::allocation::availability::FloorAvailability;
use crate::allocation::cross_floor::cross_floor_pick;
use crate::allocation::distance::travel_cost;
use crate::allocation::error::{AllocationError, AllocationResult};
use crate::allocation::window::best_window;
use crate::hotel::Room;
use tracing::{debug, instrument, warn};

/// Smallest bookable party
pub const MIN_PARTY_SIZE: usize = 1;

/// Largest bookable party
pub const MAX_PARTY_SIZE: usize = 5;

/// Allocates groups of rooms for arriving parties
///
/// Stateless and deterministic: every call works from the availability
/// snapshot it is given, never mutates anything, and always returns the same
/// rooms for the same input. Keeping a party on one floor takes absolute
/// priority over travel cost; a wide single-floor spread still beats the
/// tightest cross-floor cluster.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomAllocator;

impl RoomAllocator {
    /// Create a new allocator
    pub fn new() -> Self {
        Self
    }

    /// Select rooms for a party from the supplied availability
    ///
    /// Returns exactly `party_size` distinct rooms drawn from `available`,
    /// or [`AllocationError::InsufficientAvailability`] when the party size
    /// is outside 1-5 or the availability cannot seat the party.
    #[instrument(skip(self, available), fields(available = available.len()))]
    pub fn allocate(&self, available: &[Room], party_size: usize) -> AllocationResult<Vec<Room>> {
        if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&party_size) {
            warn!(
                "Party size {} is outside the bookable range {}-{}",
                party_size, MIN_PARTY_SIZE, MAX_PARTY_SIZE
            );
            return Err(AllocationError::InsufficientAvailability);
        }

        let availability = FloorAvailability::new(available);

        if let Some(rooms) = Self::same_floor_pick(&availability, party_size) {
            debug!("Placed party of {} on floor {}", party_size, rooms[0].floor());
            return Ok(rooms);
        }

        match cross_floor_pick(&availability, party_size) {
            Some(rooms) => {
                debug!(
                    "Placed party of {} across floors with travel cost {}",
                    party_size,
                    travel_cost(&rooms)
                );
                Ok(rooms)
            }
            None => {
                debug!(
                    "No placement for party of {} among {} available rooms",
                    party_size,
                    availability.total()
                );
                Err(AllocationError::InsufficientAvailability)
            }
        }
    }

    /// Tightest single-floor window across the whole building
    ///
    /// Floors are scanned in ascending order and a window replaces the
    /// incumbent only when its span is strictly smaller, so equal spans
    /// resolve to the lowest floor.
    fn same_floor_pick(availability: &FloorAvailability, party_size: usize) -> Option<Vec<Room>> {
        let mut best: Option<(&[Room], u8)> = None;

        for (_, rooms) in availability.iter() {
            if let Some(window) = best_window(rooms, party_size) {
                let span = window[party_size - 1].pos() - window[0].pos();
                match best {
                    Some((_, best_span)) if span >= best_span => {}
                    _ => best = Some((window, span)),
                }
            }
        }

        best.map(|(window, _)| window.to_vec())
    }
}
