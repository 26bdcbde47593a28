//! Front desk booking workflow
//!
//! The front desk owns the hotel layout and the set of occupied rooms, takes
//! an availability snapshot for each request, runs the allocator over it, and
//! commits the selected rooms as a confirmed booking.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::allocation::{travel_cost, RoomAllocator};
use crate::booking::error::BookingResult;
use crate::hotel::{available_rooms, HotelLayout, OccupancyGenerator, Room, FLOOR_COUNT};
use crate::types::{BookingId, RoomId};

/// A confirmed booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    /// Unique identifier of the booking
    pub id: BookingId,
    /// When the booking was confirmed
    pub booked_at: DateTime<Utc>,
    /// The rooms assigned to the party, in selection order
    pub rooms: Vec<Room>,
    /// Walking time in minutes between the two farthest rooms of the booking
    pub travel_minutes: u32,
}

impl BookingRecord {
    /// Display numbers of the booked rooms
    pub fn room_numbers(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|room| room.id()).collect()
    }

    /// Serialize the record as a single JSON line
    pub fn to_json(&self) -> BookingResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The front desk: a hotel layout plus the set of currently occupied rooms
#[derive(Debug, Clone)]
pub struct FrontDesk {
    layout: HotelLayout,
    occupied: HashSet<RoomId>,
    allocator: RoomAllocator,
}

impl FrontDesk {
    /// Create a front desk over a validated layout
    pub fn new(layout: HotelLayout) -> BookingResult<Self> {
        layout
            .validate()
            .map_err(|e| format!("Hotel layout failed validation: {}", e))?;

        Ok(Self {
            layout,
            occupied: HashSet::new(),
            allocator: RoomAllocator::new(),
        })
    }

    /// The hotel layout served by this desk
    pub fn layout(&self) -> &HotelLayout {
        &self.layout
    }

    /// Ids of the rooms currently occupied
    pub fn occupied(&self) -> &HashSet<RoomId> {
        &self.occupied
    }

    /// Rooms currently free, in layout order
    pub fn available_rooms(&self) -> Vec<Room> {
        available_rooms(&self.layout, &self.occupied)
    }

    /// Number of free rooms on each floor, floor 1 first
    pub fn availability_by_floor(&self) -> Vec<(u8, usize)> {
        (1..=FLOOR_COUNT)
            .map(|floor| {
                let free = self
                    .layout
                    .rooms_on_floor(floor)
                    .iter()
                    .filter(|room| !self.occupied.contains(&room.id()))
                    .count();
                (floor, free)
            })
            .collect()
    }

    /// Book rooms for a party of `party_size`.
    ///
    /// Takes a fresh availability snapshot, runs the allocator over it, and
    /// on success marks the selected rooms occupied. A failed allocation
    /// leaves the occupied set untouched.
    #[instrument(skip(self), fields(occupied = self.occupied.len()))]
    pub fn book(&mut self, party_size: usize) -> BookingResult<BookingRecord> {
        let available = self.available_rooms();
        debug!(
            "Booking request for {} room(s) with {} available",
            party_size,
            available.len()
        );

        let rooms = self.allocator.allocate(&available, party_size)?;
        for room in &rooms {
            self.occupied.insert(room.id());
        }

        let record = BookingRecord {
            id: BookingId::new(),
            booked_at: Utc::now(),
            travel_minutes: travel_cost(&rooms),
            rooms,
        };

        info!(
            "Booked {} room(s) under {} with travel time {} min",
            record.rooms.len(),
            record.id,
            record.travel_minutes
        );
        Ok(record)
    }

    /// Replace the occupied set with a fresh random draw
    #[instrument(skip(self, generator))]
    pub fn randomize_occupancy(&mut self, generator: &mut OccupancyGenerator, probability: f64) {
        self.occupied = generator.draw(&self.layout, probability);
        info!(
            "Randomized occupancy: {} of {} rooms occupied",
            self.occupied.len(),
            self.layout.room_count()
        );
    }

    /// Replace the occupied set wholesale.
    ///
    /// Ids that do not name a layout room never match availability, so stray
    /// entries have no effect.
    pub fn set_occupancy(&mut self, occupied: HashSet<RoomId>) {
        debug!("Occupancy set to {} room(s)", occupied.len());
        self.occupied = occupied;
    }

    /// Clear all occupancy, returning the hotel to fully vacant
    pub fn reset(&mut self) {
        self.occupied.clear();
        info!(
            "Occupancy reset, all {} rooms available",
            self.layout.room_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::error::BookingError;

    #[test]
    fn test_new_front_desk_is_fully_available() {
        let desk = FrontDesk::new(HotelLayout::new()).unwrap();
        assert!(desk.occupied().is_empty());
        assert_eq!(desk.available_rooms().len(), 97);
    }

    #[test]
    fn test_book_assigns_adjacent_rooms() {
        let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();
        let record = desk.book(3).unwrap();

        let numbers: Vec<u16> = record.room_numbers().iter().map(|id| id.number()).collect();
        assert_eq!(numbers, vec![101, 102, 103]);
        assert_eq!(record.travel_minutes, 2);
        assert_eq!(desk.available_rooms().len(), 94);
    }

    #[test]
    fn test_book_marks_rooms_occupied() {
        let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();
        let first = desk.book(2).unwrap();
        let second = desk.book(2).unwrap();

        for id in first.room_numbers() {
            assert!(desk.occupied().contains(&id));
            assert!(!second.room_numbers().contains(&id));
        }
    }

    #[test]
    fn test_book_insufficient_availability() {
        let layout = HotelLayout::new();
        let occupied: HashSet<RoomId> = layout
            .rooms()
            .iter()
            .map(|room| room.id())
            .filter(|id| id.number() != 101 && id.number() != 110)
            .collect();

        let mut desk = FrontDesk::new(layout).unwrap();
        desk.set_occupancy(occupied.clone());

        match desk.book(3) {
            Err(BookingError::Allocation(_)) => {}
            other => panic!("Expected an allocation failure, got {:?}", other),
        }
        // The failed request did not touch occupancy
        assert_eq!(desk.occupied().len(), occupied.len());
    }

    #[test]
    fn test_full_sweep_never_double_books() {
        let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();
        let mut seen = HashSet::new();

        for _ in 0..19 {
            let record = desk.book(5).unwrap();
            for id in record.room_numbers() {
                assert!(seen.insert(id), "room {} booked twice", id);
            }
        }
        let record = desk.book(2).unwrap();
        for id in record.room_numbers() {
            assert!(seen.insert(id), "room {} booked twice", id);
        }

        assert_eq!(seen.len(), 97);
        assert!(desk.available_rooms().is_empty());
        assert!(desk.book(1).is_err());
    }

    #[test]
    fn test_reset_restores_full_availability() {
        let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();
        desk.book(4).unwrap();
        assert_eq!(desk.available_rooms().len(), 93);

        desk.reset();
        assert_eq!(desk.available_rooms().len(), 97);
    }

    #[test]
    fn test_randomize_occupancy_replaces_previous_draw() {
        let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();
        let mut generator = OccupancyGenerator::with_seed(7);

        desk.randomize_occupancy(&mut generator, 1.0);
        assert_eq!(desk.occupied().len(), 97);

        desk.randomize_occupancy(&mut generator, 0.0);
        assert!(desk.occupied().is_empty());
    }

    #[test]
    fn test_availability_by_floor() {
        let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();

        let counts = desk.availability_by_floor();
        assert_eq!(counts.len(), 10);
        assert_eq!(counts[0], (1, 10));
        assert_eq!(counts[9], (10, 7));

        let occupied = [RoomId::new(201), RoomId::new(202)].into_iter().collect();
        desk.set_occupancy(occupied);
        assert_eq!(desk.availability_by_floor()[1], (2, 8));
    }

    #[test]
    fn test_booking_record_json_line() {
        let mut desk = FrontDesk::new(HotelLayout::new()).unwrap();
        let record = desk.book(1).unwrap();

        let json = record.to_json().unwrap();
        assert!(json.contains("BKG_"));
        assert!(json.contains("\"travel_minutes\":0"));

        let parsed: BookingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, record.id);
        assert_eq!(parsed.rooms, record.rooms);
        assert_eq!(parsed.travel_minutes, 0);
    }
}
