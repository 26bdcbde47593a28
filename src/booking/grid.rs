//! Floor grid rendering
//!
//! Text rendering of the hotel as one row per floor, floor 1 at the top and
//! the stairs/lift column at the left edge. Pure string building over a
//! layout, an occupied set, and the rooms of the most recent booking.

use std::collections::HashSet;

use crate::allocation::travel_cost;
use crate::hotel::{floor_width, HotelLayout, Room, FLOOR_COUNT};
use crate::types::RoomId;

/// Marker for the stairs/lift column at the left edge of every row.
const STAIRS_MARKER: &str = "<S>";

/// Width of one room cell, wide enough for a bracketed top-floor number.
const CELL_WIDTH: usize = 6;

/// Render the hotel grid with occupancy markers and availability summary.
///
/// Rooms in `last_booking` render bracketed, other occupied rooms render in
/// parentheses, free rooms render as a bare number. When `last_booking` is
/// non-empty a trailer line reports its travel time.
pub fn render_grid(
    layout: &HotelLayout,
    occupied: &HashSet<RoomId>,
    last_booking: &[Room],
) -> String {
    let booked: HashSet<RoomId> = last_booking.iter().map(|room| room.id()).collect();
    let mut out = String::new();

    for floor in 1..=FLOOR_COUNT {
        out.push_str(&format!("Floor {:>2} {}", floor, STAIRS_MARKER));
        for room in layout.rooms_on_floor(floor) {
            let cell = if booked.contains(&room.id()) {
                format!("[{}]", room.id())
            } else if occupied.contains(&room.id()) {
                format!("({})", room.id())
            } else {
                room.id().to_string()
            };
            out.push_str(&format!(" {:^width$}", cell, width = CELL_WIDTH));
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str("Legend: [n] just booked  (n) occupied  n free  <S> stairs/lift\n");

    let mut total_free = 0;
    let mut summary = String::from("Availability:");
    for floor in 1..=FLOOR_COUNT {
        let free = layout
            .rooms_on_floor(floor)
            .iter()
            .filter(|room| !occupied.contains(&room.id()))
            .count();
        total_free += free;
        summary.push_str(&format!(" F{} {}/{}", floor, free, floor_width(floor)));
    }
    out.push_str(&summary);
    out.push('\n');
    out.push_str(&format!(
        "Total available: {}/{}\n",
        total_free,
        layout.room_count()
    ));

    if !last_booking.is_empty() {
        out.push_str(&format!(
            "Total travel time for last booking: {} min\n",
            travel_cost(last_booking)
        ));
    }

    out
}
