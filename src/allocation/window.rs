//! Minimum-span window search on a single floor
//!
//! A window is a run of consecutive entries in one floor's availability
//! list. Its span is the corridor distance between its first and last room,
//! which equals the set's worst-case travel cost on a single floor.

use crate::hotel::Room;

/// The tightest window of `count` rooms from one floor's availability
///
/// `rooms` must be a single floor's available rooms sorted by position.
/// Among equal spans the leftmost window wins. Returns `None` when the floor
/// holds fewer than `count` rooms or `count` is zero.
pub fn best_window(rooms: &[Room], count: usize) -> Option<&[Room]> {
    if count == 0 || rooms.len() < count {
        return None;
    }

    let mut best: Option<(&[Room], u8)> = None;

    for window in rooms.windows(count) {
        let span = window[count - 1].pos() - window[0].pos();
        // Strictly smaller only, so the leftmost of equal spans is kept
        match best {
            Some((_, best_span)) if span >= best_span => {}
            _ => best = Some((window, span)),
        }
    }

    best.map(|(window, _)| window)
}
