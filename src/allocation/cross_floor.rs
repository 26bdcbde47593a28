//! Cross-floor selection around candidate center floors
//!
//! Invoked only when no single floor can seat the whole party. The selector
//! anchors each candidate set on a center floor, tops it up from neighboring
//! floors, and keeps the set with the lowest worst-case travel cost.

use crate::allocation::availability::FloorAvailability;
use crate::allocation::distance::travel_cost;
use crate::allocation::window::best_window;
use crate::hotel::{Room, FLOOR_COUNT};

/// Most candidate center floors examined per request
pub const MAX_CANDIDATE_CENTERS: usize = 4;

/// Pick `count` rooms spanning floors around the best-scoring center
///
/// For each candidate center the selector seeds the pick with a base run on
/// the center floor, trying sizes from `min(count, available there)` down to
/// one, and fills the remainder from neighboring floors at increasing
/// distance, the floor below tried before the floor above. Complete sets are
/// scored by worst-case pairwise travel cost; strict comparison keeps the
/// earliest candidate on ties, so larger base runs and earlier centers win.
///
/// When every center fails to complete a set, a deterministic proximity
/// sweep from the first center is the last resort. `None` means the
/// availability cannot seat the party at all.
pub fn cross_floor_pick(availability: &FloorAvailability, count: usize) -> Option<Vec<Room>> {
    let centers = availability.candidate_centers(MAX_CANDIDATE_CENTERS);

    let mut best: Option<Vec<Room>> = None;
    let mut best_score = u32::MAX;

    for &center in &centers {
        let center_rooms = availability.on_floor(center);
        if center_rooms.is_empty() {
            continue;
        }

        let max_base = count.min(center_rooms.len());
        for base_size in (1..=max_base).rev() {
            let base = best_window(center_rooms, base_size).unwrap_or(&center_rooms[..base_size]);

            let mut picked = base.to_vec();
            fill_from_neighbors(availability, center, count, &mut picked);

            if picked.len() == count {
                let score = travel_cost(&picked);
                if score < best_score {
                    best_score = score;
                    best = Some(picked);
                }
            }
        }
    }

    if best.is_some() {
        return best;
    }

    centers.first().and_then(|&center| proximity_fallback(availability, center, count))
}

/// Top up `picked` from floors at increasing distance from the center
///
/// For each distance the floor below is drained before the floor above,
/// rooms taken in ascending position order, until the party is seated or
/// both directions run off the building.
fn fill_from_neighbors(
    availability: &FloorAvailability,
    center: u8,
    count: usize,
    picked: &mut Vec<Room>,
) {
    let mut delta: u8 = 1;

    while picked.len() < count && (delta < center || center + delta <= FLOOR_COUNT) {
        let below = (delta < center).then(|| center - delta);
        let above = (center + delta <= FLOOR_COUNT).then(|| center + delta);

        for floor in [below, above].into_iter().flatten() {
            if picked.len() >= count {
                break;
            }
            for room in availability.on_floor(floor) {
                if picked.len() >= count {
                    break;
                }
                picked.push(*room);
            }
        }

        delta += 1;
    }
}

/// Last-resort sweep outward from the center floor
///
/// Floors are visited nearest first, below before above, taking rooms in
/// position order until the party is seated. Fails only when the whole
/// availability holds fewer than `count` rooms.
fn proximity_fallback(
    availability: &FloorAvailability,
    center: u8,
    count: usize,
) -> Option<Vec<Room>> {
    let mut order = vec![center];
    for delta in 1..FLOOR_COUNT {
        if delta < center {
            order.push(center - delta);
        }
        if center + delta <= FLOOR_COUNT {
            order.push(center + delta);
        }
    }

    let mut picked = Vec::with_capacity(count);
    for floor in order {
        for room in availability.on_floor(floor) {
            if picked.len() >= count {
                break;
            }
            picked.push(*room);
        }
        if picked.len() >= count {
            break;
        }
    }

    (picked.len() == count).then_some(picked)
}
