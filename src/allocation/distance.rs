//! Travel distance model
//!
//! This module is the single source of travel-cost truth for the allocator.
//! Distances are expressed in minutes: one minute per corridor step, two
//! minutes per floor crossed via the stairs or lift at the left end of every
//! corridor.

use crate::hotel::Room;

/// Travel cost in minutes between two rooms
///
/// On the same floor the cost is the corridor gap between the two positions.
/// Across floors each guest walks to the stairs first, so the cost is the sum
/// of both corridor positions plus two minutes per floor crossed.
pub fn distance(a: &Room, b: &Room) -> u32 {
    if a.floor() == b.floor() {
        u32::from(a.pos().abs_diff(b.pos()))
    } else {
        u32::from(a.pos()) + u32::from(b.pos()) + 2 * u32::from(a.floor().abs_diff(b.floor()))
    }
}

/// Worst-case pairwise travel cost of a room set
///
/// Zero for empty and single-room sets; otherwise the maximum [`distance`]
/// over all unordered pairs.
pub fn travel_cost(rooms: &[Room]) -> u32 {
    let mut worst = 0;

    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            worst = worst.max(distance(a, b));
        }
    }

    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_floor() {
        let a = Room::new(3, 1);
        let b = Room::new(3, 7);

        assert_eq!(distance(&a, &b), 6);
        assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn test_distance_cross_floor() {
        // Both guests walk to the stairs, then two minutes per floor
        let a = Room::new(3, 9);
        let b = Room::new(4, 1);
        assert_eq!(distance(&a, &b), 9 + 1 + 2);

        let a = Room::new(1, 0);
        let b = Room::new(10, 0);
        assert_eq!(distance(&a, &b), 2 * 9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Room::new(2, 4);
        let b = Room::new(7, 1);

        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn test_travel_cost_small_sets() {
        assert_eq!(travel_cost(&[]), 0);
        assert_eq!(travel_cost(&[Room::new(5, 3)]), 0);
    }

    #[test]
    fn test_travel_cost_same_floor_run() {
        let rooms = vec![Room::new(1, 0), Room::new(1, 1), Room::new(1, 2)];
        assert_eq!(travel_cost(&rooms), 2);
    }

    #[test]
    fn test_travel_cost_takes_worst_pair() {
        let rooms = vec![Room::new(3, 8), Room::new(3, 9), Room::new(4, 0), Room::new(4, 1)];

        // The worst pair is (3, 9) to (4, 1): 9 + 1 + 2
        assert_eq!(travel_cost(&rooms), 12);
    }
}
