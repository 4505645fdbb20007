//! Overlap-aware coverage.
//!
//! # Algorithm
//!
//! 1. For each assignment that intersects the target shift, add the
//!    overlapping minutes to that person's running total.
//! 2. A person covers the target when the part of the target they leave
//!    unaddressed is under [`UNCOVERED_THRESHOLD_MINUTES`].
//! 3. The result is the number of distinct covering people.
//!
//! Coverage is not cached: a newly placed overlapping shift can push a
//! person over the threshold, so callers recompute after every placement.
//!
//! # Complexity
//! O(a) where a = assignments on the date.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::ShiftKey;

/// Uncovered-time policy: a person whose shifts leave less than this many
/// minutes of the target unaddressed counts as covering it (3 hours).
pub const UNCOVERED_THRESHOLD_MINUTES: u32 = 3 * 60;

/// Counts the distinct people who adequately cover `target`.
///
/// `assigned` holds the `(shift, person)` placements already made on one
/// date; order does not matter.
///
/// # Example
///
/// ```
/// use shift_roster::models::ShiftKey;
/// use shift_roster::scheduler::covered_count;
///
/// let target: ShiftKey = "08:00-11:00".parse().unwrap();
/// let partial: ShiftKey = "08:00-10:15".parse().unwrap();
///
/// assert_eq!(covered_count(&target, &[] as &[(ShiftKey, &str)]), 0);
/// // 45 uncovered minutes is under the threshold
/// assert_eq!(covered_count(&target, &[(partial, "Ann")]), 1);
/// ```
pub fn covered_count<P: Eq + Hash>(target: &ShiftKey, assigned: &[(ShiftKey, P)]) -> usize {
    let mut overlap_by_person: HashMap<&P, u32> = HashMap::new();

    for (shift, person) in assigned {
        let overlap = shift.overlap_minutes(target);
        if overlap > 0 {
            *overlap_by_person.entry(person).or_insert(0) += overlap;
        }
    }

    let duration = target.duration_minutes();
    overlap_by_person
        .values()
        .filter(|&&covered| duration.saturating_sub(covered) < UNCOVERED_THRESHOLD_MINUTES)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ShiftKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_assignments() {
        let none: &[(ShiftKey, &str)] = &[];
        for s in ["08:00-11:00", "11:00-16:30", "08:00-22:00"] {
            assert_eq!(covered_count(&key(s), none), 0);
        }
    }

    #[test]
    fn test_identical_shift_counts() {
        let target = key("11:00-16:30");
        assert_eq!(covered_count(&target, &[(target, "Ann")]), 1);
    }

    #[test]
    fn test_touching_shift_does_not_count() {
        let assigned = [(key("11:00-16:30"), "Ann")];
        assert_eq!(covered_count(&key("08:00-11:00"), &assigned), 0);
    }

    #[test]
    fn test_threshold_boundary() {
        // target 6h; 3h overlap leaves exactly 3h uncovered, which is not < 3h
        let target = key("10:00-16:00");
        assert_eq!(covered_count(&target, &[(key("10:00-13:00"), "Ann")]), 0);
        // one more minute of overlap tips it
        assert_eq!(covered_count(&target, &[(key("10:00-13:01"), "Ann")]), 1);
    }

    #[test]
    fn test_partial_short_target() {
        // 3h target: any overlap leaves < 3h uncovered
        let target = key("08:00-11:00");
        assert_eq!(covered_count(&target, &[(key("08:00-10:15"), "Ann")]), 1);
        assert_eq!(covered_count(&target, &[(key("10:59-16:00"), "Ann")]), 1);
    }

    #[test]
    fn test_stacked_shifts_sum_per_person() {
        // 8h target; each piece alone leaves >= 3h uncovered
        let target = key("08:00-16:00");
        let pieces = [(key("08:00-11:00"), "Ann"), (key("11:00-14:00"), "Ann")];
        assert_eq!(covered_count(&target, &pieces[..1]), 0);
        assert_eq!(covered_count(&target, &pieces), 1);

        // the same pieces split across two people cover nobody
        let split = [(key("08:00-11:00"), "Ann"), (key("11:00-14:00"), "Ben")];
        assert_eq!(covered_count(&target, &split), 0);
    }

    #[test]
    fn test_distinct_people() {
        let target = key("11:00-16:30");
        let assigned = [
            (key("11:00-16:30"), "Ann"),
            (key("11:00-16:30"), "Ben"),
            (key("18:30-22:00"), "Cy"),
        ];
        assert_eq!(covered_count(&target, &assigned), 2);
    }

    #[test]
    fn test_monotonic() {
        let target = key("11:00-16:30");
        let mut assigned: Vec<(ShiftKey, &str)> = Vec::new();
        let additions = [
            (key("08:00-11:00"), "Ann"),
            (key("12:00-14:00"), "Ben"),
            (key("14:00-18:00"), "Ben"),
            (key("11:00-16:30"), "Cy"),
            (key("16:30-18:30"), "Cy"),
        ];

        let mut last = covered_count(&target, &assigned);
        for a in additions {
            assigned.push(a);
            let now = covered_count(&target, &assigned);
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 2); // Ben (4.5h) and Cy (5.5h)
    }

    #[test]
    fn test_index_people() {
        let target = key("08:00-11:00");
        let assigned = [(key("08:00-11:00"), 0usize), (key("08:00-11:00"), 0usize)];
        assert_eq!(covered_count(&target, &assigned), 1);
    }
}
