//! Primary allocation: regular staff against the working catalog.
//!
//! # Algorithm
//!
//! For one date:
//! 1. Order the working catalog longest shift first, so shorter shifts
//!    can inherit coverage from longer overlapping ones.
//! 2. For each shift, skip it if overlap coverage already meets its
//!    headcount; otherwise walk the roster in input order
//!    (first-listed, first-served) and place eligible regular staff until
//!    the gap is closed or the roster runs out.
//!
//! A regular staff member holds at most one shift per day. Running out of
//! staff is not an error; the gap carries over to backfill.
//!
//! # Complexity
//! O(s * p * a) where s=shifts, p=people, a=placements on the date.

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::ledger::{Ledger, SkipReason};
use crate::models::{iso_week_of, IsoWeekKey, Person, Phase, ShiftCatalog, ShiftKey};

/// Places regular staff on `date`. Returns the number of placements made.
pub(crate) fn allocate_primary(
    date: NaiveDate,
    catalog: &ShiftCatalog,
    roster: &[Person],
    ledger: &mut Ledger,
) -> usize {
    let week = iso_week_of(date);
    let mut placed = 0;

    for shift in catalog.by_descending_duration() {
        let required = shift.required_count as usize;
        let covered = ledger.covered(date, &shift.key);
        if covered >= required {
            trace!(%date, shift = %shift.key, covered, "already covered by overlap");
            continue;
        }

        let mut remaining = required - covered;
        for (idx, person) in roster.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            if let Err(reason) = check_primary(person, idx, date, week, &shift.key, ledger) {
                trace!(%date, shift = %shift.key, person = %person.name, ?reason, "skipped");
                continue;
            }

            ledger.place(date, shift.key, idx, Phase::Primary);
            remaining -= 1;
            placed += 1;
            debug!(%date, shift = %shift.key, person = %person.name, "primary placement");
        }
    }

    placed
}

/// Whether `person` may take `shift` on `date` in the primary phase.
fn check_primary(
    person: &Person,
    idx: usize,
    date: NaiveDate,
    week: IsoWeekKey,
    shift: &ShiftKey,
    ledger: &Ledger,
) -> Result<(), SkipReason> {
    if person.is_fill_in {
        return Err(SkipReason::FillIn);
    }
    if !person.is_available_for(shift) {
        return Err(SkipReason::Unavailable);
    }
    if person.is_blacked_out(date) {
        return Err(SkipReason::Blackout);
    }
    if let Some(cap) = person.effective_weekly_cap() {
        if ledger.week_count(idx, week) >= cap {
            return Err(SkipReason::WeeklyCap);
        }
    }
    if ledger.is_working(idx, date) {
        return Err(SkipReason::AlreadyWorking);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ShiftKey {
        s.parse().unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        // March 2025: the 3rd is a Monday
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn catalog(entries: &[(&str, u32)]) -> ShiftCatalog {
        ShiftCatalog::from_entries(entries.iter().map(|&(s, c)| (key(s), c))).unwrap()
    }

    #[test]
    fn test_longest_shift_first() {
        let c = catalog(&[("08:00-11:00", 1), ("11:00-16:30", 1)]);
        let roster = vec![Person::regular("Ann"), Person::regular("Ben")];
        let mut l = Ledger::new();

        assert_eq!(allocate_primary(day(3), &c, &roster, &mut l), 2);
        // Ann is first-listed and gets the longer shift
        assert_eq!(l.shifts_of(0, day(3)).collect::<Vec<_>>(), vec![key("11:00-16:30")]);
        assert_eq!(l.shifts_of(1, day(3)).collect::<Vec<_>>(), vec![key("08:00-11:00")]);
    }

    #[test]
    fn test_one_shift_per_day() {
        let c = catalog(&[("08:00-11:00", 1), ("11:00-16:30", 1)]);
        let roster = vec![Person::regular("Ann")];
        let mut l = Ledger::new();

        assert_eq!(allocate_primary(day(3), &c, &roster, &mut l), 1);
        assert_eq!(l.shifts_of(0, day(3)).count(), 1);
        assert_eq!(l.covered(day(3), &key("08:00-11:00")), 0);
    }

    #[test]
    fn test_fill_in_never_placed() {
        let c = catalog(&[("08:00-11:00", 1)]);
        let roster = vec![Person::fill_in("Bo")];
        let mut l = Ledger::new();

        assert_eq!(allocate_primary(day(3), &c, &roster, &mut l), 0);
    }

    #[test]
    fn test_availability_respected() {
        let c = catalog(&[("08:00-11:00", 1), ("11:00-16:30", 1)]);
        let roster = vec![
            Person::regular("Ann").with_available_shift(key("08:00-11:00")),
            Person::regular("Ben"),
        ];
        let mut l = Ledger::new();

        allocate_primary(day(3), &c, &roster, &mut l);
        assert_eq!(l.shifts_of(0, day(3)).collect::<Vec<_>>(), vec![key("08:00-11:00")]);
        assert_eq!(l.shifts_of(1, day(3)).collect::<Vec<_>>(), vec![key("11:00-16:30")]);
    }

    #[test]
    fn test_blackout_respected() {
        let c = catalog(&[("08:00-11:00", 1)]);
        let roster = vec![Person::regular("Ann").with_blackout(day(3))];
        let mut l = Ledger::new();

        assert_eq!(allocate_primary(day(3), &c, &roster, &mut l), 0);
        assert_eq!(allocate_primary(day(4), &c, &roster, &mut l), 1);
    }

    #[test]
    fn test_weekly_cap_per_iso_week() {
        let c = catalog(&[("08:00-11:00", 1)]);
        let roster = vec![Person::regular("Ann").with_weekly_cap(2)];
        let mut l = Ledger::new();

        // Mon..Thu of one ISO week: only two placements
        for d in 3..=6 {
            allocate_primary(day(d), &c, &roster, &mut l);
        }
        assert_eq!(l.placement_count(), 2);

        // next Monday opens a new week
        assert_eq!(allocate_primary(day(10), &c, &roster, &mut l), 1);
    }

    #[test]
    fn test_overlap_coverage_skips_short_shift() {
        // a person on 08:00-16:00 also covers 09:00-12:00
        let c = catalog(&[("09:00-12:00", 1), ("08:00-16:00", 1)]);
        let roster = vec![Person::regular("Ann"), Person::regular("Ben")];
        let mut l = Ledger::new();

        assert_eq!(allocate_primary(day(3), &c, &roster, &mut l), 1);
        assert_eq!(l.shifts_of(0, day(3)).collect::<Vec<_>>(), vec![key("08:00-16:00")]);
        assert!(!l.is_working(1, day(3)));
    }

    #[test]
    fn test_headcount_and_exhaustion() {
        let c = catalog(&[("11:00-16:30", 3)]);
        let roster = vec![Person::regular("Ann"), Person::regular("Ben")];
        let mut l = Ledger::new();

        assert_eq!(allocate_primary(day(3), &c, &roster, &mut l), 2);
        assert_eq!(l.covered(day(3), &key("11:00-16:30")), 2);
    }

    #[test]
    fn test_check_reasons() {
        let l = Ledger::new();
        let week = iso_week_of(day(3));
        let shift = key("08:00-11:00");

        assert_eq!(
            check_primary(&Person::fill_in("Bo"), 0, day(3), week, &shift, &l),
            Err(SkipReason::FillIn)
        );
        assert_eq!(
            check_primary(
                &Person::regular("Ann").with_available_shift(key("18:30-22:00")),
                0,
                day(3),
                week,
                &shift,
                &l
            ),
            Err(SkipReason::Unavailable)
        );
        assert_eq!(
            check_primary(&Person::regular("Ann"), 0, day(3), week, &shift, &l),
            Ok(())
        );
    }
}
