//! Backfill: fill-in staff against the fixed catalog.
//!
//! Targets come from the catalog captured at session start, so they do not
//! move when the working catalog is edited. Shifts are visited in the fixed
//! catalog's natural order.
//!
//! Unlike primary allocation, a fill-in person may take several shifts on
//! one day as long as none of them intersect in time.

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::ledger::{Ledger, SkipReason};
use crate::models::{Person, Phase, ShiftCatalog, ShiftKey};

/// Places fill-in staff on `date`. Returns the number of placements made.
pub(crate) fn allocate_backfill(
    date: NaiveDate,
    fixed: &ShiftCatalog,
    roster: &[Person],
    ledger: &mut Ledger,
) -> usize {
    let mut placed = 0;

    for shift in fixed {
        let target = shift.required_count as usize;
        let mut covered = ledger.covered(date, &shift.key);
        if covered >= target {
            continue;
        }

        for (idx, person) in roster.iter().enumerate() {
            if let Err(reason) = check_backfill(person, idx, date, &shift.key, ledger) {
                trace!(%date, shift = %shift.key, person = %person.name, ?reason, "skipped");
                continue;
            }

            ledger.place(date, shift.key, idx, Phase::Backfill);
            placed += 1;
            debug!(%date, shift = %shift.key, person = %person.name, "backfill placement");

            covered = ledger.covered(date, &shift.key);
            if covered >= target {
                break;
            }
        }
    }

    placed
}

/// Whether fill-in `person` may take `shift` on `date`.
fn check_backfill(
    person: &Person,
    idx: usize,
    date: NaiveDate,
    shift: &ShiftKey,
    ledger: &Ledger,
) -> Result<(), SkipReason> {
    if !person.is_fill_in {
        return Err(SkipReason::Regular);
    }
    if person.is_blacked_out(date) {
        return Err(SkipReason::Blackout);
    }
    if ledger.shifts_of(idx, date).any(|held| held.overlaps(shift)) {
        return Err(SkipReason::Overlap);
    }
    Ok(())
}
