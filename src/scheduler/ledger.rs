//! In-run bookkeeping shared by both allocation phases.
//!
//! People are referred to by roster index; names are attached only when
//! the ledger is turned into a [`ScheduleResult`].

use std::collections::HashMap;

use chrono::NaiveDate;

use super::coverage::covered_count;
use crate::models::{
    iso_week_of, Assignment, DateRange, DemandStatus, IsoWeekKey, Person, Phase, ScheduleResult,
    ShiftCatalog, ShiftKey,
};

/// Why a person was passed over for a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipReason {
    /// Fill-in staff in the primary phase.
    FillIn,
    /// Regular staff in the backfill phase.
    Regular,
    /// Shift not in the person's availability.
    Unavailable,
    /// Blackout date.
    Blackout,
    /// Weekly cap already reached this ISO week.
    WeeklyCap,
    /// Already holds a shift that day (primary: one shift per day).
    AlreadyWorking,
    /// Would overlap a shift already held that day.
    Overlap,
}

#[derive(Debug, Default)]
pub(crate) struct Ledger {
    days: HashMap<NaiveDate, Vec<(ShiftKey, usize)>>,
    weekly: HashMap<(usize, IsoWeekKey), u32>,
    placements: Vec<(NaiveDate, ShiftKey, usize, Phase)>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// `(shift, person)` placements on a date, in placement order.
    pub(crate) fn on_date(&self, date: NaiveDate) -> &[(ShiftKey, usize)] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Shifts a person holds on a date.
    pub(crate) fn shifts_of(
        &self,
        person: usize,
        date: NaiveDate,
    ) -> impl Iterator<Item = ShiftKey> + '_ {
        self.on_date(date)
            .iter()
            .filter(move |(_, p)| *p == person)
            .map(|(shift, _)| *shift)
    }

    pub(crate) fn is_working(&self, person: usize, date: NaiveDate) -> bool {
        self.shifts_of(person, date).next().is_some()
    }

    /// Primary placements for a person in an ISO week.
    pub(crate) fn week_count(&self, person: usize, week: IsoWeekKey) -> u32 {
        self.weekly.get(&(person, week)).copied().unwrap_or(0)
    }

    pub(crate) fn covered(&self, date: NaiveDate, shift: &ShiftKey) -> usize {
        covered_count(shift, self.on_date(date))
    }

    pub(crate) fn place(&mut self, date: NaiveDate, shift: ShiftKey, person: usize, phase: Phase) {
        self.days.entry(date).or_default().push((shift, person));
        if phase == Phase::Primary {
            *self.weekly.entry((person, iso_week_of(date))).or_insert(0) += 1;
        }
        self.placements.push((date, shift, person, phase));
    }

    #[cfg(test)]
    pub(crate) fn placement_count(&self) -> usize {
        self.placements.len()
    }

    /// Builds the result, measuring remaining demand against `catalog`.
    pub(crate) fn into_result(
        self,
        range: DateRange,
        roster: &[Person],
        catalog: &ShiftCatalog,
    ) -> ScheduleResult {
        let names: Vec<String> = roster.iter().map(|p| p.name.clone()).collect();
        let mut result = ScheduleResult::new(range, names);

        for date in range.dates() {
            for def in catalog {
                let covered = self.covered(date, &def.key) as u32;
                result.demand.push(DemandStatus {
                    date,
                    shift: def.key,
                    required: def.required_count,
                    covered,
                    remaining: def.required_count.saturating_sub(covered),
                });
            }
        }

        for (date, shift, person, phase) in self.placements {
            result.add_assignment(Assignment::new(
                date,
                shift,
                roster[person].name.clone(),
                phase,
            ));
        }

        result
    }
}
