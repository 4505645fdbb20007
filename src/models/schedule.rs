//! Schedule (result) model.
//!
//! A run produces a flat log of placements plus per-person views of it
//! and the demand left open on each date/shift after both phases.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{join_shifts, DateRange, ShiftKey};

/// Which allocation phase made a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Regular staff against the current catalog.
    Primary,
    /// Fill-in staff against the fixed catalog.
    Backfill,
}

/// A `(date, shift, person)` placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub date: NaiveDate,
    pub shift: ShiftKey,
    pub person: String,
    pub phase: Phase,
}

/// One person's shifts, by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonSchedule {
    /// Shifts per date, in assignment order.
    pub days: BTreeMap<NaiveDate, Vec<ShiftKey>>,
    /// Placements across both phases.
    pub assignment_count: usize,
}

/// Coverage state of one date/shift after allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandStatus {
    pub date: NaiveDate,
    pub shift: ShiftKey,
    /// Headcount the shift asks for.
    pub required: u32,
    /// Distinct people covering the shift (overlap-aware).
    pub covered: u32,
    /// `required - covered`, floored at zero.
    pub remaining: u32,
}

/// The outcome of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// The period that was scheduled.
    pub date_range: DateRange,
    /// Roster names in input order.
    pub roster: Vec<String>,
    /// Per-person view, keyed by name. Everyone on the roster has an entry.
    pub people: BTreeMap<String, PersonSchedule>,
    /// Placements in the order they were made.
    pub assignments: Vec<Assignment>,
    /// Remaining demand per date and shift.
    pub demand: Vec<DemandStatus>,
}

impl Assignment {
    /// Creates a placement.
    pub fn new(date: NaiveDate, shift: ShiftKey, person: impl Into<String>, phase: Phase) -> Self {
        Self {
            date,
            shift,
            person: person.into(),
            phase,
        }
    }

    /// Shift length in hours.
    pub fn hours(&self) -> f64 {
        self.shift.duration_hours()
    }
}

impl PersonSchedule {
    pub(crate) fn push(&mut self, date: NaiveDate, shift: ShiftKey) {
        self.days.entry(date).or_default().push(shift);
        self.assignment_count += 1;
    }

    /// Shifts on a date (empty if none).
    pub fn shifts_on(&self, date: NaiveDate) -> &[ShiftKey] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The day's shifts joined for display, e.g. `08:00-11:00/16:30-18:30`.
    pub fn merged(&self, date: NaiveDate) -> Option<String> {
        self.days
            .get(&date)
            .filter(|shifts| !shifts.is_empty())
            .map(|shifts| join_shifts(shifts))
    }

    /// Number of dates with at least one shift.
    pub fn working_days(&self) -> usize {
        self.days.values().filter(|s| !s.is_empty()).count()
    }

    /// Sum of shift durations in hours.
    pub fn total_hours(&self) -> f64 {
        let minutes: u32 = self
            .days
            .values()
            .flatten()
            .map(ShiftKey::duration_minutes)
            .sum();
        f64::from(minutes) / 60.0
    }
}

impl ScheduleResult {
    /// Creates an empty result with an entry per roster name.
    pub fn new(date_range: DateRange, roster: Vec<String>) -> Self {
        let people = roster
            .iter()
            .map(|name| (name.clone(), PersonSchedule::default()))
            .collect();
        Self {
            date_range,
            roster,
            people,
            assignments: Vec::new(),
            demand: Vec::new(),
        }
    }

    /// Records a placement in the log and the person's view.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.people
            .entry(assignment.person.clone())
            .or_default()
            .push(assignment.date, assignment.shift);
        self.assignments.push(assignment);
    }

    /// A person's schedule.
    pub fn person(&self, name: &str) -> Option<&PersonSchedule> {
        self.people.get(name)
    }

    /// Shifts a person holds on a date.
    pub fn shifts_for(&self, name: &str, date: NaiveDate) -> &[ShiftKey] {
        self.people
            .get(name)
            .map(|p| p.shifts_on(date))
            .unwrap_or(&[])
    }

    /// All placements on a date.
    pub fn assignments_on(&self, date: NaiveDate) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.date == date).collect()
    }

    /// All placements for a person.
    pub fn assignments_for(&self, name: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.person == name)
            .collect()
    }

    /// Demand status for a date/shift.
    pub fn demand_for(&self, date: NaiveDate, shift: &ShiftKey) -> Option<&DemandStatus> {
        self.demand
            .iter()
            .find(|d| d.date == date && &d.shift == shift)
    }

    /// Remaining demand for a date/shift (0 if the shift was not scheduled).
    pub fn remaining(&self, date: NaiveDate, shift: &ShiftKey) -> u32 {
        self.demand_for(date, shift).map(|d| d.remaining).unwrap_or(0)
    }

    /// Date/shift pairs left short after both phases.
    pub fn shortfalls(&self) -> Vec<&DemandStatus> {
        self.demand.iter().filter(|d| d.remaining > 0).collect()
    }

    /// Whether every scheduled shift met its headcount.
    pub fn is_fully_covered(&self) -> bool {
        self.demand.iter().all(|d| d.remaining == 0)
    }

    /// Number of placements.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ShiftKey {
        s.parse().unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn sample_result() -> ScheduleResult {
        let range = DateRange::new(day(3), day(4)).unwrap();
        let mut r = ScheduleResult::new(range, vec!["Ann".into(), "Bo".into()]);
        r.add_assignment(Assignment::new(day(3), key("11:00-16:30"), "Ann", Phase::Primary));
        r.add_assignment(Assignment::new(day(3), key("08:00-11:00"), "Bo", Phase::Backfill));
        r.add_assignment(Assignment::new(day(3), key("16:30-18:30"), "Bo", Phase::Backfill));
        r.demand.push(DemandStatus {
            date: day(3),
            shift: key("18:30-22:00"),
            required: 2,
            covered: 0,
            remaining: 2,
        });
        r
    }

    #[test]
    fn test_person_view() {
        let r = sample_result();
        let bo = r.person("Bo").unwrap();
        assert_eq!(bo.assignment_count, 2);
        assert_eq!(bo.working_days(), 1);
        assert_eq!(
            bo.merged(day(3)).as_deref(),
            Some("08:00-11:00/16:30-18:30")
        );
        assert_eq!(bo.merged(day(4)), None);
        assert!((bo.total_hours() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_roster_entries_exist() {
        let range = DateRange::single(day(3));
        let r = ScheduleResult::new(range, vec!["Ann".into(), "Cy".into()]);
        assert_eq!(r.person("Cy").unwrap().assignment_count, 0);
        assert!(r.shifts_for("Cy", day(3)).is_empty());
        assert!(r.shifts_for("Nobody", day(3)).is_empty());
    }

    #[test]
    fn test_queries() {
        let r = sample_result();
        assert_eq!(r.assignment_count(), 3);
        assert_eq!(r.assignments_on(day(3)).len(), 3);
        assert_eq!(r.assignments_on(day(4)).len(), 0);
        assert_eq!(r.assignments_for("Ann").len(), 1);
        assert_eq!(r.shifts_for("Ann", day(3)), &[key("11:00-16:30")]);
    }

    #[test]
    fn test_shortfalls() {
        let r = sample_result();
        assert_eq!(r.remaining(day(3), &key("18:30-22:00")), 2);
        assert_eq!(r.remaining(day(3), &key("08:00-11:00")), 0);
        assert_eq!(r.shortfalls().len(), 1);
        assert!(!r.is_fully_covered());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let r = sample_result();
        let json = serde_json::to_string(&r).unwrap();
        let back: ScheduleResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
