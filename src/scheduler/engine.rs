//! Two-phase greedy roster scheduler.
//!
//! # Algorithm
//!
//! 1. Validate the roster against the working catalog.
//! 2. Primary phase: for every date in order, place regular staff on the
//!    working catalog, longest shift first.
//! 3. Backfill phase: for every date in order, place fill-in staff on the
//!    fixed catalog's residual demand.
//! 4. Measure remaining demand per date and working-catalog shift.
//!
//! Roster order is the only tie-break in both phases: first-listed,
//! first-served. The run is deterministic for a given input.
//!
//! # Complexity
//! O(d * s * p * a) where d=dates, s=shifts, p=people, a=placements per date.

use tracing::info;

use super::backfill::allocate_backfill;
use super::ledger::Ledger;
use super::primary::allocate_primary;
use crate::error::ConfigError;
use crate::models::{DateRange, Person, ScheduleResult};
use crate::session::Session;
use crate::validation::validate_roster;

/// Input container for one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    /// Period to schedule.
    pub date_range: DateRange,
    /// Staff in priority order.
    pub roster: Vec<Person>,
}

impl ScheduleRequest {
    /// Creates a request.
    pub fn new(date_range: DateRange, roster: Vec<Person>) -> Self {
        Self { date_range, roster }
    }

    /// Appends a person at the lowest priority.
    pub fn with_person(mut self, person: Person) -> Self {
        self.roster.push(person);
        self
    }
}

/// Two-phase greedy roster scheduler.
///
/// Owns the session it schedules against; every run starts from scratch.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shift_roster::models::{DateRange, Person, ShiftCatalog};
/// use shift_roster::scheduler::RosterScheduler;
/// use shift_roster::Session;
///
/// let catalog = ShiftCatalog::from_entries([
///     ("08:00-11:00".parse().unwrap(), 1),
///     ("11:00-16:30".parse().unwrap(), 1),
/// ])
/// .unwrap();
/// let scheduler = RosterScheduler::new(Session::new(catalog));
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let roster = vec![Person::regular("Alice"), Person::fill_in("Bob")];
/// let result = scheduler.schedule(&roster, DateRange::single(day)).unwrap();
///
/// assert_eq!(result.assignment_count(), 2);
/// assert!(result.is_fully_covered());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterScheduler {
    session: Session,
}

impl RosterScheduler {
    /// Creates a scheduler for a session.
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// The session this scheduler runs against.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for catalog edits between runs.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Schedules `roster` over `date_range`.
    ///
    /// # Errors
    /// `InvalidInput` if the roster fails validation. Under-coverage is not
    /// an error; see [`ScheduleResult::shortfalls`].
    pub fn schedule(
        &self,
        roster: &[Person],
        date_range: DateRange,
    ) -> Result<ScheduleResult, ConfigError> {
        validate_roster(roster, self.session.current()).map_err(ConfigError::InvalidInput)?;

        info!(
            start = %date_range.start(),
            end = %date_range.end(),
            staff = roster.len(),
            shifts = self.session.current().len(),
            "scheduling run started"
        );

        let mut ledger = Ledger::new();

        let mut primary = 0;
        for date in date_range.dates() {
            primary += allocate_primary(date, self.session.current(), roster, &mut ledger);
        }

        let mut backfill = 0;
        for date in date_range.dates() {
            backfill += allocate_backfill(date, self.session.fixed(), roster, &mut ledger);
        }

        let result = ledger.into_result(date_range, roster, self.session.current());

        let shortfalls = result.shortfalls();
        for s in &shortfalls {
            info!(
                date = %s.date,
                shift = %s.shift,
                required = s.required,
                remaining = s.remaining,
                "shift left short"
            );
        }
        info!(primary, backfill, shortfalls = shortfalls.len(), "scheduling run finished");

        Ok(result)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &ScheduleRequest) -> Result<ScheduleResult, ConfigError> {
        self.schedule(&request.roster, request.date_range)
    }
}
