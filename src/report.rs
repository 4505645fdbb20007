//! Plain-text reports.
//!
//! Three tables: the session's shift catalog, the schedule grid
//! (people × dates) and per-person statistics. Grid cells in the grid show, in order of precedence:
//! - `X` when the person is blacked out that date
//! - the day's shifts joined with `/`
//! - `off` otherwise

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Person, ScheduleResult, ShiftKey};
use crate::scheduler::StaffStats;
use crate::session::Session;

/// Marker for a blackout date.
pub const BLACKOUT_MARK: &str = "X";

/// Marker for a day without shifts.
pub const OFF_MARK: &str = "off";

/// Column label for a date, e.g. `2025-03-03(Mon)`.
pub fn date_label(date: NaiveDate) -> String {
    format!("{}({})", date.format("%Y-%m-%d"), date.format("%a"))
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GridCell {
    Blackout,
    Off,
    Shifts(String),
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridCell::Blackout => f.pad(BLACKOUT_MARK),
            GridCell::Off => f.pad(OFF_MARK),
            GridCell::Shifts(s) => f.pad(s),
        }
    }
}

/// People × dates view of a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleGrid {
    pub dates: Vec<NaiveDate>,
    /// `(name, cells)` in roster order, one cell per date.
    pub rows: Vec<(String, Vec<GridCell>)>,
}

impl ScheduleGrid {
    /// Builds the grid; `roster` supplies blackout dates.
    pub fn build(result: &ScheduleResult, roster: &[Person]) -> Self {
        let dates: Vec<NaiveDate> = result.date_range.dates().collect();

        let rows = result
            .roster
            .iter()
            .map(|name| {
                let person = roster.iter().find(|p| &p.name == name);
                let schedule = result.person(name);
                let cells = dates
                    .iter()
                    .map(|&date| {
                        if person.is_some_and(|p| p.is_blacked_out(date)) {
                            GridCell::Blackout
                        } else if let Some(merged) = schedule.and_then(|s| s.merged(date)) {
                            GridCell::Shifts(merged)
                        } else {
                            GridCell::Off
                        }
                    })
                    .collect();
                (name.clone(), cells)
            })
            .collect();

        Self { dates, rows }
    }

    /// Cell for a person and date.
    pub fn cell(&self, name: &str, date: NaiveDate) -> Option<&GridCell> {
        let col = self.dates.iter().position(|d| *d == date)?;
        self.rows
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, cells)| cells.get(col))
    }
}

impl fmt::Display for ScheduleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.dates.iter().map(|d| date_label(*d)).collect();
        let name_width = self
            .rows
            .iter()
            .map(|(n, _)| n.chars().count())
            .max()
            .unwrap_or(0)
            .max("Staff".len());
        let widths: Vec<usize> = labels
            .iter()
            .enumerate()
            .map(|(col, label)| {
                self.rows
                    .iter()
                    .filter_map(|(_, cells)| cells.get(col))
                    .map(|c| c.to_string().chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(label.chars().count())
            })
            .collect();

        write!(f, "{:<name_width$}", "Staff")?;
        for (label, width) in labels.iter().zip(&widths) {
            write!(f, " | {label:^width$}")?;
        }
        writeln!(f)?;

        for (name, cells) in &self.rows {
            write!(f, "{name:<name_width$}")?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, " | {cell:^width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One catalog line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogRow {
    pub shift: ShiftKey,
    pub hours: f64,
    pub required: u32,
    /// Captured at session start, so backfill targets it.
    pub fixed: bool,
}

/// The working catalog ordered by start time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogTable(pub Vec<CatalogRow>);

impl CatalogTable {
    pub fn build(session: &Session) -> Self {
        let current = session.current();
        let rows = current
            .sorted_by_start()
            .into_iter()
            .map(|shift| CatalogRow {
                shift,
                hours: shift.duration_hours(),
                required: current.required(&shift).unwrap_or(0),
                fixed: session.is_fixed(&shift),
            })
            .collect();
        Self(rows)
    }
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<11} | {:>5} | {:>6} | {}", "Shift", "Hours", "Needed", "Fixed")?;
        for row in &self.0 {
            writeln!(
                f,
                "{:<11} | {:>5.1} | {:>6} | {}",
                row.shift.to_string(),
                row.hours,
                row.required,
                if row.fixed { "yes" } else { "no" }
            )?;
        }
        Ok(())
    }
}

/// Per-person statistics table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsTable(pub Vec<StaffStats>);

impl fmt::Display for StatsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name_width = self
            .0
            .iter()
            .map(|s| s.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Staff".len());

        writeln!(f, "{:<name_width$} | {:>6} | {:>6}", "Staff", "Shifts", "Hours")?;
        for s in &self.0 {
            writeln!(
                f,
                "{:<name_width$} | {:>6} | {:>6.1}",
                s.name, s.assignment_count, s.total_hours
            )?;
        }
        Ok(())
    }
}
