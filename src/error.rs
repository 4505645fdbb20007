//! Configuration errors.
//!
//! Every variant aborts a run before allocation starts. Under-coverage is
//! never reported here; it is recorded as remaining demand on the result.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::ShiftKey;
use crate::validation::ValidationError;

/// An input problem that prevents a scheduling run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The date range ends before it starts.
    #[error("start date {start} is after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A shift boundary falls outside opening hours.
    #[error(
        "shift {} must lie within {}-{}",
        format_span(.start_min, .end_min),
        format_minute(crate::models::OPENING_MINUTE),
        format_minute(crate::models::CLOSING_MINUTE)
    )]
    ShiftOutOfBounds { start_min: u32, end_min: u32 },

    /// A shift ends at or before its start.
    #[error("shift {} must end after it starts", format_span(.start_min, .end_min))]
    EmptyShift { start_min: u32, end_min: u32 },

    /// Text that is not of the form `HH:MM-HH:MM`.
    #[error("malformed shift '{0}', expected HH:MM-HH:MM")]
    MalformedShift(String),

    /// The shift is already in the catalog.
    #[error("shift {0} already exists")]
    DuplicateShift(ShiftKey),

    /// Required headcount below one.
    #[error("shift {shift} needs a headcount of at least 1, got {count}")]
    InvalidRequiredCount { shift: ShiftKey, count: u32 },

    /// Fixed shifts stay in the working catalog for the whole session.
    #[error("shift {0} belongs to the fixed catalog and cannot be removed")]
    FixedShift(ShiftKey),

    /// The shift is not in the catalog.
    #[error("shift {0} is not in the catalog")]
    UnknownShift(ShiftKey),

    /// Roster or constraint problems collected by input validation.
    #[error("{} invalid input item(s): {}", .0.len(), summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

pub(crate) fn format_minute(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn format_span(start_min: &u32, end_min: &u32) -> String {
    format!("{}-{}", format_minute(*start_min), format_minute(*end_min))
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
