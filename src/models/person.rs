//! Staff model.
//!
//! A person is either regular staff, placed by the primary phase under
//! availability, blackout and weekly-cap constraints, or fill-in staff,
//! used only to backfill residual demand against the fixed catalog.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ShiftKey;

/// A member of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name, unique within a roster.
    pub name: String,
    /// Fill-in staff skip primary allocation and constraint settings.
    #[serde(default)]
    pub is_fill_in: bool,
    /// Shifts this person may take. Empty = every current shift.
    /// Ignored for fill-in staff.
    #[serde(default)]
    pub available_shifts: BTreeSet<ShiftKey>,
    /// Dates on which this person takes no shift at all.
    #[serde(default)]
    pub blackout_dates: BTreeSet<NaiveDate>,
    /// Maximum primary assignments per ISO week. `None` = unlimited.
    #[serde(default)]
    pub weekly_cap: Option<u32>,
}

impl Person {
    fn new(name: impl Into<String>, is_fill_in: bool) -> Self {
        Self {
            name: name.into(),
            is_fill_in,
            available_shifts: BTreeSet::new(),
            blackout_dates: BTreeSet::new(),
            weekly_cap: None,
        }
    }

    /// Creates a regular staff member.
    pub fn regular(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Creates a fill-in staff member.
    pub fn fill_in(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Restricts this person to a shift (may be called repeatedly).
    pub fn with_available_shift(mut self, key: ShiftKey) -> Self {
        self.available_shifts.insert(key);
        self
    }

    /// Restricts this person to the given shifts.
    pub fn with_available_shifts<I: IntoIterator<Item = ShiftKey>>(mut self, keys: I) -> Self {
        self.available_shifts.extend(keys);
        self
    }

    /// Adds a blackout date.
    pub fn with_blackout(mut self, date: NaiveDate) -> Self {
        self.blackout_dates.insert(date);
        self
    }

    /// Sets the weekly cap. A cap below 1 means "no cap".
    pub fn with_weekly_cap(mut self, cap: u32) -> Self {
        self.weekly_cap = Some(cap).filter(|&c| c >= 1);
        self
    }

    /// Whether the person may take `key`.
    pub fn is_available_for(&self, key: &ShiftKey) -> bool {
        self.available_shifts.is_empty() || self.available_shifts.contains(key)
    }

    /// Whether `date` is a blackout date.
    pub fn is_blacked_out(&self, date: NaiveDate) -> bool {
        self.blackout_dates.contains(&date)
    }

    /// The cap in force, with values below 1 treated as unlimited.
    pub fn effective_weekly_cap(&self) -> Option<u32> {
        self.weekly_cap.filter(|&c| c >= 1)
    }
}

/// Reads a free-text weekly cap.
///
/// Anything that is not a whole number of at least 1 (blank, text,
/// zero, negative) means "no cap" rather than an error.
///
/// ```
/// use shift_roster::models::parse_weekly_cap;
///
/// assert_eq!(parse_weekly_cap("3"), Some(3));
/// assert_eq!(parse_weekly_cap(""), None);
/// assert_eq!(parse_weekly_cap("0"), None);
/// assert_eq!(parse_weekly_cap("three"), None);
/// ```
pub fn parse_weekly_cap(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|&c| c >= 1)
}
