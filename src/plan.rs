//! JSON plan files.
//!
//! A plan describes one run: the period, the roster, and optionally the
//! catalog. Without `base_shifts` the session starts from the standard
//! four-shift day; `extra_shifts` are added to the working catalog only,
//! so backfill keeps targeting the base catalog.
//!
//! ```json
//! {
//!   "start": "2025-03-03",
//!   "end": "2025-03-09",
//!   "extra_shifts": [{ "shift": "12:00-14:00", "required": 1 }],
//!   "staff": [
//!     { "name": "Ann", "available": ["08:00-11:00"], "weekly_cap": "3" },
//!     { "name": "Bo", "fill_in": true }
//!   ]
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{parse_weekly_cap, DateRange, Person, ShiftCatalog, ShiftKey};
use crate::scheduler::ScheduleRequest;
use crate::session::Session;

/// A catalog entry in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    pub shift: ShiftKey,
    pub required: u32,
}

/// A weekly cap as typed by a user: a number, free text, or anything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapInput {
    Number(i64),
    Text(String),
    /// Fractions, booleans, arrays and the like; never a cap.
    Other(serde_json::Value),
}

impl CapInput {
    /// The cap in force; anything other than a whole number >= 1 means none.
    pub fn normalize(&self) -> Option<u32> {
        match self {
            CapInput::Number(n) => u32::try_from(*n).ok().filter(|&c| c >= 1),
            CapInput::Text(s) => parse_weekly_cap(s),
            CapInput::Other(_) => None,
        }
    }
}

/// A roster entry in a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffEntry {
    pub name: String,
    #[serde(default)]
    pub fill_in: bool,
    #[serde(default)]
    pub available: Vec<ShiftKey>,
    #[serde(default)]
    pub blackout: Vec<NaiveDate>,
    #[serde(default)]
    pub weekly_cap: Option<CapInput>,
}

impl StaffEntry {
    /// Converts to a roster member.
    pub fn to_person(&self) -> Person {
        let mut person = if self.fill_in {
            Person::fill_in(self.name.trim())
        } else {
            Person::regular(self.name.trim())
        };
        person = person.with_available_shifts(self.available.iter().copied());
        person.blackout_dates.extend(self.blackout.iter().copied());
        person.weekly_cap = self.weekly_cap.as_ref().and_then(CapInput::normalize);
        person
    }
}

/// A complete run description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Catalog the session starts from (and the fixed snapshot).
    #[serde(default)]
    pub base_shifts: Option<Vec<ShiftEntry>>,
    /// Shifts added to the working catalog after the session starts.
    #[serde(default)]
    pub extra_shifts: Vec<ShiftEntry>,
    pub staff: Vec<StaffEntry>,
}

impl PlanFile {
    /// Parses a plan from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Builds the session and request this plan describes.
    ///
    /// # Errors
    /// Any configuration error in the period or the catalog. Roster
    /// problems surface when the request is scheduled.
    pub fn into_parts(self) -> Result<(Session, ScheduleRequest), ConfigError> {
        let date_range = DateRange::new(self.start, self.end)?;

        let base = match &self.base_shifts {
            Some(entries) => {
                ShiftCatalog::from_entries(entries.iter().map(|e| (e.shift, e.required)))?
            }
            None => ShiftCatalog::standard(),
        };
        let mut session = Session::new(base);
        for entry in &self.extra_shifts {
            session.add_shift(entry.shift, entry.required)?;
        }

        let roster = self.staff.iter().map(StaffEntry::to_person).collect();
        Ok((session, ScheduleRequest::new(date_range, roster)))
    }
}
