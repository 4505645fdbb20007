//! Rostering domain models.
//!
//! Provides the core data types for describing a rostering problem
//! (shifts, catalogs, staff, planning period) and its solution.
//!
//! # Domain Mappings
//!
//! | shift-roster | Retail | Clinic | Library |
//! |--------------|--------|--------|---------|
//! | ShiftKey | Till shift | Reception slot | Desk shift |
//! | Person (regular) | Staff member | Nurse | Librarian |
//! | Person (fill-in) | Temp | Locum | Volunteer |
//! | ScheduleResult | Weekly rota | Duty roster | Desk rota |

mod catalog;
mod period;
mod person;
mod schedule;
mod shift;

pub use catalog::ShiftCatalog;
pub use period::{iso_week_of, DateRange, IsoWeekKey};
pub use person::{parse_weekly_cap, Person};
pub use schedule::{Assignment, DemandStatus, Phase, PersonSchedule, ScheduleResult};
pub use shift::{
    join_shifts, split_shifts, ShiftDefinition, ShiftKey, CLOSING_MINUTE, OPENING_MINUTE,
    SHIFT_SEPARATOR,
};
