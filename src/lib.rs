//! Staff shift rostering.
//!
//! Assigns people to recurring shifts over a date range. Regular staff are
//! placed first under availability, blackout, weekly-cap and
//! one-shift-per-day constraints; fill-in staff then cover whatever demand
//! remains, against the shift set fixed at session start.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ShiftKey`, `ShiftCatalog`, `Person`,
//!   `DateRange`, `ScheduleResult`
//! - **`session`**: Working and fixed catalogs for one session
//! - **`scheduler`**: Coverage calculation, the two-phase allocator, statistics
//! - **`validation`**: Roster integrity checks (names, availability references)
//! - **`report`**: Plain-text schedule grid and statistics table
//! - **`plan`**: JSON plan files for the CLI
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use shift_roster::models::{DateRange, Person};
//! use shift_roster::scheduler::{aggregate, RosterScheduler};
//! use shift_roster::Session;
//!
//! let scheduler = RosterScheduler::new(Session::default());
//! let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
//! let roster = vec![
//!     Person::regular("Ann").with_weekly_cap(5),
//!     Person::regular("Ben"),
//!     Person::fill_in("Cas"),
//! ];
//!
//! let result = scheduler.schedule(&roster, DateRange::new(start, end).unwrap()).unwrap();
//! let stats = aggregate(&result);
//! assert_eq!(stats.len(), 3);
//! assert_eq!(stats[0].assignment_count, 5);
//! ```

pub mod error;
pub mod models;
pub mod plan;
pub mod report;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use error::ConfigError;
pub use session::Session;
