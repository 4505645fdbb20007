//! Greedy roster allocation and statistics.
//!
//! # Algorithm
//!
//! `RosterScheduler` runs two greedy passes over the planning period:
//! regular staff first (working catalog, longest shift first), then
//! fill-in staff against the fixed catalog. Coverage is overlap-aware:
//! a person whose shifts leave less than three hours of a target shift
//! unaddressed counts toward it. Not optimal; no search or backtracking.
//!
//! # Statistics
//!
//! `aggregate` and `RosterKpi` derive per-person workload and fill rate
//! from a finished result.

mod backfill;
mod coverage;
mod engine;
mod ledger;
mod primary;
mod stats;

pub use coverage::{covered_count, UNCOVERED_THRESHOLD_MINUTES};
pub use engine::{RosterScheduler, ScheduleRequest};
pub use stats::{aggregate, RosterKpi, StaffStats};
