//! Roster statistics.
//!
//! Per-person workload plus run-level coverage figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Assignment count | Placements per person, both phases |
//! | Total hours | Sum of placed shift durations per person |
//! | Required slots | Sum of headcounts over every date/shift |
//! | Unfilled slots | Sum of remaining demand after both phases |
//! | Fill rate | `1 - unfilled / required` |

use serde::{Deserialize, Serialize};

use crate::models::ScheduleResult;

/// Workload of one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffStats {
    pub name: String,
    /// Placements across both phases (not merged display days).
    pub assignment_count: usize,
    /// Sum of placed shift durations.
    pub total_hours: f64,
}

/// Per-person workload in roster order.
///
/// Hours are summed from each placed shift, so a day shown as
/// `08:00-11:00/16:30-18:30` contributes both durations.
pub fn aggregate(result: &ScheduleResult) -> Vec<StaffStats> {
    result
        .roster
        .iter()
        .map(|name| {
            let (assignment_count, total_hours) = result
                .person(name)
                .map(|p| (p.assignment_count, p.total_hours()))
                .unwrap_or((0, 0.0));
            StaffStats {
                name: name.clone(),
                assignment_count,
                total_hours,
            }
        })
        .collect()
}

/// Run-level summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterKpi {
    /// Per-person workload in roster order.
    pub staff: Vec<StaffStats>,
    /// All placements.
    pub total_assignments: usize,
    /// All scheduled hours.
    pub total_hours: f64,
    /// Headcount asked for across every date/shift.
    pub required_slots: u32,
    /// Headcount still missing after both phases.
    pub unfilled_slots: u32,
    /// Fraction of required headcount met (1.0 when nothing was required).
    pub fill_rate: f64,
}

impl RosterKpi {
    /// Computes the summary for a result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let staff = aggregate(result);
        let total_assignments = staff.iter().map(|s| s.assignment_count).sum();
        let total_hours = staff.iter().map(|s| s.total_hours).sum();
        let required_slots: u32 = result.demand.iter().map(|d| d.required).sum();
        let unfilled_slots: u32 = result.demand.iter().map(|d| d.remaining).sum();

        let fill_rate = if required_slots == 0 {
            1.0
        } else {
            1.0 - f64::from(unfilled_slots) / f64::from(required_slots)
        };

        Self {
            staff,
            total_assignments,
            total_hours,
            required_slots,
            unfilled_slots,
            fill_rate,
        }
    }

    /// Workload for one person.
    pub fn for_person(&self, name: &str) -> Option<&StaffStats> {
        self.staff.iter().find(|s| s.name == name)
    }
}
