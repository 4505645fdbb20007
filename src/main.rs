//! shift-roster CLI.
//!
//! Reads a JSON plan, runs the two-phase allocation and prints the
//! schedule grid and per-person statistics.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shift_roster::models::ScheduleResult;
use shift_roster::plan::PlanFile;
use shift_roster::report::{date_label, CatalogTable, ScheduleGrid, StatsTable};
use shift_roster::scheduler::{RosterKpi, RosterScheduler};

#[derive(Parser)]
#[command(name = "shift-roster")]
#[command(about = "Assign staff to shifts over a date range")]
struct Cli {
    /// Plan file (JSON)
    plan: PathBuf,

    /// Print the result as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Also write the JSON result to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    result: &'a ScheduleResult,
    stats: RosterKpi,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let text = fs::read_to_string(&cli.plan)
        .with_context(|| format!("reading plan {}", cli.plan.display()))?;
    let plan = PlanFile::from_json(&text)
        .with_context(|| format!("parsing plan {}", cli.plan.display()))?;

    let (session, request) = plan.into_parts()?;
    let catalog = CatalogTable::build(&session);
    let scheduler = RosterScheduler::new(session);
    let result = scheduler.schedule_request(&request)?;
    let stats = RosterKpi::calculate(&result);

    let output = RunOutput {
        result: &result,
        stats: stats.clone(),
    };
    if let Some(path) = &cli.output {
        fs::write(path, serde_json::to_string_pretty(&output)?)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "result written");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("=== Shifts ===");
    println!("{catalog}");
    println!(
        "=== Schedule {} .. {} ===",
        date_label(result.date_range.start()),
        date_label(result.date_range.end())
    );
    println!("{}", ScheduleGrid::build(&result, &request.roster));
    println!("=== Statistics ===");
    println!("{}", StatsTable(stats.staff.clone()));
    println!(
        "Filled {}/{} slots ({:.1}%)",
        stats.required_slots - stats.unfilled_slots,
        stats.required_slots,
        stats.fill_rate * 100.0
    );

    let shortfalls = result.shortfalls();
    if !shortfalls.is_empty() {
        println!("\nLeft short:");
        for s in shortfalls {
            println!(
                "  {} {}: {} of {} missing",
                date_label(s.date),
                s.shift,
                s.remaining,
                s.required
            );
        }
    }

    Ok(())
}
