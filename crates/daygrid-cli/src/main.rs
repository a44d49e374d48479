//! `daygrid` CLI — compute availability timelines from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # One day's timeline (defaults to today)
//! daygrid day --date 2026-03-16 --blocks blocks.json --events events.json
//!
//! # A whole week, rendered in a local timezone
//! daygrid range --from 2026-03-16 --to 2026-03-22 --blocks blocks.json \
//!   --timezone Europe/London
//!
//! # Machine-readable output
//! daygrid day --blocks blocks.json --json
//!
//! # Counts and availability percentage
//! daygrid stats --date 2026-03-16 --blocks blocks.json --events events.json
//! ```
//!
//! Schedule blocks and events are JSON files in the same camelCase shapes
//! the daygrid web client stores (`startTime`, `daysOfWeek`, `isAllDay`, ...).

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use daygrid_engine::{
    compute_availability, compute_availability_range, timeline_stats, AvailabilityConfig,
    ExternalEvent, Interval, IntervalKind, ScheduleBlock,
};

#[derive(Parser)]
#[command(
    name = "daygrid",
    version,
    about = "Availability timelines from weekly schedule blocks + calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with schedule-block definitions
    #[arg(long)]
    blocks: String,

    /// JSON file with external busy events
    #[arg(long)]
    events: Option<String>,

    /// Ignore previous-day occurrences/events spilling into the window
    #[arg(long)]
    no_lookback: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// IANA timezone for display (e.g. "Europe/London"); display only,
    /// computation stays in the reporting timezone
    #[arg(long)]
    timezone: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one day's availability timeline
    Day {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Compute availability for an inclusive date range
    Range {
        /// First day as YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last day as YYYY-MM-DD (inclusive)
        #[arg(long)]
        to: String,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show interval counts and the availability percentage for one day
    Stats {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Day { date, input } => {
            let day = parse_date_or_today(date.as_deref())?;
            let (blocks, events) = load_inputs(&input)?;
            let timeline = compute_availability(day, &blocks, &events, &config_for(&input));
            print_timeline(&timeline, &input)
        }
        Commands::Range { from, to, input } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;
            let (blocks, events) = load_inputs(&input)?;
            let timeline =
                compute_availability_range(from, to, &blocks, &events, &config_for(&input));
            print_timeline(&timeline, &input)
        }
        Commands::Stats { date, input } => {
            let day = parse_date_or_today(date.as_deref())?;
            let (blocks, events) = load_inputs(&input)?;
            let timeline = compute_availability(day, &blocks, &events, &config_for(&input));
            let stats = timeline_stats(&timeline);
            if input.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Intervals:     {}", stats.total);
                println!("Available:     {}", stats.available);
                println!("Busy:          {}", stats.busy);
                println!("Scheduled:     {}", stats.scheduled);
                println!("Availability:  {:.2}%", stats.availability_percentage);
            }
            Ok(())
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", s))
}

/// The engine never reads a clock; "today" is resolved here, at the caller.
fn parse_date_or_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(Utc::now().date_naive()),
    }
}

fn config_for(input: &InputArgs) -> AvailabilityConfig {
    AvailabilityConfig {
        include_overnight_lookback: !input.no_lookback,
    }
}

fn load_inputs(input: &InputArgs) -> Result<(Vec<ScheduleBlock>, Vec<ExternalEvent>)> {
    let blocks: Vec<ScheduleBlock> = read_json(&input.blocks)?;

    // The engine skips bad definitions on its own; surfacing them here keeps
    // a typo'd "25:00" from silently disappearing from the timeline.
    for block in &blocks {
        if let Err(err) = block.validate() {
            tracing::warn!(block = %block.id, %err, "schedule block will be skipped");
        }
    }

    let events: Vec<ExternalEvent> = match &input.events {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    Ok((blocks, events))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse JSON in {}", path))
}

fn print_timeline(timeline: &[Interval], input: &InputArgs) -> Result<()> {
    if input.json {
        println!("{}", serde_json::to_string_pretty(timeline)?);
        return Ok(());
    }

    let tz = match &input.timezone {
        Some(name) => Some(
            name.parse::<Tz>()
                .map_err(|e| anyhow::anyhow!("Invalid timezone '{}': {}", name, e))?,
        ),
        None => None,
    };

    for interval in timeline {
        println!(
            "{} - {}  {:<9}  {}",
            format_instant(interval.start, tz),
            format_instant(interval.end, tz),
            kind_label(interval.kind),
            interval.label.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn format_instant(instant: DateTime<Utc>, tz: Option<Tz>) -> String {
    match tz {
        Some(tz) => instant
            .with_timezone(&tz)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => instant.format("%Y-%m-%d %H:%M").to_string(),
    }
}

fn kind_label(kind: IntervalKind) -> &'static str {
    match kind {
        IntervalKind::Available => "available",
        IntervalKind::Busy => "busy",
        IntervalKind::Scheduled => "scheduled",
    }
}
