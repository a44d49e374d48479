//! # daygrid-engine
//!
//! Deterministic availability computation for weekly schedules. Recurring
//! schedule blocks ("work, 09:00–17:00, Mon–Fri") are expanded into dated
//! occurrences, merged with externally-sourced busy events, and flattened
//! into a gap-free timeline where every minute of the requested window is
//! available, busy, or scheduled.
//!
//! The engine is synchronous and pure: no clock reads, no I/O, identical
//! inputs give byte-identical output. Collaborators (persistence, the
//! calendar provider, rendering) hand data in and take timelines out.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daygrid_engine::{
//!     compute_availability, AvailabilityConfig, BlockKind, IntervalKind, Priority,
//!     ScheduleBlock,
//! };
//!
//! let work = ScheduleBlock {
//!     id: "blk-1".into(),
//!     title: "Work".into(),
//!     kind: BlockKind::Work,
//!     start_time: "09:00".into(),
//!     end_time: "17:00".into(),
//!     days_of_week: [1, 2, 3, 4, 5].into_iter().collect(), // Mon-Fri
//!     is_active: true,
//!     priority: Priority::High,
//!     color: "#2563EB".into(),
//!     buffer_before_minutes: 0,
//!     buffer_after_minutes: 0,
//! };
//!
//! let monday = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
//! let timeline = compute_availability(monday, &[work], &[], &AvailabilityConfig::default());
//!
//! assert_eq!(timeline.len(), 3);
//! assert_eq!(timeline[0].kind, IntervalKind::Available); // 00:00-09:00
//! assert_eq!(timeline[1].label.as_deref(), Some("Work")); // 09:00-17:00
//! assert_eq!(timeline[2].kind, IntervalKind::Available); // 17:00-24:00
//! ```
//!
//! ## Modules
//!
//! - [`interval`] — the tagged half-open interval everything else shares
//! - [`block`] — schedule-block definitions and `HH:MM` parsing
//! - [`event`] — external busy events and their normalization
//! - [`expander`] — weekly block → dated occurrences (overnight, buffers)
//! - [`timeline`] — cursor sweep producing the gap-free timeline
//! - [`coalesce`] — adjacent same-kind interval merging
//! - [`stats`] — counts, percentages, filter-by-kind
//! - [`availability`] — the composed per-day / per-range entry points
//! - [`error`] — error types

pub mod availability;
pub mod block;
pub mod coalesce;
pub mod error;
pub mod event;
pub mod expander;
pub mod interval;
pub mod stats;
pub mod timeline;

pub use availability::{compute_availability, compute_availability_range, AvailabilityConfig};
pub use block::{parse_time_of_day, BlockKind, Priority, ScheduleBlock};
pub use coalesce::{coalesce, try_merge};
pub use error::EngineError;
pub use event::{normalize_events, ExternalEvent};
pub use expander::{expand_block, expand_blocks};
pub use interval::{Interval, IntervalKind};
pub use stats::{filter_by_kind, timeline_stats, TimelineStats};
pub use timeline::build_timeline;
