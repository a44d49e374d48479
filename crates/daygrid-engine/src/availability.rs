//! The availability pipeline — schedule blocks + external events in, a
//! coalesced day timeline out.
//!
//! This module is the engine's public entry point: it composes the
//! occurrence expander, the event normalizer, the timeline builder, and the
//! coalescer for one day or a range of days. Everything here is synchronous
//! and pure over its inputs; any I/O (fetching events, loading block
//! definitions) happened before these functions were called.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::block::ScheduleBlock;
use crate::coalesce::coalesce;
use crate::event::{normalize_events, ExternalEvent};
use crate::expander::expand_blocks;
use crate::interval::Interval;
use crate::timeline::build_timeline;

/// Knobs recognized by the availability computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityConfig {
    /// Whether previous-day occurrences and events are considered for
    /// overlap into the window — an overnight block that started yesterday
    /// at 23:00 still occupies this morning. On by default.
    pub include_overnight_lookback: bool,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            include_overnight_lookback: true,
        }
    }
}

/// Compute the coalesced availability timeline for one calendar day.
///
/// The window is `[day 00:00, next day 00:00)` in the reporting timezone.
/// Schedule blocks are expanded over the day itself — and the previous day
/// too when lookback is on, so overnight occurrences spill in correctly —
/// then merged with the normalized external events into a gap-free,
/// coalesced timeline.
pub fn compute_availability(
    day: NaiveDate,
    blocks: &[ScheduleBlock],
    events: &[ExternalEvent],
    config: &AvailabilityConfig,
) -> Vec<Interval> {
    let window_start = day.and_time(NaiveTime::MIN).and_utc();
    let window_end = window_start + Duration::days(1);

    let expand_start = if config.include_overnight_lookback {
        day.pred_opt().unwrap_or(day)
    } else {
        day
    };

    let mut intervals = expand_blocks(blocks, expand_start, day);
    intervals.extend(normalize_events(
        events,
        window_start,
        window_end,
        config.include_overnight_lookback,
    ));

    coalesce(&build_timeline(window_start, window_end, &intervals))
}

/// Compute availability for every day in `[range_start, range_end]`
/// inclusive, concatenated in day order.
///
/// Each day is computed independently with [`compute_availability`]; the
/// result preserves day order, so the output is deterministic. An inverted
/// range (`range_end < range_start`) yields an empty result rather than an
/// error — range validation belongs to the caller's input layer.
pub fn compute_availability_range(
    range_start: NaiveDate,
    range_end: NaiveDate,
    blocks: &[ScheduleBlock],
    events: &[ExternalEvent],
    config: &AvailabilityConfig,
) -> Vec<Interval> {
    if range_end < range_start {
        return Vec::new();
    }

    let mut timeline = Vec::new();
    let mut day = range_start;
    loop {
        timeline.extend(compute_availability(day, blocks, events, config));
        if day >= range_end {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    timeline
}
