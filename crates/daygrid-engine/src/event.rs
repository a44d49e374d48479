//! External busy-event normalization.
//!
//! Converts heterogeneous calendar-provider records into the common
//! [`Interval`] model, filtered to the events that can affect a window —
//! including a one-day lookback so that yesterday's overnight events still
//! block this morning.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::{Interval, IntervalKind};

/// One busy entry fetched from the external calendar provider.
///
/// `start` is optional because providers occasionally deliver malformed
/// records; an event without a start is dropped during normalization rather
/// than failing the whole computation. A missing `end` defaults to `start`
/// (zero duration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_all_day: bool,
}

/// Convert external events into busy [`Interval`]s relevant to a window.
///
/// Filters to timed events (`is_all_day == false`) whose `[start, end)`
/// range overlaps `[search_start, window_end)`, where `search_start` is one
/// day before `window_start` when `include_lookback` is set. Events with no
/// start are dropped with a diagnostic; a missing end yields a zero-width
/// interval, which is permitted here — the timeline builder discards
/// zero-duration busy intervals since they contribute no blocking window.
pub fn normalize_events(
    events: &[ExternalEvent],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    include_lookback: bool,
) -> Vec<Interval> {
    let search_start = if include_lookback {
        window_start - Duration::days(1)
    } else {
        window_start
    };

    let mut intervals = Vec::new();
    for event in events {
        if event.is_all_day {
            continue;
        }
        let start = match event.start {
            Some(start) => start,
            None => {
                tracing::debug!(event = %event.id, "dropping external event with no start");
                continue;
            }
        };
        let mut end = event.end.unwrap_or(start);
        if end < start {
            tracing::debug!(event = %event.id, "clamping external event with end before start");
            end = start;
        }
        // Half-open overlap with the (lookback-extended) search window.
        if start >= window_end || end <= search_start {
            continue;
        }
        intervals.push(Interval {
            id: Some(event.id.clone()),
            start,
            end,
            kind: IntervalKind::Busy,
            label: (!event.title.is_empty()).then(|| event.title.clone()),
            priority: None,
            color: None,
        });
    }
    intervals
}
