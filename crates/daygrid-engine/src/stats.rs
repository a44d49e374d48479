//! Read-only derived views over a computed timeline.

use serde::Serialize;

use crate::interval::{Interval, IntervalKind};

/// Interval counts by kind, plus the share of intervals that are available.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStats {
    pub total: usize,
    pub available: usize,
    pub busy: usize,
    pub scheduled: usize,
    /// `available / total * 100`, rounded to two decimals; `0` for an empty
    /// timeline.
    pub availability_percentage: f64,
}

pub fn timeline_stats(timeline: &[Interval]) -> TimelineStats {
    let mut available = 0;
    let mut busy = 0;
    let mut scheduled = 0;
    for interval in timeline {
        match interval.kind {
            IntervalKind::Available => available += 1,
            IntervalKind::Busy => busy += 1,
            IntervalKind::Scheduled => scheduled += 1,
        }
    }
    let total = timeline.len();
    let availability_percentage = if total == 0 {
        0.0
    } else {
        round2(available as f64 / total as f64 * 100.0)
    };
    TimelineStats {
        total,
        available,
        busy,
        scheduled,
        availability_percentage,
    }
}

pub fn filter_by_kind(timeline: &[Interval], kind: IntervalKind) -> Vec<Interval> {
    timeline
        .iter()
        .filter(|interval| interval.kind == kind)
        .cloned()
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
