//! The half-open time interval that every other module produces or consumes.
//!
//! An [`Interval`] spans `[start, end)`, is tagged with a kind
//! (available/busy/scheduled), and carries optional display metadata (label,
//! priority, color) plus a deterministic id for occurrences. Intervals are
//! immutable once constructed; merging and clipping produce new values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::block::Priority;

/// What an interval represents in the computed timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalKind {
    /// Time not claimed by any schedule block or external event.
    Available,
    /// Time blocked by an external calendar event.
    Busy,
    /// Time claimed by a schedule-block occurrence (including buffers).
    Scheduled,
}

/// A half-open `[start, end)` time interval tagged with a kind.
///
/// `label` is present for busy/scheduled intervals (the event or block
/// title); `priority` and `color` are carried through for scheduled
/// occurrences and are metadata only — no merging or sweep decision reads
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub kind: IntervalKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Interval {
    /// An available gap — no metadata, just the time range.
    pub fn available(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: None,
            start,
            end,
            kind: IntervalKind::Available,
            label: None,
            priority: None,
            color: None,
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Two half-open intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Adjacent intervals (one ends exactly when the other starts) do not.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Clip this interval to `[window_start, window_end)`.
    ///
    /// Returns `None` when the intersection is empty or zero-length — which
    /// also quietly discards zero-duration busy intervals, since they
    /// contribute no blocking window.
    pub fn clip(&self, window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> Option<Interval> {
        let start = self.start.max(window_start);
        let end = self.end.min(window_end);
        if start >= end {
            return None;
        }
        let mut clipped = self.clone();
        clipped.start = start;
        clipped.end = end;
        Some(clipped)
    }
}
