//! Timeline construction — the cursor sweep that turns a bag of scheduled
//! and busy intervals into a gap-free covering of a window.
//!
//! Every minute of `[window_start, window_end)` ends up covered: the input
//! intervals are re-emitted (clipped to the window) and the stretches
//! nothing claims become `available` gaps.

use chrono::{DateTime, Utc};

use crate::interval::Interval;

/// Build the gap-free timeline for `[window_start, window_end)` from the
/// concatenated scheduled + busy intervals.
///
/// The sweep sorts the inputs by start (stable, so ties keep input order),
/// walks them with a cursor, and emits an `available` gap whenever the next
/// interval starts past the cursor. Inputs are clipped to the window;
/// anything left zero-length is dropped.
///
/// When two non-available intervals overlap, BOTH are emitted in full, in
/// sweep order — there is no deduplication or priority resolution. The
/// cursor (not disjointness between emitted entries) is what keeps available
/// gaps from reappearing underneath an overlap. Downstream consumers treat
/// the co-emitted entries as conflict information; resolving them here would
/// change the product's behavior.
pub fn build_timeline(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    intervals: &[Interval],
) -> Vec<Interval> {
    if window_start >= window_end {
        return Vec::new();
    }

    let mut sorted: Vec<&Interval> = intervals.iter().collect();
    sorted.sort_by_key(|iv| iv.start);

    let mut timeline = Vec::new();
    let mut cursor = window_start;

    for interval in sorted {
        let clipped = match interval.clip(window_start, window_end) {
            Some(clipped) => clipped,
            None => continue,
        };
        if clipped.start > cursor {
            timeline.push(Interval::available(cursor, clipped.start));
        }
        cursor = cursor.max(clipped.end);
        timeline.push(clipped);
    }

    if cursor < window_end {
        timeline.push(Interval::available(cursor, window_end));
    }

    timeline
}
