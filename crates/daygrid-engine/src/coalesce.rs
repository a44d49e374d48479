//! Interval coalescing — merge adjacent same-kind intervals into fewer,
//! larger ones without changing what the timeline covers.
//!
//! The merge decision is a pure function of two intervals
//! ([`try_merge`]); [`coalesce`] just folds it over a timeline left to
//! right. Coalescing is idempotent: running it twice gives the same result.

use crate::interval::Interval;

/// Two intervals count as contiguous when the gap (or overlap) between
/// `a.end` and `b.start` is at most this many milliseconds. Guards against
/// sub-minute jitter from upstream timestamp sources.
pub const MERGE_TOLERANCE_MS: i64 = 60_000;

/// Decide whether `b` (the later interval) merges into `a`.
///
/// Merges require the same kind and contiguity within
/// [`MERGE_TOLERANCE_MS`]. The merged interval spans `[a.start, b.end]` —
/// the end is taken from `b` as-is, not re-snapped. Labels combine
/// compatibly: equal labels are kept, an empty/absent one defers to the
/// other, and distinct non-empty titles concatenate as `"{a} + {b}"`.
/// Remaining metadata (id, priority, color) keeps `a`'s values, falling
/// back to `b`'s where `a` has none.
pub fn try_merge(a: &Interval, b: &Interval) -> Option<Interval> {
    if a.kind != b.kind {
        return None;
    }
    if (b.start - a.end).num_milliseconds().abs() > MERGE_TOLERANCE_MS {
        return None;
    }
    Some(Interval {
        id: a.id.clone().or_else(|| b.id.clone()),
        start: a.start,
        end: b.end,
        kind: a.kind,
        label: merge_labels(a.label.as_deref(), b.label.as_deref()),
        priority: a.priority.or(b.priority),
        color: a.color.clone().or_else(|| b.color.clone()),
    })
}

/// Merge adjacent mergeable intervals, scanning left to right with a
/// running accumulator. Idempotent: `coalesce(&coalesce(x)) == coalesce(x)`.
pub fn coalesce(timeline: &[Interval]) -> Vec<Interval> {
    let mut result: Vec<Interval> = Vec::with_capacity(timeline.len());
    for interval in timeline {
        if let Some(last) = result.last_mut() {
            if let Some(merged) = try_merge(last, interval) {
                *last = merged;
                continue;
            }
        }
        result.push(interval.clone());
    }
    result
}

fn merge_labels(a: Option<&str>, b: Option<&str>) -> Option<String> {
    match (a, b) {
        (None, None) => None,
        (Some(a), None) => Some(a.to_string()),
        (None, Some(b)) => Some(b.to_string()),
        (Some(a), Some(b)) if a == b => Some(a.to_string()),
        (Some(a), Some(b)) if a.is_empty() => Some(b.to_string()),
        (Some(a), Some(b)) if b.is_empty() => Some(a.to_string()),
        (Some(a), Some(b)) => Some(format!("{} + {}", a, b)),
    }
}
