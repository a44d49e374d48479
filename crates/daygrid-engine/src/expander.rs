//! Occurrence expansion — turns a weekly-recurring schedule block into
//! concrete dated intervals over a date range.
//!
//! Expansion is a pure function of `(block, range_start, range_end)`: no
//! clock reads, no hidden state. Overnight blocks (`end_time <= start_time`)
//! wrap into the following calendar day, and per-occurrence buffers widen
//! the emitted interval on both sides.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::block::{parse_time_of_day, weekday_index, ScheduleBlock};
use crate::interval::{Interval, IntervalKind};

/// Expand one schedule block into dated occurrences over
/// `[range_start, range_end]` inclusive.
///
/// Inactive blocks expand to nothing. A block whose `start_time` or
/// `end_time` fails to parse as `HH:MM` is skipped with a warning — bad
/// definitions never abort an availability computation. Each occurrence is
/// emitted on the days whose weekday appears in `days_of_week` (the day the
/// block *starts*; an overnight occurrence ends on the next day) and carries
/// the deterministic id `"{block.id}-{YYYY-MM-DD}"`.
pub fn expand_block(
    block: &ScheduleBlock,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<Interval> {
    if !block.is_active {
        return Vec::new();
    }

    let (start_time, end_time) = match parsed_times(block) {
        Some(times) => times,
        None => return Vec::new(),
    };

    if block.days_of_week.iter().any(|&d| d > 6) {
        tracing::warn!(
            block = %block.id,
            "schedule block has out-of-range weekday entries; they will never match"
        );
    }

    let buffer_before = Duration::minutes(i64::from(block.buffer_before_minutes));
    let buffer_after = Duration::minutes(i64::from(block.buffer_after_minutes));

    let mut occurrences = Vec::new();
    let mut day = range_start;
    while day <= range_end {
        if block.days_of_week.contains(&weekday_index(day)) {
            let occ_start = day.and_time(start_time).and_utc();
            let mut occ_end = day.and_time(end_time).and_utc();
            // end <= start is the wraparound trigger, so "00:00"-"00:00" is a
            // full 24-hour occurrence, not a zero-length one.
            if occ_end <= occ_start {
                occ_end += Duration::days(1);
            }
            occurrences.push(Interval {
                id: Some(format!("{}-{}", block.id, day.format("%Y-%m-%d"))),
                start: occ_start - buffer_before,
                end: occ_end + buffer_after,
                kind: IntervalKind::Scheduled,
                label: Some(block.title.clone()),
                priority: Some(block.priority),
                color: Some(block.color.clone()),
            });
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    occurrences
}

/// Expand every block over the range, concatenated in block order.
pub fn expand_blocks(
    blocks: &[ScheduleBlock],
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<Interval> {
    blocks
        .iter()
        .flat_map(|block| expand_block(block, range_start, range_end))
        .collect()
}

fn parsed_times(block: &ScheduleBlock) -> Option<(NaiveTime, NaiveTime)> {
    let start_time = match parse_time_of_day(&block.start_time) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(block = %block.id, %err, "skipping schedule block");
            return None;
        }
    };
    let end_time = match parse_time_of_day(&block.end_time) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(block = %block.id, %err, "skipping schedule block");
            return None;
        }
    };
    Some((start_time, end_time))
}
