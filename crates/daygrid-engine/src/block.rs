//! Schedule-block definitions — the recurring weekly commitments a user
//! declares (work, sleep, exercise, ...).
//!
//! A block stores its start/end as `"HH:MM"` wall-clock strings and the set
//! of weekdays its *start* falls on (0 = Sunday). The strings are kept raw
//! so that a malformed value is a skip-and-log decision at expansion time,
//! never a deserialization failure — persistence hands us whatever the user
//! saved.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Category of a schedule block. Metadata only — expansion and merging never
/// branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Work,
    Sleep,
    Personal,
    Travel,
    Meal,
    Exercise,
    Family,
    Study,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A recurring weekly commitment.
///
/// If `end_time <= start_time` the block is an overnight block: each
/// occurrence ends on the following calendar day ("23:00"–"07:00", or
/// "00:00"–"00:00" for a full 24 hours).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    pub id: String,
    pub title: String,
    pub kind: BlockKind,
    /// Wall-clock start, `"HH:MM"` in the reporting timezone.
    pub start_time: String,
    /// Wall-clock end, `"HH:MM"`. Less than or equal to `start_time` means
    /// the occurrence wraps past midnight.
    pub end_time: String,
    /// Weekdays the block's start occurs on: 0 = Sunday .. 6 = Saturday.
    pub days_of_week: BTreeSet<u8>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub priority: Priority,
    /// Hex `#RRGGBB`, carried through to scheduled intervals for rendering.
    pub color: String,
    #[serde(default)]
    pub buffer_before_minutes: u32,
    #[serde(default)]
    pub buffer_after_minutes: u32,
}

fn default_active() -> bool {
    true
}

impl ScheduleBlock {
    /// Check that both times parse and every weekday entry is in range.
    ///
    /// The expander never needs this — it skips and logs on its own — but
    /// callers that want to surface bad definitions (a CLI, a request
    /// validation layer) get a typed error here.
    pub fn validate(&self) -> Result<()> {
        parse_time_of_day(&self.start_time)?;
        parse_time_of_day(&self.end_time)?;
        if let Some(&day) = self.days_of_week.iter().find(|&&d| d > 6) {
            return Err(EngineError::InvalidWeekday(day));
        }
        Ok(())
    }
}

/// Parse an `"HH:MM"` wall-clock string into a [`NaiveTime`].
///
/// # Errors
/// Returns [`EngineError::InvalidTimeOfDay`] when the string is not a valid
/// 24-hour `HH:MM` time (hour 24, minute 60, trailing garbage, ...).
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| EngineError::InvalidTimeOfDay(s.to_string()))
}

/// The 0 = Sunday .. 6 = Saturday index of a calendar day, matching the
/// convention of [`ScheduleBlock::days_of_week`].
pub fn weekday_index(day: NaiveDate) -> u8 {
    use chrono::Datelike;
    day.weekday().num_days_from_sunday() as u8
}
