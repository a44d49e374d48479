//! Tests for the JSON boundary shapes — the camelCase wire format that
//! persistence and the calendar provider deliver, and that rendering
//! consumes.

use chrono::{TimeZone, Utc};
use daygrid_engine::{
    BlockKind, ExternalEvent, Interval, IntervalKind, Priority, ScheduleBlock, TimelineStats,
};

// ── Schedule blocks ─────────────────────────────────────────────────────────

#[test]
fn schedule_block_parses_the_stored_camel_case_shape() {
    let json = r##"{
        "id": "blk-1",
        "title": "Work",
        "kind": "work",
        "startTime": "09:00",
        "endTime": "17:00",
        "daysOfWeek": [1, 2, 3, 4, 5],
        "isActive": true,
        "priority": "high",
        "color": "#2563EB",
        "bufferBeforeMinutes": 15,
        "bufferAfterMinutes": 10
    }"##;

    let block: ScheduleBlock = serde_json::from_str(json).expect("block JSON should parse");

    assert_eq!(block.kind, BlockKind::Work);
    assert_eq!(block.priority, Priority::High);
    assert_eq!(block.start_time, "09:00");
    assert!(block.days_of_week.contains(&5));
    assert_eq!(block.buffer_before_minutes, 15);
}

#[test]
fn omitted_block_fields_get_defaults() {
    // isActive and the buffers are optional in stored records.
    let json = r##"{
        "id": "blk-2",
        "title": "Sleep",
        "kind": "sleep",
        "startTime": "23:00",
        "endTime": "07:00",
        "daysOfWeek": [0, 6],
        "priority": "low",
        "color": "#64748B"
    }"##;

    let block: ScheduleBlock = serde_json::from_str(json).expect("block JSON should parse");

    assert!(block.is_active, "isActive defaults to true");
    assert_eq!(block.buffer_before_minutes, 0);
    assert_eq!(block.buffer_after_minutes, 0);
}

// ── External events ─────────────────────────────────────────────────────────

#[test]
fn external_event_parses_rfc3339_timestamps() {
    let json = r#"{
        "id": "ev-1",
        "title": "Team sync",
        "start": "2026-03-16T10:00:00Z",
        "end": "2026-03-16T11:00:00Z",
        "isAllDay": false
    }"#;

    let event: ExternalEvent = serde_json::from_str(json).expect("event JSON should parse");

    assert_eq!(
        event.start,
        Some(Utc.with_ymd_and_hms(2026, 3, 16, 10, 0, 0).unwrap())
    );
    assert!(!event.is_all_day);
}

#[test]
fn event_without_end_or_all_day_flag_still_parses() {
    let json = r#"{"id": "ev-2", "title": "Ping", "start": "2026-03-16T12:00:00Z"}"#;

    let event: ExternalEvent = serde_json::from_str(json).expect("event JSON should parse");
    assert!(event.end.is_none());
    assert!(!event.is_all_day);
}

// ── Intervals ───────────────────────────────────────────────────────────────

#[test]
fn intervals_serialize_camel_case_and_skip_absent_metadata() {
    let available = Interval::available(
        Utc.with_ymd_and_hms(2026, 3, 16, 8, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap(),
    );

    let json = serde_json::to_value(&available).expect("interval should serialize");

    assert_eq!(json["kind"], "available");
    assert!(json.get("label").is_none(), "absent metadata is omitted");
    assert!(json.get("priority").is_none());
}

#[test]
fn interval_roundtrips_through_json() {
    let interval = Interval {
        id: Some("blk-1-2026-03-16".to_string()),
        start: Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 3, 16, 17, 0, 0).unwrap(),
        kind: IntervalKind::Scheduled,
        label: Some("Work".to_string()),
        priority: Some(Priority::High),
        color: Some("#2563EB".to_string()),
    };

    let json = serde_json::to_string(&interval).expect("interval should serialize");
    let back: Interval = serde_json::from_str(&json).expect("interval should parse back");
    assert_eq!(back, interval);
}

// ── Stats ───────────────────────────────────────────────────────────────────

#[test]
fn stats_serialize_with_camel_case_percentage() {
    let stats = TimelineStats {
        total: 4,
        available: 2,
        busy: 1,
        scheduled: 1,
        availability_percentage: 50.0,
    };

    let json = serde_json::to_value(&stats).expect("stats should serialize");
    assert_eq!(json["availabilityPercentage"], 50.0);
    assert_eq!(json["total"], 4);
}
