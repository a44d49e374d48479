//! Benchmarks for the availability pipeline: a realistic week of schedule
//! blocks plus a busy external calendar.

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use daygrid_engine::{
    build_timeline, coalesce, compute_availability_range, AvailabilityConfig, BlockKind,
    ExternalEvent, Interval, IntervalKind, Priority, ScheduleBlock,
};

fn sample_blocks() -> Vec<ScheduleBlock> {
    let block = |id: &str, title: &str, kind, start: &str, end: &str, days: &[u8]| ScheduleBlock {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        start_time: start.to_string(),
        end_time: end.to_string(),
        days_of_week: days.iter().copied().collect(),
        is_active: true,
        priority: Priority::Medium,
        color: "#2563EB".to_string(),
        buffer_before_minutes: 10,
        buffer_after_minutes: 10,
    };

    vec![
        block("work", "Work", BlockKind::Work, "09:00", "17:00", &[1, 2, 3, 4, 5]),
        block("sleep", "Sleep", BlockKind::Sleep, "23:00", "07:00", &[0, 1, 2, 3, 4, 5, 6]),
        block("gym", "Gym", BlockKind::Exercise, "18:00", "19:00", &[1, 3, 5]),
        block("lunch", "Lunch", BlockKind::Meal, "12:00", "12:45", &[1, 2, 3, 4, 5]),
    ]
}

fn sample_events() -> Vec<ExternalEvent> {
    // A meeting-heavy week: four meetings a day, Mon-Fri.
    let mut events = Vec::new();
    for day in 16..21 {
        for slot in 0..4 {
            let start = Utc
                .with_ymd_and_hms(2026, 3, day, 9 + slot * 2, 30, 0)
                .unwrap();
            events.push(ExternalEvent {
                id: format!("ev-{}-{}", day, slot),
                title: "Meeting".to_string(),
                start: Some(start),
                end: Some(start + chrono::Duration::minutes(45)),
                is_all_day: false,
            });
        }
    }
    events
}

fn bench_week_availability(c: &mut Criterion) {
    let blocks = sample_blocks();
    let events = sample_events();
    let monday = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
    let sunday = NaiveDate::from_ymd_opt(2026, 3, 22).unwrap();
    let config = AvailabilityConfig::default();

    c.bench_function("compute_availability_range/week", |b| {
        b.iter(|| compute_availability_range(monday, sunday, &blocks, &events, &config))
    });
}

fn bench_build_and_coalesce(c: &mut Criterion) {
    // 200 scattered busy intervals in one day.
    let ws = Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap();
    let we = ws + chrono::Duration::days(1);
    let intervals: Vec<Interval> = (0..200)
        .map(|i| {
            let start = ws + chrono::Duration::minutes(i * 7);
            Interval {
                id: None,
                start,
                end: start + chrono::Duration::minutes(15),
                kind: IntervalKind::Busy,
                label: None,
                priority: None,
                color: None,
            }
        })
        .collect();

    c.bench_function("build_timeline+coalesce/200", |b| {
        b.iter(|| coalesce(&build_timeline(ws, we, &intervals)))
    });
}

criterion_group!(benches, bench_week_availability, bench_build_and_coalesce);
criterion_main!(benches);
