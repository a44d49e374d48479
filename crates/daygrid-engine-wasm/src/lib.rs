//! WASM bindings for daygrid-engine.
//!
//! Exposes availability computation and timeline stats to JavaScript via
//! `wasm-bindgen`. All complex types cross the boundary as JSON strings:
//! schedule blocks and external events come in with the same camelCase
//! field names the web client already stores, and timelines go out as
//! arrays of interval objects with RFC 3339 timestamps.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p daygrid-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/daygrid-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/daygrid_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use daygrid_engine::{
    compute_availability, compute_availability_range, timeline_stats, AvailabilityConfig,
    ExternalEvent, Interval, ScheduleBlock,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse the JSON boundary types
// ---------------------------------------------------------------------------

/// Parse a `"YYYY-MM-DD"` date string.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_blocks(json: &str) -> Result<Vec<ScheduleBlock>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid blocks JSON: {}", e)))
}

fn parse_events(json: &str) -> Result<Vec<ExternalEvent>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))
}

fn parse_timeline(json: &str) -> Result<Vec<Interval>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid timeline JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn config_from(include_lookback: Option<bool>) -> AvailabilityConfig {
    AvailabilityConfig {
        include_overnight_lookback: include_lookback.unwrap_or(true),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the coalesced availability timeline for one calendar day.
///
/// # Arguments
/// - `day` -- Date string `"YYYY-MM-DD"`
/// - `blocks_json` -- JSON array of schedule-block objects
/// - `events_json` -- JSON array of external-event objects
/// - `include_lookback` -- Consider previous-day occurrences/events
///   spilling into the window (default true)
///
/// Returns a JSON string containing an array of interval objects.
#[wasm_bindgen(js_name = "computeAvailability")]
pub fn compute_availability_js(
    day: &str,
    blocks_json: &str,
    events_json: &str,
    include_lookback: Option<bool>,
) -> Result<String, JsValue> {
    let day = parse_date(day)?;
    let blocks = parse_blocks(blocks_json)?;
    let events = parse_events(events_json)?;

    let timeline = compute_availability(day, &blocks, &events, &config_from(include_lookback));
    to_json(&timeline)
}

/// Compute availability for every day in `[range_start, range_end]`
/// inclusive, concatenated in day order.
///
/// Arguments mirror [`compute_availability_js`] with two `"YYYY-MM-DD"`
/// endpoints. An inverted range yields an empty array.
#[wasm_bindgen(js_name = "computeAvailabilityRange")]
pub fn compute_availability_range_js(
    range_start: &str,
    range_end: &str,
    blocks_json: &str,
    events_json: &str,
    include_lookback: Option<bool>,
) -> Result<String, JsValue> {
    let range_start = parse_date(range_start)?;
    let range_end = parse_date(range_end)?;
    let blocks = parse_blocks(blocks_json)?;
    let events = parse_events(events_json)?;

    let timeline = compute_availability_range(
        range_start,
        range_end,
        &blocks,
        &events,
        &config_from(include_lookback),
    );
    to_json(&timeline)
}

/// Compute interval counts and the availability percentage for a timeline.
///
/// `timeline_json` must be a JSON array of interval objects as produced by
/// the compute functions. Returns a JSON object with `total`, `available`,
/// `busy`, `scheduled`, and `availabilityPercentage`.
#[wasm_bindgen(js_name = "timelineStats")]
pub fn timeline_stats_js(timeline_json: &str) -> Result<String, JsValue> {
    let timeline = parse_timeline(timeline_json)?;
    to_json(&timeline_stats(&timeline))
}
