//! WASM bindings for whenwords.
//!
//! Exposes the five formatting/parsing operations to JavaScript via
//! `wasm-bindgen`. Timestamps and options cross the boundary as JSON strings so
//! callers can pass any supported representation without extra glue:
//!
//! - a number — epoch seconds (`1705276800`)
//! - a string — ISO text (`"2024-01-15T09:30:00"`)
//! - an object — `{"year":2024,"month":1,"day":15,"hour":9}` (time fields optional)
//! - `null` — unset (only meaningful as a reference)
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p whenwords-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/whenwords-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/whenwords_wasm.wasm
//! ```

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use whenwords::{CivilDateTime, DurationOptions, Timestamp};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for timestamps passed from JavaScript.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampInput {
    Seconds(f64),
    Iso(String),
    Civil {
        year: i64,
        month: u32,
        day: u32,
        #[serde(default)]
        hour: u32,
        #[serde(default)]
        minute: u32,
        #[serde(default)]
        second: u32,
    },
}

impl From<TimestampInput> for Timestamp {
    fn from(input: TimestampInput) -> Self {
        match input {
            TimestampInput::Seconds(seconds) => Timestamp::unix(seconds),
            TimestampInput::Iso(text) => Timestamp::iso(text),
            TimestampInput::Civil {
                year,
                month,
                day,
                hour,
                minute,
                second,
            } => Timestamp::civil(CivilDateTime::new(year, month, day, hour, minute, second)),
        }
    }
}

// ---------------------------------------------------------------------------
// Plain-Rust helpers (testable without a JS host)
// ---------------------------------------------------------------------------

/// Parse a JSON timestamp value. `null` and the empty string mean unset.
fn parse_timestamp_json(json: &str) -> Result<Timestamp, String> {
    if json.trim().is_empty() {
        return Ok(Timestamp::Unset);
    }
    let input: Option<TimestampInput> = serde_json::from_str(json)
        .map_err(|e| format!("Invalid timestamp JSON '{}': {}", json, e))?;
    Ok(input.map(Timestamp::from).unwrap_or_default())
}

fn parse_options_json(json: Option<&str>) -> Result<DurationOptions, String> {
    match json {
        Some(raw) if !raw.trim().is_empty() => serde_json::from_str(raw)
            .map_err(|e| format!("Invalid options JSON '{}': {}", raw, e)),
        _ => Ok(DurationOptions::default()),
    }
}

fn timeago_json(timestamp: &str, reference: &str) -> Result<String, String> {
    let timestamp = parse_timestamp_json(timestamp)?;
    let reference = parse_timestamp_json(reference)?;
    whenwords::timeago(&timestamp, &reference).map_err(|e| e.to_string())
}

fn duration_json(seconds: f64, options: Option<&str>) -> Result<String, String> {
    let options = parse_options_json(options)?;
    whenwords::duration(seconds, Some(&options)).map_err(|e| e.to_string())
}

fn human_date_json(timestamp: &str, reference: &str) -> Result<String, String> {
    let timestamp = parse_timestamp_json(timestamp)?;
    let reference = parse_timestamp_json(reference)?;
    whenwords::human_date(&timestamp, &reference).map_err(|e| e.to_string())
}

fn date_range_json(start: &str, end: &str) -> Result<String, String> {
    let start = parse_timestamp_json(start)?;
    let end = parse_timestamp_json(end)?;
    whenwords::date_range(&start, &end).map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Describe a timestamp relative to a reference ("3 hours ago", "in 2 days").
///
/// Both arguments are JSON timestamp values; pass `"null"` as the reference to
/// compare the timestamp with itself.
#[wasm_bindgen(js_name = "timeago")]
pub fn timeago(timestamp_json: &str, reference_json: &str) -> Result<String, JsValue> {
    timeago_json(timestamp_json, reference_json).map_err(|e| JsValue::from_str(&e))
}

/// Render a number of seconds as a duration.
///
/// `options_json` is an optional `{compact, max_units}` object; missing fields
/// take their defaults.
#[wasm_bindgen(js_name = "duration")]
pub fn duration(seconds: f64, options_json: Option<String>) -> Result<String, JsValue> {
    duration_json(seconds, options_json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Parse duration text ("2h30m", "1:30:00") into seconds.
#[wasm_bindgen(js_name = "parseDuration")]
pub fn parse_duration(text: &str) -> Result<f64, JsValue> {
    whenwords::parse_duration(text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Name the day of a timestamp relative to a reference ("Yesterday", "March 1").
#[wasm_bindgen(js_name = "humanDate")]
pub fn human_date(timestamp_json: &str, reference_json: &str) -> Result<String, JsValue> {
    human_date_json(timestamp_json, reference_json).map_err(|e| JsValue::from_str(&e))
}

/// Render the calendar span between two timestamps.
#[wasm_bindgen(js_name = "dateRange")]
pub fn date_range(start_json: &str, end_json: &str) -> Result<String, JsValue> {
    date_range_json(start_json, end_json).map_err(|e| JsValue::from_str(&e))
}
