//! Render a second count as "2 hours, 30 minutes" or "2h 30m".
//!
//! Units are calendar-free approximations: a month is 30 days and a year is 365
//! days. The count is decomposed greedily from years down to seconds, then a
//! window of at most `max_units` consecutive units starting at the largest
//! nonzero one is rendered.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WhenError};

/// Default number of unit slots rendered by [`duration`].
pub const DEFAULT_MAX_UNITS: i64 = 2;

/// Hard cap on the length of a rendered duration, in bytes.
pub const MAX_OUTPUT_LEN: usize = 255;

/// Rendering options for [`duration`].
///
/// Deserializes from partial JSON such as `{"compact": true}`; missing fields take
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationOptions {
    /// Abbreviated units joined by spaces (`"1d 2h"`) instead of words and commas.
    pub compact: bool,
    /// Width of the unit window. Values `<= 0` fall back to [`DEFAULT_MAX_UNITS`].
    pub max_units: i64,
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self {
            compact: false,
            max_units: DEFAULT_MAX_UNITS,
        }
    }
}

impl DurationOptions {
    pub fn new(compact: bool, max_units: i64) -> Self {
        Self { compact, max_units }
    }

    /// Default options with compact rendering switched on.
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    pub fn with_max_units(mut self, max_units: i64) -> Self {
        self.max_units = max_units;
        self
    }

    /// `max_units` after coercing non-positive values to the default. Always `>= 1`.
    pub fn effective_max_units(&self) -> usize {
        if self.max_units <= 0 {
            DEFAULT_MAX_UNITS as usize
        } else {
            usize::try_from(self.max_units).unwrap_or(usize::MAX)
        }
    }
}

/// One row of the decomposition table.
struct Unit {
    singular: &'static str,
    plural: &'static str,
    abbrev: &'static str,
    seconds: f64,
}

/// Largest to smallest.
const UNITS: [Unit; 6] = [
    Unit {
        singular: "year",
        plural: "years",
        abbrev: "y",
        seconds: 365.0 * 86_400.0,
    },
    Unit {
        singular: "month",
        plural: "months",
        abbrev: "mo",
        seconds: 30.0 * 86_400.0,
    },
    Unit {
        singular: "day",
        plural: "days",
        abbrev: "d",
        seconds: 86_400.0,
    },
    Unit {
        singular: "hour",
        plural: "hours",
        abbrev: "h",
        seconds: 3_600.0,
    },
    Unit {
        singular: "minute",
        plural: "minutes",
        abbrev: "m",
        seconds: 60.0,
    },
    Unit {
        singular: "second",
        plural: "seconds",
        abbrev: "s",
        seconds: 1.0,
    },
];

/// Greedy per-unit counts, parallel to [`UNITS`]. Fractional seconds are dropped.
fn decompose(seconds: f64) -> [u64; 6] {
    let mut counts = [0u64; 6];
    let mut remaining = seconds;
    for (count, unit) in counts.iter_mut().zip(UNITS.iter()) {
        let n = (remaining / unit.seconds).floor();
        *count = n as u64;
        remaining = (remaining - n * unit.seconds).max(0.0);
    }
    counts
}

/// Format a nonnegative number of seconds.
///
/// Passing `None` uses [`DurationOptions::default`].
///
/// # Errors
/// Returns `WhenError::InvalidFormat` if `seconds` is negative, NaN, or infinite.
pub fn duration(seconds: f64, options: Option<&DurationOptions>) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        debug!(seconds, "rejecting duration outside [0, inf)");
        return Err(WhenError::InvalidFormat(format!(
            "duration must be a finite, nonnegative number of seconds, got {}",
            seconds
        )));
    }
    let options = options.copied().unwrap_or_default();
    let counts = decompose(seconds);

    let Some(start) = counts.iter().position(|&n| n > 0) else {
        return Ok(if options.compact { "0s" } else { "0 seconds" }.to_string());
    };
    let end = start
        .saturating_add(options.effective_max_units())
        .min(UNITS.len());

    let separator = if options.compact { " " } else { ", " };
    let mut out = String::new();
    for (unit, &n) in UNITS[start..end].iter().zip(&counts[start..end]) {
        if n == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push_str(separator);
        }
        if options.compact {
            out.push_str(&format!("{}{}", n, unit.abbrev));
        } else {
            let label = if n == 1 { unit.singular } else { unit.plural };
            out.push_str(&format!("{} {}", n, label));
        }
    }
    // Output is pure ASCII, so any byte index is a char boundary.
    out.truncate(MAX_OUTPUT_LEN);
    Ok(out)
}
