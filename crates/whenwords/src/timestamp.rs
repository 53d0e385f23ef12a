//! Timestamp inputs and their reduction to seconds since the Unix epoch.
//!
//! A [`Timestamp`] is one of several representations the caller may already have
//! on hand: raw epoch seconds, a strict ISO-8601-like string, or a broken-down
//! civil date/time. [`normalize`] turns any of them into a single `f64` count of
//! seconds since 1970-01-01T00:00:00, treating every value as UTC.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use tracing::debug;

use crate::calendar::{days_from_civil, days_from_seconds, SECONDS_PER_DAY};
use crate::error::{Result, WhenError};

/// A broken-down civil date and time of day. `year` is the actual calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CivilDateTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilDateTime {
    pub fn new(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of the given date.
    pub fn date(year: i64, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Seconds since the epoch. Fields are not range-checked; `None` only when
    /// the year is too large for the calendar's day count.
    pub fn to_seconds(&self) -> Option<f64> {
        civil_seconds(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Any of the accepted timestamp representations.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Timestamp {
    /// Seconds since the epoch, fractional and negative values allowed.
    UnixSeconds(f64),
    /// `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS`.
    Iso8601(String),
    /// Structured civil date and time.
    CivilBrokenDown(CivilDateTime),
    /// No timestamp. Invalid as a primary input; as a reference it means
    /// "compare against the primary timestamp itself".
    #[default]
    Unset,
}

impl Timestamp {
    pub fn unix(seconds: f64) -> Self {
        Timestamp::UnixSeconds(seconds)
    }

    pub fn iso(text: impl Into<String>) -> Self {
        Timestamp::Iso8601(text.into())
    }

    pub fn civil(civil: CivilDateTime) -> Self {
        Timestamp::CivilBrokenDown(civil)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Timestamp::Unset)
    }

    /// Seconds since the epoch. See [`normalize`].
    pub fn normalize(&self) -> Result<f64> {
        normalize(self)
    }
}

impl From<f64> for Timestamp {
    fn from(seconds: f64) -> Self {
        Timestamp::UnixSeconds(seconds)
    }
}

impl From<i64> for Timestamp {
    fn from(seconds: i64) -> Self {
        Timestamp::UnixSeconds(seconds as f64)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Iso8601(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Timestamp::Iso8601(text)
    }
}

impl From<CivilDateTime> for Timestamp {
    fn from(civil: CivilDateTime) -> Self {
        Timestamp::CivilBrokenDown(civil)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        let nanos = f64::from(dt.timestamp_subsec_nanos()) / 1e9;
        Timestamp::UnixSeconds(dt.timestamp() as f64 + nanos)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(ndt: NaiveDateTime) -> Self {
        Timestamp::CivilBrokenDown(CivilDateTime::new(
            i64::from(ndt.year()),
            ndt.month(),
            ndt.day(),
            ndt.hour(),
            ndt.minute(),
            ndt.second(),
        ))
    }
}

/// Reduce a timestamp to seconds since the epoch.
///
/// # Errors
/// Returns `WhenError::InvalidTimestamp` if the ISO text is malformed, the epoch
/// seconds are NaN or infinite, the instant's day lies outside
/// `±`[`MAX_DAYS`](crate::calendar::MAX_DAYS), or the timestamp is
/// [`Timestamp::Unset`].
pub fn normalize(timestamp: &Timestamp) -> Result<f64> {
    let seconds = match timestamp {
        Timestamp::UnixSeconds(seconds) if seconds.is_finite() => Ok(*seconds),
        Timestamp::UnixSeconds(seconds) => {
            debug!(seconds, "rejecting non-finite epoch seconds");
            Err(WhenError::InvalidTimestamp(format!(
                "epoch seconds must be finite, got {}",
                seconds
            )))
        }
        Timestamp::Iso8601(text) => parse_iso8601(text),
        Timestamp::CivilBrokenDown(civil) => civil.to_seconds().ok_or_else(|| {
            debug!(year = civil.year, "rejecting out-of-range civil year");
            WhenError::InvalidTimestamp(format!("year {} is out of range", civil.year))
        }),
        Timestamp::Unset => {
            debug!("rejecting unset primary timestamp");
            Err(WhenError::InvalidTimestamp("timestamp is unset".to_string()))
        }
    }?;
    day_number(seconds)?;
    Ok(seconds)
}

/// Day count of a normalized instant.
///
/// # Errors
/// Returns `WhenError::InvalidTimestamp` when the day is outside the calendar's range.
pub(crate) fn day_number(seconds: f64) -> Result<i64> {
    days_from_seconds(seconds).ok_or_else(|| {
        debug!(seconds, "rejecting instant outside the calendar range");
        WhenError::InvalidTimestamp(format!("{} seconds is out of range", seconds))
    })
}

/// Normalize an optional reference, falling back to the primary instant when unset.
pub(crate) fn normalize_reference(reference: &Timestamp, primary: f64) -> Result<f64> {
    if reference.is_unset() {
        Ok(primary)
    } else {
        normalize(reference)
    }
}

fn civil_seconds(
    year: i64,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> Option<f64> {
    let days = days_from_civil(year, month, day)?;
    Some(
        days as f64 * SECONDS_PER_DAY
            + f64::from(hour) * 3600.0
            + f64::from(minute) * 60.0
            + f64::from(second),
    )
}

/// Fixed-position parser for `YYYY-MM-DD[(T| )HH:MM:SS]`.
///
/// Only the exact 10- and 19-character shapes are accepted (after trimming
/// surrounding whitespace). Offsets, fractional seconds and a trailing `Z` are
/// not recognised.
fn parse_iso8601(input: &str) -> Result<f64> {
    let invalid = || {
        debug!(input, "rejecting malformed ISO-8601 timestamp");
        WhenError::InvalidTimestamp(format!("unrecognised ISO-8601 text: {:?}", input))
    };

    let s = input.trim().as_bytes();
    if s.len() != 10 && s.len() != 19 {
        return Err(invalid());
    }

    let year = fixed_digits(&s[0..4]).ok_or_else(invalid)?;
    let month = fixed_digits(&s[5..7]).ok_or_else(invalid)?;
    let day = fixed_digits(&s[8..10]).ok_or_else(invalid)?;
    if s[4] != b'-' || s[7] != b'-' {
        return Err(invalid());
    }

    let (mut hour, mut minute, mut second) = (0, 0, 0);
    if s.len() == 19 {
        if s[10] != b'T' && s[10] != b' ' {
            return Err(invalid());
        }
        if s[13] != b':' || s[16] != b':' {
            return Err(invalid());
        }
        hour = fixed_digits(&s[11..13]).ok_or_else(invalid)?;
        minute = fixed_digits(&s[14..16]).ok_or_else(invalid)?;
        second = fixed_digits(&s[17..19]).ok_or_else(invalid)?;
    }

    civil_seconds(i64::from(year), month, day, hour, minute, second).ok_or_else(invalid)
}

/// Parse a run of ASCII digits with no sign or padding tolerance.
fn fixed_digits(field: &[u8]) -> Option<u32> {
    field.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
