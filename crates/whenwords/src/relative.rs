//! Relative phrases for instants and instant pairs.
//!
//! - [`timeago`] — "3 hours ago" / "in 2 days" via a fixed threshold ladder
//! - [`human_date`] — "Yesterday", "Last Friday", "March 1", "January 1, 2023"
//! - [`date_range`] — "January 15–22, 2024" and wider spans
//!
//! All comparisons are made on whole UTC days or raw second differences; there
//! is no timezone or locale handling.

use crate::calendar::{civil_from_days, day_of_week, weekday_name, CivilDate, SECONDS_PER_DAY};
use crate::error::{Result, WhenError};
use crate::timestamp::{day_number, normalize, normalize_reference, Timestamp};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = SECONDS_PER_DAY;
const YEAR: f64 = 365.0 * DAY;
const MONTH: f64 = YEAR / 12.0;

/// Differences below this many seconds read as "just now".
const JUST_NOW_SECONDS: f64 = 45.0;

/// U+2013 EN DASH, used to join range endpoints.
pub const EN_DASH: char = '\u{2013}';

/// Coarse unit reported by [`timeago`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AgoUnit {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl AgoUnit {
    fn label(self, count: i64) -> &'static str {
        let (singular, plural) = match self {
            AgoUnit::Minute => ("minute", "minutes"),
            AgoUnit::Hour => ("hour", "hours"),
            AgoUnit::Day => ("day", "days"),
            AgoUnit::Month => ("month", "months"),
            AgoUnit::Year => ("year", "years"),
        };
        if count == 1 {
            singular
        } else {
            plural
        }
    }
}

/// How a ladder rung derives its count from the absolute difference.
#[derive(Debug, Clone, Copy)]
enum Count {
    One,
    Per(f64),
}

/// Upper bound (exclusive, seconds), unit, and count rule, in ascending order.
/// Anything at or beyond the last bound falls through to whole years.
const LADDER: [(f64, AgoUnit, Count); 10] = [
    (90.0, AgoUnit::Minute, Count::One),
    (45.0 * MINUTE, AgoUnit::Minute, Count::Per(MINUTE)),
    (90.0 * MINUTE, AgoUnit::Hour, Count::One),
    (22.0 * HOUR, AgoUnit::Hour, Count::Per(HOUR)),
    (36.0 * HOUR, AgoUnit::Day, Count::One),
    (26.0 * DAY, AgoUnit::Day, Count::Per(DAY)),
    (46.0 * DAY, AgoUnit::Month, Count::One),
    (320.0 * DAY, AgoUnit::Month, Count::Per(MONTH)),
    (548.0 * DAY, AgoUnit::Year, Count::One),
    (f64::INFINITY, AgoUnit::Year, Count::Per(YEAR)),
];

/// Round to the nearest integer with exact halves going up.
///
/// A tolerance of 1e-12 absorbs the representation error of quotients that are
/// mathematically `x.5`.
pub(crate) fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let frac = value - floor;
    if frac > 0.5 || (frac - 0.5).abs() < 1e-12 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

fn classify(abs_diff: f64) -> (AgoUnit, i64) {
    // The last rung has an infinite bound, so the search always succeeds for finite input.
    let (_, unit, count) = LADDER
        .iter()
        .copied()
        .find(|(bound, _, _)| abs_diff < *bound)
        .unwrap_or(LADDER[LADDER.len() - 1]);
    let n = match count {
        Count::One => 1,
        Count::Per(unit_seconds) => round_half_up(abs_diff / unit_seconds),
    };
    (unit, n)
}

/// Describe `timestamp` relative to `reference`: "just now", "5 minutes ago", "in 2 days".
///
/// `reference` may be [`Timestamp::Unset`], in which case the timestamp is compared
/// with itself and the result is always "just now".
///
/// # Errors
/// Returns `WhenError::InvalidTimestamp` if either timestamp fails to normalize.
pub fn timeago(timestamp: &Timestamp, reference: &Timestamp) -> Result<String> {
    let ts = normalize(timestamp)?;
    let reference = normalize_reference(reference, ts)?;

    let diff = reference - ts;
    let abs_diff = diff.abs();
    if abs_diff < JUST_NOW_SECONDS {
        return Ok("just now".to_string());
    }

    let (unit, n) = classify(abs_diff);
    let label = unit.label(n);
    if diff < 0.0 {
        Ok(format!("in {} {}", n, label))
    } else {
        Ok(format!("{} {} ago", n, label))
    }
}

/// Name the day of `timestamp` relative to the day of `reference`.
///
/// Within a week either side the result is contextual ("Today", "Yesterday",
/// "Tomorrow", "Last Friday", "This Sunday"); otherwise it is "Month D", with
/// ", Year" appended only when the years differ.
///
/// # Errors
/// Returns `WhenError::InvalidTimestamp` if either timestamp fails to normalize.
pub fn human_date(timestamp: &Timestamp, reference: &Timestamp) -> Result<String> {
    let ts = normalize(timestamp)?;
    let reference = normalize_reference(reference, ts)?;

    let ts_days = day_number(ts)?;
    let ref_days = day_number(reference)?;

    // Both ends may sit near the limits of the day range.
    let phrase = match i128::from(ts_days) - i128::from(ref_days) {
        0 => "Today".to_string(),
        -1 => "Yesterday".to_string(),
        1 => "Tomorrow".to_string(),
        -6..=-2 => format!("Last {}", weekday_name(day_of_week(ts_days))),
        2..=6 => format!("This {}", weekday_name(day_of_week(ts_days))),
        _ => {
            let date = civil_date(ts_days)?;
            let ref_date = civil_date(ref_days)?;
            if date.year == ref_date.year {
                format!("{} {}", date.month_name(), date.day)
            } else {
                date.to_string()
            }
        }
    };
    Ok(phrase)
}

/// Render the calendar span between two instants, collapsing shared month/year.
///
/// Inputs are swapped if `start` is after `end`, so the result is symmetric.
///
/// # Errors
/// Returns `WhenError::InvalidTimestamp` if either timestamp fails to normalize.
pub fn date_range(start: &Timestamp, end: &Timestamp) -> Result<String> {
    let mut start = normalize(start)?;
    let mut end = normalize(end)?;
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let first = civil_date(day_number(start)?)?;
    let last = civil_date(day_number(end)?)?;
    Ok(render_range(first, last))
}

fn civil_date(days: i64) -> Result<CivilDate> {
    civil_from_days(days)
        .ok_or_else(|| WhenError::InvalidTimestamp(format!("day {} is out of range", days)))
}

fn render_range(first: CivilDate, last: CivilDate) -> String {
    if first == last {
        return first.to_string();
    }
    if first.year == last.year && first.month == last.month {
        return format!(
            "{} {}{}{}, {}",
            first.month_name(),
            first.day,
            EN_DASH,
            last.day,
            first.year
        );
    }
    if first.year == last.year {
        return format!(
            "{} {} {} {} {}, {}",
            first.month_name(),
            first.day,
            EN_DASH,
            last.month_name(),
            last.day,
            first.year
        );
    }
    format!("{} {} {}", first, EN_DASH, last)
}
