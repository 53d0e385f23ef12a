//! Proleptic Gregorian calendar arithmetic.
//!
//! Converts between civil `(year, month, day)` triples and a signed count of days
//! since 1970-01-01 using Howard Hinnant's era-based algorithms. Everything is
//! exact integer math; years before 1 CE use astronomical numbering (year 0 is
//! 1 BCE). Day counts are limited to [`MAX_DAYS`] in magnitude; conversions that
//! would leave that range return `None` instead of overflowing.
//!
//! Nothing here validates month or day ranges. Out-of-range inputs produce a
//! defined (if meaningless) day count and never panic.

use std::fmt;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Largest day count, in either direction, that converts to a civil date.
pub const MAX_DAYS: i64 = i64::MAX - EPOCH_SHIFT;

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, Sunday first (index matches [`day_of_week`]).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A calendar date under the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    pub year: i64,
    /// 1..=12
    pub month: u32,
    /// 1..=31
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i64, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Days since 1970-01-01 (negative before the epoch).
    pub fn to_days(self) -> Option<i64> {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Inverse of [`CivilDate::to_days`].
    pub fn from_days(days: i64) -> Option<Self> {
        civil_from_days(days)
    }

    /// English name of this date's month.
    pub fn month_name(self) -> &'static str {
        month_name(self.month)
    }
}

impl fmt::Display for CivilDate {
    /// Renders as `January 15, 2024`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month_name(), self.day, self.year)
    }
}

/// Count days from 1970-01-01 to the given civil date.
///
/// January and February are treated as months 11 and 12 of the previous year so
/// the leap day falls at the end of the computational year. Returns `None` when
/// the year is too large for the day count to fit in an `i64` (beyond roughly
/// 2.5e16 years either side of the epoch).
pub fn days_from_civil(year: i64, month: u32, day: u32) -> Option<i64> {
    let month = i64::from(month);
    let day = i64::from(day);
    let y = if month <= 2 { year.checked_sub(1)? } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400); // [0, 399]
    let mp = if month > 2 { month - 3 } else { month + 9 }; // [0, 11]
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era.checked_mul(DAYS_PER_ERA)?.checked_add(doe - EPOCH_SHIFT)
}

/// Civil date for a day count since 1970-01-01. Exact inverse of [`days_from_civil`].
///
/// Returns `None` when `days` is outside `±`[`MAX_DAYS`].
pub fn civil_from_days(days: i64) -> Option<CivilDate> {
    if !(-MAX_DAYS..=MAX_DAYS).contains(&days) {
        return None;
    }
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * 400 + i64::from(month <= 2);
    Some(CivilDate {
        year,
        month: month as u32,
        day: day as u32,
    })
}

/// Weekday index for a day count, 0 = Sunday. 1970-01-01 was a Thursday.
pub fn day_of_week(days: i64) -> u32 {
    ((days.rem_euclid(7) + 4) % 7) as u32
}

/// Day count containing the given instant (floors toward negative infinity).
///
/// Returns `None` for non-finite input or when the day falls outside `±`[`MAX_DAYS`].
pub fn days_from_seconds(seconds: f64) -> Option<i64> {
    let days = (seconds / SECONDS_PER_DAY).floor();
    if !days.is_finite() {
        return None;
    }
    // `as` saturates, and saturated values land outside the range below.
    let days = days as i64;
    (-MAX_DAYS..=MAX_DAYS).contains(&days).then_some(days)
}

/// Gregorian leap-year rule: every 4th year, except centuries not divisible by 400.
pub fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// English name for a 1-based month. Out-of-range months wrap into 1..=12.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month.wrapping_sub(1) % 12) as usize]
}

/// English name for a weekday index as returned by [`day_of_week`].
pub fn weekday_name(weekday: u32) -> &'static str {
    WEEKDAY_NAMES[(weekday % 7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_from_civil(1970, 1, 1), Some(0));
        assert_eq!(civil_from_days(0), Some(CivilDate::new(1970, 1, 1)));
    }

    #[test]
    fn known_dates() {
        assert_eq!(days_from_civil(2024, 1, 1), Some(19_723));
        assert_eq!(days_from_civil(2000, 3, 1), Some(11_017));
        assert_eq!(days_from_civil(1969, 12, 31), Some(-1));
        assert_eq!(civil_from_days(19_737), Some(CivilDate::new(2024, 1, 15)));
    }

    #[test]
    fn leap_day_round_trips() {
        let days = days_from_civil(2024, 2, 29).unwrap();
        assert_eq!(civil_from_days(days), Some(CivilDate::new(2024, 2, 29)));
        assert_eq!(civil_from_days(days + 1), Some(CivilDate::new(2024, 3, 1)));
    }

    #[test]
    fn century_without_leap_day() {
        let feb28 = days_from_civil(1900, 2, 28).unwrap();
        assert_eq!(civil_from_days(feb28 + 1), Some(CivilDate::new(1900, 3, 1)));
    }

    #[test]
    fn year_zero_and_negative_years() {
        // 0000-03-01 is the start of the computational era.
        assert_eq!(days_from_civil(0, 3, 1), Some(-EPOCH_SHIFT));
        assert_eq!(civil_from_days(-EPOCH_SHIFT - 1), Some(CivilDate::new(0, 2, 29)));
        let d = days_from_civil(-4713, 11, 24).unwrap();
        assert_eq!(civil_from_days(d), Some(CivilDate::new(-4713, 11, 24)));
    }

    #[test]
    fn extreme_day_counts() {
        let last = civil_from_days(MAX_DAYS).unwrap();
        assert_eq!(last.to_days(), Some(MAX_DAYS));
        let first = civil_from_days(-MAX_DAYS).unwrap();
        assert_eq!(first.to_days(), Some(-MAX_DAYS));
        assert_eq!(civil_from_days(MAX_DAYS + 1), None);
        assert_eq!(civil_from_days(i64::MAX), None);
        assert_eq!(civil_from_days(-MAX_DAYS - 1), None);
        assert_eq!(civil_from_days(i64::MIN), None);
    }

    #[test]
    fn years_beyond_day_range_are_rejected() {
        assert!(days_from_civil(10_000_000_000, 1, 1).is_some());
        assert_eq!(days_from_civil(10i64.pow(17), 1, 1), None);
        assert_eq!(days_from_civil(-(10i64.pow(17)), 6, 1), None);
        assert_eq!(days_from_civil(i64::MIN, 1, 1), None);
        assert_eq!(days_from_civil(i64::MAX, 12, 31), None);
    }

    #[test]
    fn weekdays() {
        assert_eq!(day_of_week(0), 4, "1970-01-01 was a Thursday");
        assert_eq!(day_of_week(-1), 3);
        assert_eq!(day_of_week(days_from_civil(2024, 1, 15).unwrap()), 1);
        assert_eq!(weekday_name(day_of_week(-7)), "Thursday");
        assert!(day_of_week(i64::MAX) < 7);
        assert!(day_of_week(i64::MIN) < 7);
    }

    #[test]
    fn seconds_floor_to_days() {
        assert_eq!(days_from_seconds(0.0), Some(0));
        assert_eq!(days_from_seconds(86_399.9), Some(0));
        assert_eq!(days_from_seconds(-0.5), Some(-1));
        assert_eq!(days_from_seconds(-86_400.0), Some(-1));
    }

    #[test]
    fn seconds_outside_day_range() {
        assert_eq!(days_from_seconds(1e24), None);
        assert_eq!(days_from_seconds(-1e24), None);
        assert_eq!(days_from_seconds(f64::NAN), None);
        assert_eq!(days_from_seconds(f64::INFINITY), None);
        assert!(days_from_seconds(7e23).is_some());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn display_uses_month_name() {
        assert_eq!(CivilDate::new(2023, 12, 28).to_string(), "December 28, 2023");
    }
}
