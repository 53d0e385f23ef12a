//! Tests for `parse_duration` — unit phrases, colon notation, and rejections.

use whenwords::{parse_duration, WhenError};

/// Helper: parse and unwrap, naming the input on failure.
fn secs(input: &str) -> f64 {
    parse_duration(input).unwrap_or_else(|e| panic!("{:?} should parse: {}", input, e))
}

#[test]
fn equivalent_spellings_agree() {
    for input in [
        "2h30m",
        "2h 30m",
        "2h, 30m",
        "2 hours 30 minutes",
        "2 hours and 30 minutes",
        "2 hours, and 30 minutes",
        "2.5 hours",
        "2:30",
        "2:30:00",
        "150 minutes",
        "2H 30M",
        "  2 hours   30 minutes  ",
    ] {
        assert_eq!(secs(input), 9000.0, "{:?}", input);
    }
}

#[test]
fn single_units() {
    assert_eq!(secs("1.5h"), 5400.0);
    assert_eq!(secs("90 minutes"), 5400.0);
    assert_eq!(secs("90m"), 5400.0);
    assert_eq!(secs("90min"), 5400.0);
    assert_eq!(secs("30mins"), 1800.0);
    assert_eq!(secs("45 seconds"), 45.0);
    assert_eq!(secs("45s"), 45.0);
    assert_eq!(secs("45sec"), 45.0);
    assert_eq!(secs("45 secs"), 45.0);
    assert_eq!(secs("2hr"), 7200.0);
    assert_eq!(secs("2hrs"), 7200.0);
    assert_eq!(secs("2 days"), 172_800.0);
    assert_eq!(secs("2d"), 172_800.0);
    assert_eq!(secs("1 week"), 604_800.0);
    assert_eq!(secs("1w"), 604_800.0);
    assert_eq!(secs("2 wks"), 1_209_600.0);
}

#[test]
fn mixed_units_sum() {
    assert_eq!(secs("1 day, 2 hours, and 30 minutes"), 95_400.0);
    assert_eq!(secs("1d 2h 30m"), 95_400.0);
    assert_eq!(secs("1w1d"), 691_200.0);
    assert_eq!(secs("1h 1h"), 7200.0);
}

#[test]
fn colon_notation() {
    assert_eq!(secs("1:30:00"), 5400.0);
    assert_eq!(secs("0:05:30"), 330.0);
    assert_eq!(secs(" 10:00 "), 36_000.0);
}

#[test]
fn colon_commits_to_colon_grammar() {
    // Mixed colon and unit words are not retried as a unit phrase.
    for input in ["2:30 hours", "1h 2:30", "1:2:3:4", ":30", "2:", "-1:30", "1:-30"] {
        assert!(
            matches!(parse_duration(input), Err(WhenError::InvalidFormat(_))),
            "{:?} should be rejected",
            input
        );
    }
}

#[test]
fn rejections() {
    for input in [
        "",
        "   ",
        "hello world",
        "-5 hours",
        "+5 hours",
        "42",
        "5 fortnights",
        "hours",
        "and",
        "2 hours or 3 minutes",
        "2 hours 30",
        ".",
        "1e3 seconds",
    ] {
        let result = parse_duration(input);
        assert!(
            matches!(result, Err(WhenError::InvalidFormat(_))),
            "{:?} should be rejected, got {:?}",
            input,
            result
        );
    }
}

#[test]
fn trailing_separators_are_ignored() {
    assert_eq!(secs("2 hours and"), 7200.0);
    assert_eq!(secs("2 hours,"), 7200.0);
}

#[test]
fn fractional_values_are_kept() {
    assert_eq!(secs("0.5m"), 30.0);
    assert_eq!(secs(".25h"), 900.0);
}

#[test]
fn totals_beyond_f64_are_rejected() {
    for input in [
        // the literal itself overflows to infinity
        format!("1{}h", "0".repeat(400)),
        // finite literal, infinite product
        format!("{} weeks", "9".repeat(308)),
        // too many digits for a colon field
        format!("{}:00", "9".repeat(30)),
    ] {
        let result = parse_duration(&input);
        assert!(
            matches!(result, Err(WhenError::InvalidFormat(_))),
            "{:?} should be rejected, got {:?}",
            input,
            result
        );
    }
}
