//! Tests for `date_range` — collapsing shared month/year and auto-ordering.

use whenwords::{date_range, CivilDateTime, Timestamp, WhenError};

/// Helper: range between two epoch-second instants.
fn range(start: f64, end: f64) -> String {
    date_range(&Timestamp::unix(start), &Timestamp::unix(end)).expect("valid timestamps")
}

#[test]
fn same_day() {
    assert_eq!(range(1_705_276_800.0, 1_705_276_800.0), "January 15, 2024");
    assert_eq!(range(1_705_276_800.0, 1_705_320_000.0), "January 15, 2024");
}

#[test]
fn same_month_uses_tight_en_dash() {
    assert_eq!(range(1_705_276_800.0, 1_705_363_200.0), "January 15\u{2013}16, 2024");
    assert_eq!(range(1_705_276_800.0, 1_705_881_600.0), "January 15\u{2013}22, 2024");
}

#[test]
fn same_year_uses_spaced_en_dash() {
    assert_eq!(
        range(1_705_276_800.0, 1_707_955_200.0),
        "January 15 \u{2013} February 15, 2024"
    );
    assert_eq!(
        range(1_704_067_200.0, 1_735_603_200.0),
        "January 1 \u{2013} December 31, 2024"
    );
}

#[test]
fn different_years_spell_out_both() {
    assert_eq!(
        range(1_703_721_600.0, 1_705_276_800.0),
        "December 28, 2023 \u{2013} January 15, 2024"
    );
    assert_eq!(
        range(1_672_531_200.0, 1_735_689_600.0),
        "January 1, 2023 \u{2013} January 1, 2025"
    );
}

#[test]
fn swapped_inputs_auto_correct() {
    assert_eq!(range(1_705_881_600.0, 1_705_276_800.0), "January 15\u{2013}22, 2024");
}

#[test]
fn dash_is_en_dash_not_hyphen() {
    let out = range(1_705_276_800.0, 1_705_881_600.0);
    assert!(out.contains('\u{2013}'));
    assert!(!out.contains('-'));
}

#[test]
fn mixed_input_kinds() {
    let out = date_range(
        &Timestamp::iso("2024-02-28"),
        &CivilDateTime::new(2024, 3, 1, 23, 59, 59).into(),
    )
    .unwrap();
    assert_eq!(out, "February 28 \u{2013} March 1, 2024");
}

#[test]
fn leap_day_boundaries() {
    let out = date_range(&Timestamp::iso("2024-02-28"), &Timestamp::iso("2024-02-29")).unwrap();
    assert_eq!(out, "February 28\u{2013}29, 2024");
}

#[test]
fn invalid_endpoint_fails() {
    assert!(matches!(
        date_range(&Timestamp::iso("2024-01-15"), &Timestamp::Unset),
        Err(WhenError::InvalidTimestamp(_))
    ));
    assert!(matches!(
        date_range(&Timestamp::unix(f64::NAN), &Timestamp::unix(0.0)),
        Err(WhenError::InvalidTimestamp(_))
    ));
}

#[test]
fn endpoints_beyond_calendar_range_fail() {
    assert!(matches!(
        date_range(&Timestamp::unix(-1e24), &Timestamp::unix(1e24)),
        Err(WhenError::InvalidTimestamp(_))
    ));
    assert!(matches!(
        date_range(
            &Timestamp::civil(CivilDateTime::date(10i64.pow(17), 1, 1)),
            &Timestamp::unix(0.0)
        ),
        Err(WhenError::InvalidTimestamp(_))
    ));
}

#[test]
fn widest_representable_range() {
    let result = range(-7e23, 7e23);
    assert!(result.contains(" \u{2013} "), "{}", result);
    assert!(result.starts_with(|c: char| c.is_ascii_uppercase()));
}
