//! Property-based tests for reservation types.

use super::*;
use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2999, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Formatting a date as YYYYMMDD and parsing it back is the identity
    #[test]
    fn parse_date_accepts_formatted_dates(date in date_strategy()) {
        let raw = date.format("%Y%m%d").to_string();
        let parsed = parse_date("dateprocured", &raw).unwrap();
        prop_assert_eq!(parsed, date);
    }

    // Days past the end of a month never parse
    #[test]
    fn parse_date_rejects_out_of_range_days(year in 1900i32..=2999, month in 1u32..=12, day in 32u32..=99) {
        let raw = format!("{year:04}{month:02}{day:02}");
        prop_assert!(parse_date("dateprocured", &raw).is_err());
    }

    // Arbitrary text that is not eight digits never parses
    #[test]
    fn parse_date_rejects_non_digit_text(raw in "[^0-9]{1,12}") {
        prop_assert!(parse_date("dateprocured", &raw).is_err());
    }

    // A return window always ends after it starts on the same day
    #[test]
    fn window_bounds_are_ordered(date in date_strategy()) {
        let start = start_of_day(date);
        let end = end_of_day(date);
        prop_assert!(start < end);
        prop_assert_eq!(start.date(), end.date());
        prop_assert_eq!(end.date().day(), date.day());
    }

    // Group codes decompose into batch, section and number and recompose exactly
    #[test]
    fn group_code_parts_recompose(value in GroupCode::MIN..=99_999_999i64) {
        let code = GroupCode::try_from(value).unwrap();
        let rebuilt = code.batch() * 10_000 + code.section() * 100 + code.number();
        prop_assert_eq!(rebuilt, value);
        prop_assert!(code.section() < 100);
        prop_assert!(code.number() < 100);
    }

    // Everything below the threshold is rejected
    #[test]
    fn group_code_below_minimum_rejected(value in i64::MIN..GroupCode::MIN) {
        prop_assert!(GroupCode::try_from(value).is_err());
    }
}
