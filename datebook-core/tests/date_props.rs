//! Property-based tests for date parsing and formatting.

use datebook_core::{Date, DateError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_triples_parse_and_round_trip(
        year in 0i32..=99999,
        month in 1i32..=12,
        day in 1i32..=31
    ) {
        let text = format!("{year}-{month}-{day}");
        let date: Date = text.parse().expect("in-range triple should parse");

        prop_assert_eq!(date.year(), year);
        prop_assert_eq!(date.month(), month);
        prop_assert_eq!(date.day(), day);

        // Canonical form is zero-padded and parses back to the same date.
        let canonical = date.to_string();
        prop_assert_eq!(canonical.parse::<Date>().unwrap(), date);
        if year <= 9999 {
            prop_assert_eq!(canonical, format!("{year:04}-{month:02}-{day:02}"));
        }
    }

    #[test]
    fn out_of_range_month_is_rejected(
        year in 0i32..=9999,
        month in prop_oneof![-100i32..=0, 13i32..=100],
        day in 1i32..=31
    ) {
        let text = format!("{year}-{month}-{day}");
        prop_assert_eq!(text.parse::<Date>(), Err(DateError::InvalidMonth(month)));
    }

    #[test]
    fn out_of_range_day_is_rejected(
        year in 0i32..=9999,
        month in 1i32..=12,
        day in prop_oneof![-100i32..=0, 32i32..=100]
    ) {
        let text = format!("{year}-{month}-{day}");
        prop_assert_eq!(text.parse::<Date>(), Err(DateError::InvalidDay(day)));
    }

    #[test]
    fn trailing_garbage_is_a_format_error(
        year in 0i32..=9999,
        month in 1i32..=12,
        day in 1i32..=31,
        garbage in "[a-z]{1,4}"
    ) {
        let text = format!("{year}-{month}-{day}{garbage}");
        prop_assert_eq!(
            text.parse::<Date>(),
            Err(DateError::WrongFormat(text.clone()))
        );
    }

    #[test]
    fn ordering_follows_components(
        a in (0i32..=9999, 1i32..=12, 1i32..=31),
        b in (0i32..=9999, 1i32..=12, 1i32..=31)
    ) {
        let parse = |(y, m, d): (i32, i32, i32)| {
            format!("{y}-{m}-{d}").parse::<Date>().unwrap()
        };
        prop_assert_eq!(parse(a).cmp(&parse(b)), a.cmp(&b));
    }
}
