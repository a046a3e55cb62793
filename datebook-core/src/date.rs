//! Calendar dates as they appear on the wire.
//!
//! A [`Date`] is a validated `(year, month, day)` triple. Validation is
//! range-only: month must be 1-12 and day 1-31, but the day is never checked
//! against the month's real length, so 2021-02-31 is a legal value. Ordering
//! is lexicographic on (year, month, day).

use std::fmt;
use std::str::FromStr;

use crate::error::DateError;

/// A calendar date. Immutable once constructed.
// Field order drives the derived lexicographic ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    /// Build a date from raw components, range-checking month and day.
    ///
    /// The year is unrestricted; negative years are allowed.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        if !(1..=31).contains(&day) {
            return Err(DateError::InvalidDay(day));
        }
        Ok(Date { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parse `<integer>-<integer>-<integer>` with nothing before, between,
    /// or after the fields except the two literal `-` separators.
    ///
    /// Each field is an optionally signed run of ASCII digits that fits in
    /// an `i32`, so `-1-2-3` is year -1 and `2021--5-1` is month -5 (which
    /// then fails the range check). Any syntactic failure reports the whole
    /// input text; range checks run only after the syntax is accepted.
    fn from_str(text: &str) -> Result<Self, DateError> {
        let wrong_format = || DateError::WrongFormat(text.to_string());

        let (year, rest) = split_int(text).ok_or_else(wrong_format)?;
        let rest = rest.strip_prefix('-').ok_or_else(wrong_format)?;
        let (month, rest) = split_int(rest).ok_or_else(wrong_format)?;
        let rest = rest.strip_prefix('-').ok_or_else(wrong_format)?;
        let (day, rest) = split_int(rest).ok_or_else(wrong_format)?;
        if !rest.is_empty() {
            return Err(wrong_format());
        }

        Date::new(year, month, day)
    }
}

impl fmt::Display for Date {
    /// Canonical `YYYY-MM-DD`: zero-padded to widths 4/2/2, growing as
    /// needed (a five-digit year prints in full).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Split a leading optionally-signed integer off `input`, returning the
/// value and the unconsumed remainder. `None` if there is no digit after the
/// optional sign, or on `i32` overflow.
fn split_int(input: &str) -> Option<(i32, &str)> {
    let body = input.strip_prefix(['+', '-']).unwrap_or(input);
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let (number, rest) = input.split_at(input.len() - body.len() + digits);
    number.parse().ok().map(|value| (value, rest))
}
