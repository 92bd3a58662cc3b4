use chrono::{Datelike as _, NaiveDate};

use crate::{Error, Result};

/// The value format of `<input type="date">`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse the value of a date input, e.g. `2024-01-05`.
///
/// # Errors
/// [`Error::InvalidDate`] if `input` is not a valid `YYYY-MM-DD` date.
pub fn parse_input_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, INPUT_DATE_FORMAT).map_err(|source| Error::InvalidDate {
        input: input.to_owned(),
        source,
    })
}

/// An inclusive range of days with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// The range between two dates, in whichever order they come.
    pub fn ordered(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Parse two date input values into a range.
    ///
    /// # Errors
    /// [`Error::InvalidDate`] for the first value that does not parse.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::ordered(parse_input_date(start)?, parse_input_date(end)?))
    }

    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the range, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Human readable form, in US English.
    ///
    /// The year is only written once when both ends share it:
    /// `January 5 - March 10, 2024`, but `December 20, 2023 - January 2, 2024`.
    pub fn label(&self) -> String {
        if self.start.year() == self.end.year() {
            format!(
                "{} - {}",
                self.start.format("%B %-d"),
                self.end.format("%B %-d, %Y")
            )
        } else {
            format!(
                "{} - {}",
                self.start.format("%B %-d, %Y"),
                self.end.format("%B %-d, %Y")
            )
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Four digit runs that look like a year.
    fn year_tokens(label: &str) -> usize {
        label
            .split(|c: char| !c.is_ascii_digit())
            .filter(|token| token.len() == 4)
            .count()
    }

    #[test]
    fn same_year() {
        let range = DateRange::ordered(date(2024, 1, 5), date(2024, 3, 10));
        assert_eq!(range.label().as_str(), "January 5 - March 10, 2024");
    }

    #[test]
    fn across_new_year() {
        let range = DateRange::ordered(date(2023, 12, 20), date(2024, 1, 2));
        assert_eq!(range.label().as_str(), "December 20, 2023 - January 2, 2024");
    }

    #[test]
    fn single_day() {
        let range = DateRange::ordered(date(2024, 2, 29), date(2024, 2, 29));
        assert_eq!(range.label().as_str(), "February 29 - February 29, 2024");
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn order_does_not_matter() {
        let days: Vec<NaiveDate> = [
            date(2023, 12, 31),
            date(2024, 1, 1),
            date(2024, 6, 15),
            date(2025, 1, 1),
        ]
        .into();
        for &a in &days {
            for &b in &days {
                let forward = DateRange::ordered(a, b);
                let backward = DateRange::ordered(b, a);
                assert_eq!(forward, backward);
                assert_eq!(forward.label(), backward.label());
                assert!(forward.start() <= forward.end(), "{forward:?}");
            }
        }
    }

    #[test]
    fn year_appears_once_or_twice() {
        let same = DateRange::ordered(date(2024, 1, 5), date(2024, 12, 31));
        assert_eq!(year_tokens(&same.label()), 1);
        assert!(same.label().ends_with("2024"));

        let different = DateRange::ordered(date(2024, 1, 5), date(2026, 1, 5));
        assert_eq!(year_tokens(&different.label()), 2);
    }

    #[test]
    fn parse_inputs() {
        let range = DateRange::parse("2024-03-10", " 2024-01-05 ").unwrap();
        assert_eq!(range.start(), date(2024, 1, 5));
        assert_eq!(range.end(), date(2024, 3, 10));
        assert_eq!(range.num_days(), 66);
        assert!(range.contains(date(2024, 2, 1)));
        assert!(!range.contains(date(2024, 3, 11)));
    }

    #[test]
    fn reject_malformed() {
        for input in ["", "2024-13-01", "05/01/2024", "2024-02-30", "yesterday"] {
            let err = parse_input_date(input).unwrap_err();
            assert!(matches!(err, Error::InvalidDate { .. }), "{input:?}: {err}");
        }
    }
}
