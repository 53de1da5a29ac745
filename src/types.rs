use crate::consts::{DATE_SEPARATOR, JANUARY, MONTHS_PER_YEAR};
use crate::{ParseError, Period};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month of a specific year.
///
/// Ordering is lexicographic on `(year, month)`. The month is expected to be in
/// `1..=12` but is not validated on construction; arithmetic on an out-of-range
/// month still returns a value, it just isn't meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year:  i32,
    month: u8,
}

impl YearMonth {
    /// Creates a new year-month pair (month is caller-enforced to be 1-12)
    pub const fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Truncates a calendar date to its year and month
    pub fn from_date(date: &impl Datelike) -> Self {
        Self::new(date.year(), calendar_month(date))
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1-12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the value shifted by `months` (negative steps go back in time).
    ///
    /// Works on the absolute month index with floor division, so stepping back
    /// from January lands on December of the prior year. Saturates at
    /// January of `i32::MIN` and December of `i32::MAX`.
    #[must_use]
    pub fn adding(self, months: i32) -> Self {
        let per_year = i64::from(MONTHS_PER_YEAR);
        let first = i64::from(i32::MIN) * per_year;
        let last = i64::from(i32::MAX) * per_year + per_year - 1;
        let total = (i64::from(self.year) * per_year + i64::from(self.month) - 1
            + i64::from(months))
        .clamp(first, last);

        Self {
            year:  year_from_index(total.div_euclid(per_year)),
            month: month_from_index(total.rem_euclid(per_year)),
        }
    }

    /// The following month
    #[must_use]
    pub fn next_month(self) -> Self {
        self.adding(1)
    }

    /// The preceding month
    #[must_use]
    pub fn previous_month(self) -> Self {
        self.adding(-1)
    }
}

// the clamped month index keeps the year within i32
#[allow(clippy::cast_possible_truncation)]
const fn year_from_index(year: i64) -> i32 {
    year as i32
}

// rem_euclid keeps the index in 0..12
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn month_from_index(index: i64) -> u8 {
    index as u8 + JANUARY
}

// chrono reports months as 1..=12
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn calendar_month(date: &impl Datelike) -> u8 {
    date.month() as u8
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{:02}", self.year, DATE_SEPARATOR, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Period>()? {
            Period::Month { year, month } => Ok(Self::new(year, month)),
            Period::Year { .. } | Period::Unbounded => Err(ParseError::InvalidFormat(format!(
                "Expected <year>{DATE_SEPARATOR}<month>: {}",
                s.trim()
            ))),
        }
    }
}

impl From<YearMonth> for Period {
    fn from(value: YearMonth) -> Self {
        Self::Month {
            year:  value.year,
            month: value.month,
        }
    }
}
