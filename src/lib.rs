mod consts;
mod options;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use options::{
    MonthRangeCalculator, PeriodOptionCalculator, YearOptions, available_months, available_years,
};
pub use range::{RangeBoundPeriod, RangeError};
pub use types::YearMonth;

use crate::prelude::*;
use chrono::Datelike;
use std::cmp::Ordering;
use std::num::IntErrorKind;
use std::str::FromStr;

/// A calendar period at one of three granularities.
///
/// `Unbounded` stands for "all time" and has no components. Values are
/// immutable; stepping returns a new period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Period {
    /// No year or month constraint
    #[default]
    #[display(fmt = "all")]
    Unbounded,
    /// A whole year
    #[display(fmt = "{}", year)]
    Year { year: i32 },
    /// A single month of a year
    #[display(fmt = "{}-{}", year, month)]
    Month { year: i32, month: u8 },
}

/// Which calendar unit a [`Period`] resolves to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[display(fmt = "all")]
    #[serde(rename = "all")]
    Unbounded,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
}

/// Rule used by [`Period::compare_with`] to order two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparePolicy {
    /// Years decide first; months only break ties when both sides have one.
    /// A year-only period is equal to every month of that year.
    #[default]
    YearFirst,
    /// Only periods of the same granularity are comparable.
    SameGranularity,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid period format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Empty period string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl Period {
    /// Builds a period from optional components.
    ///
    /// A month without a year carries no information and yields `Unbounded`.
    pub const fn from_components(year: Option<i32>, month: Option<u8>) -> Self {
        match (year, month) {
            (Some(year), Some(month)) => Self::Month { year, month },
            (Some(year), None) => Self::Year { year },
            (None, _) => Self::Unbounded,
        }
    }

    /// The year containing `date`
    pub fn year_of(date: &impl Datelike) -> Self {
        Self::Year { year: date.year() }
    }

    /// The month containing `date`
    pub fn year_month_of(date: &impl Datelike) -> Self {
        YearMonth::from_date(date).into()
    }

    /// Returns the year component if present
    pub const fn year(&self) -> Option<i32> {
        match *self {
            Self::Year { year } | Self::Month { year, .. } => Some(year),
            Self::Unbounded => None,
        }
    }

    /// Returns the month component if present
    pub const fn month(&self) -> Option<u8> {
        match *self {
            Self::Month { month, .. } => Some(month),
            Self::Year { .. } | Self::Unbounded => None,
        }
    }

    /// Returns both components for month periods
    pub const fn year_month(&self) -> Option<YearMonth> {
        match *self {
            Self::Month { year, month } => Some(YearMonth::new(year, month)),
            Self::Year { .. } | Self::Unbounded => None,
        }
    }

    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::Unbounded => Granularity::Unbounded,
            Self::Year { .. } => Granularity::Year,
            Self::Month { .. } => Granularity::Month,
        }
    }

    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Debug description: `all`, `<year>` or `<year>-<month>`
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// The following period at the same granularity. `Unbounded` is a fixed point.
    #[must_use]
    pub fn next(self) -> Self {
        self.step(1)
    }

    /// The preceding period at the same granularity. `Unbounded` is a fixed point.
    #[must_use]
    pub fn previous(self) -> Self {
        self.step(-1)
    }

    fn step(self, delta: i32) -> Self {
        match self {
            Self::Unbounded => self,
            Self::Year { year } => Self::Year {
                year: year.saturating_add(delta),
            },
            Self::Month { year, month } => YearMonth::new(year, month).adding(delta).into(),
        }
    }

    /// Whether `month` falls inside this period. Everything is inside `Unbounded`.
    pub fn contains(&self, month: &YearMonth) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Year { year } => year == month.year(),
            Self::Month { .. } => self.year_month() == Some(*month),
        }
    }

    /// Year-first comparison. `None` means the periods are incomparable, which
    /// is always the case when either side is `Unbounded`.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.compare_with(other, ComparePolicy::YearFirst)
    }

    /// Three-way comparison under an explicit policy
    pub fn compare_with(&self, other: &Self, policy: ComparePolicy) -> Option<Ordering> {
        match policy {
            ComparePolicy::YearFirst => self.compare_year_first(other),
            ComparePolicy::SameGranularity => self.compare_same_granularity(other),
        }
    }

    fn compare_year_first(&self, other: &Self) -> Option<Ordering> {
        let ordering = self.year()?.cmp(&other.year()?);
        if ordering != Ordering::Equal {
            return Some(ordering);
        }

        match (self.month(), other.month()) {
            (Some(lhs), Some(rhs)) => Some(lhs.cmp(&rhs)),
            // a year-only side covers every month of the year
            _ => Some(Ordering::Equal),
        }
    }

    fn compare_same_granularity(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Year { year: lhs }, Self::Year { year: rhs }) => Some(lhs.cmp(&rhs)),
            (Self::Month { year: y1, month: m1 }, Self::Month { year: y2, month: m2 }) => {
                Some((y1, m1).cmp(&(y2, m2)))
            }
            _ => None,
        }
    }

    /// True only when `self` orders strictly before `other` (year-first)
    pub fn is_before(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// True only when `self` orders strictly after `other` (year-first)
    pub fn is_after(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }
}

impl From<(Option<i32>, Option<u8>)> for Period {
    fn from(value: (Option<i32>, Option<u8>)) -> Self {
        Self::from_components(value.0, value.1)
    }
}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        if trimmed.eq_ignore_ascii_case(UNBOUNDED_LABEL) {
            return Ok(Self::Unbounded);
        }

        // A leading '-' is the sign of a negative year, not a separator
        let sign_len = usize::from(trimmed.starts_with(DATE_SEPARATOR));
        match trimmed[sign_len..].find(DATE_SEPARATOR) {
            None => Ok(Self::Year {
                year: Self::parse_year(trimmed)?,
            }),
            Some(pos) => {
                let split = sign_len + pos;
                let year = Self::parse_year(trimmed[..split].trim())?;
                let month = Self::parse_month(trimmed[split + 1..].trim())?;
                Ok(Self::Month { year, month })
            }
        }
    }
}

impl Period {
    fn parse_year(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_month(s: &str) -> Result<u8, ParseError> {
        let month = s.parse::<u32>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => ParseError::InvalidMonth(u32::MAX),
            _ => ParseError::InvalidFormat(s.to_owned()),
        })?;
        if !(u32::from(JANUARY)..=u32::from(MAX_MONTH)).contains(&month) {
            return Err(ParseError::InvalidMonth(month));
        }
        u8::try_from(month).map_err(|_| ParseError::InvalidMonth(month))
    }
}

impl serde::Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
