//! Selectable year and month options for populating pickers.
//!
//! Both option lists are returned most recent first.

use std::iter::Rev;
use std::ops::RangeInclusive;

use log::{debug, trace};

use crate::{DECEMBER, JANUARY, Period, YearMonth};

/// Lazily yielded year options, most recent first
pub type YearOptions = Rev<RangeInclusive<i32>>;

/// Years between the bounds' years (inclusive), most recent first.
///
/// Empty when either bound has no year, or when the bounds are inverted. The
/// years are produced lazily; collecting very wide bounds is the caller's choice.
pub fn available_years(minimum: &Period, maximum: &Period) -> YearOptions {
    let (Some(first), Some(last)) = (minimum.year(), maximum.year()) else {
        debug!("no year options: unbounded bound in {minimum}..{maximum}");
        return RangeInclusive::new(1, 0).rev();
    };
    (first..=last).rev()
}

/// Months selectable in `for_year`, most recent first.
///
/// The minimum bound clamps the start month and the maximum bound clamps the end
/// month when `for_year` is their year; a year-only bound doesn't clamp. When
/// both clamps apply and cross, the result is empty.
pub fn available_months(for_year: Option<i32>, minimum: &Period, maximum: &Period) -> Vec<u8> {
    let Some(year) = for_year else {
        return Vec::new();
    };

    let start = match minimum.year() {
        Some(min_year) if min_year == year => minimum.month().unwrap_or(JANUARY),
        _ => JANUARY,
    };
    let end = match maximum.year() {
        Some(max_year) if max_year == year => maximum.month().unwrap_or(DECEMBER),
        _ => DECEMBER,
    };
    trace!("month options for {year}: {start}..={end}");

    (start..=end).rev().collect()
}

/// Option derivation bound to a fixed pair of period bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeriodOptionCalculator {
    minimum: Period,
    maximum: Period,
}

impl PeriodOptionCalculator {
    pub const fn new(minimum: Period, maximum: Period) -> Self {
        Self { minimum, maximum }
    }

    pub const fn minimum(&self) -> Period {
        self.minimum
    }

    pub const fn maximum(&self) -> Period {
        self.maximum
    }

    /// See [`available_years`]
    pub fn available_years(&self) -> YearOptions {
        available_years(&self.minimum, &self.maximum)
    }

    /// See [`available_months`]
    pub fn available_months(&self, for_year: Option<i32>) -> Vec<u8> {
        available_months(for_year, &self.minimum, &self.maximum)
    }
}

/// Month-only navigation and options between two concrete months.
///
/// An absent current value means nothing is selected yet: both directions are
/// open, stepping back starts at `range_end` and stepping forward at `range_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRangeCalculator {
    pub range_start: YearMonth,
    pub range_end:   YearMonth,
}

impl MonthRangeCalculator {
    pub const fn new(range_start: YearMonth, range_end: YearMonth) -> Self {
        Self {
            range_start,
            range_end,
        }
    }

    fn bounds(&self) -> PeriodOptionCalculator {
        PeriodOptionCalculator::new(self.range_start.into(), self.range_end.into())
    }

    pub fn available_years(&self) -> YearOptions {
        self.bounds().available_years()
    }

    pub fn available_months(&self, for_year: Option<i32>) -> Vec<u8> {
        self.bounds().available_months(for_year)
    }

    pub fn can_move_previous(&self, current: Option<YearMonth>) -> bool {
        current.is_none_or(|current| current > self.range_start)
    }

    pub fn can_move_next(&self, current: Option<YearMonth>) -> bool {
        current.is_none_or(|current| current < self.range_end)
    }

    /// The month before `current`, or `current` itself when that would leave the range
    pub fn previous_month(&self, current: Option<YearMonth>) -> YearMonth {
        let Some(current) = current else {
            return self.range_end;
        };
        let previous = current.previous_month();
        if previous >= self.range_start {
            previous
        } else {
            debug!("refusing to step before {}", self.range_start);
            current
        }
    }

    /// The month after `current`, or `current` itself when that would leave the range
    pub fn next_month(&self, current: Option<YearMonth>) -> YearMonth {
        let Some(current) = current else {
            return self.range_start;
        };
        let next = current.next_month();
        if next <= self.range_end {
            next
        } else {
            debug!("refusing to step past {}", self.range_end);
            current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{period_month, period_year, ym};

    #[test]
    fn test_available_years_descending() {
        assert_eq!(
            available_years(&period_month(2020, 1), &period_month(2023, 1)).collect::<Vec<_>>(),
            vec![2023, 2022, 2021, 2020]
        );
        assert_eq!(
            available_years(&period_year(2020), &period_year(2020)).collect::<Vec<_>>(),
            vec![2020]
        );
    }

    #[test]
    fn test_available_years_is_lazy_for_wide_bounds() {
        let mut years = available_years(&period_year(i32::MIN), &period_year(i32::MAX));
        assert_eq!(years.next(), Some(i32::MAX));
        assert_eq!(years.next(), Some(i32::MAX - 1));
        assert_eq!(years.next_back(), Some(i32::MIN));
    }

    #[test]
    fn test_available_years_degenerate_bounds() {
        assert_eq!(available_years(&Period::Unbounded, &period_year(2020)).next(), None);
        assert_eq!(available_years(&period_year(2020), &Period::Unbounded).next(), None);
        assert_eq!(available_years(&period_year(2021), &period_year(2020)).next(), None);
    }

    #[test]
    fn test_available_months() {
        struct TestCase {
            for_year:    Option<i32>,
            minimum:     Period,
            maximum:     Period,
            expected:    Vec<u8>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                for_year:    Some(2020),
                minimum:     period_month(2020, 5),
                maximum:     period_month(2023, 1),
                expected:    vec![12, 11, 10, 9, 8, 7, 6, 5],
                description: "minimum year clamps the start",
            },
            TestCase {
                for_year:    Some(2023),
                minimum:     period_month(2020, 5),
                maximum:     period_month(2023, 3),
                expected:    vec![3, 2, 1],
                description: "maximum year clamps the end",
            },
            TestCase {
                for_year:    Some(2021),
                minimum:     period_month(2020, 5),
                maximum:     period_month(2023, 3),
                expected:    (1..=12).rev().collect(),
                description: "inner year is unclamped",
            },
            TestCase {
                for_year:    Some(2022),
                minimum:     period_month(2022, 4),
                maximum:     period_month(2022, 7),
                expected:    vec![7, 6, 5, 4],
                description: "both clamps in the same year",
            },
            TestCase {
                for_year:    Some(2022),
                minimum:     period_month(2022, 8),
                maximum:     period_month(2022, 3),
                expected:    vec![],
                description: "crossed clamps are empty",
            },
            TestCase {
                for_year:    Some(2020),
                minimum:     period_year(2020),
                maximum:     period_year(2020),
                expected:    (1..=12).rev().collect(),
                description: "year-only bounds do not clamp",
            },
            TestCase {
                for_year:    None,
                minimum:     period_month(2020, 5),
                maximum:     period_month(2023, 1),
                expected:    vec![],
                description: "no year selected",
            },
        ];

        for case in &cases {
            assert_eq!(
                available_months(case.for_year, &case.minimum, &case.maximum),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_option_calculator_delegates() {
        let calculator = PeriodOptionCalculator::new(period_month(2020, 5), period_month(2021, 2));
        assert_eq!(calculator.available_years().collect::<Vec<_>>(), vec![2021, 2020]);
        assert_eq!(calculator.available_months(Some(2021)), vec![2, 1]);
        assert_eq!(calculator.minimum(), period_month(2020, 5));
        assert_eq!(calculator.maximum(), period_month(2021, 2));
    }

    #[test]
    fn test_month_range_options() {
        let calculator = MonthRangeCalculator::new(ym(2023, 5), ym(2026, 10));
        assert_eq!(
            calculator.available_years().collect::<Vec<_>>(),
            vec![2026, 2025, 2024, 2023]
        );
        assert_eq!(calculator.available_months(Some(2026)).first(), Some(&10));
        assert_eq!(calculator.available_months(Some(2023)).last(), Some(&5));
        assert!(calculator.available_months(None).is_empty());
    }

    #[test]
    fn test_month_range_can_move() {
        let calculator = MonthRangeCalculator::new(ym(2023, 5), ym(2026, 10));
        assert!(calculator.can_move_previous(None));
        assert!(calculator.can_move_next(None));
        assert!(!calculator.can_move_previous(Some(ym(2023, 5))));
        assert!(calculator.can_move_previous(Some(ym(2023, 6))));
        assert!(!calculator.can_move_next(Some(ym(2026, 10))));
        assert!(calculator.can_move_next(Some(ym(2026, 9))));
    }

    #[test]
    fn test_month_range_stepping() {
        let calculator = MonthRangeCalculator::new(ym(2023, 5), ym(2026, 10));

        assert_eq!(calculator.previous_month(None), ym(2026, 10));
        assert_eq!(calculator.next_month(None), ym(2023, 5));

        assert_eq!(calculator.previous_month(Some(ym(2024, 1))), ym(2023, 12));
        assert_eq!(calculator.next_month(Some(ym(2023, 12))), ym(2024, 1));

        assert_eq!(calculator.previous_month(Some(ym(2023, 5))), ym(2023, 5));
        assert_eq!(calculator.next_month(Some(ym(2026, 10))), ym(2026, 10));
    }
}
