use std::cmp::Ordering;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{ParseError, Period, PeriodOptionCalculator, options::YearOptions, prelude::*};

/// A selected period held between inclusive minimum and maximum bounds.
///
/// Bounds are compared with the year-first rule, so a year-only selection can
/// be checked against month bounds. An unbounded bound imposes no limit.
/// [`RangeBoundPeriod::new`] does not check that the selection lies within the
/// bounds; use [`RangeBoundPeriod::try_new`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{selected} in {minimum}/{maximum}")]
pub struct RangeBoundPeriod {
    selected: Period,
    minimum:  Period,
    maximum:  Period,
}

/// Error type for validated construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum bound is after the maximum bound.
    #[error("Invalid bounds: minimum ({minimum}) is after maximum ({maximum})")]
    InvertedBounds { minimum: Period, maximum: Period },

    /// Selection lies outside the bounds.
    #[error("Selection {selected} is outside {minimum}/{maximum}")]
    SelectionOutOfBounds {
        selected: Period,
        minimum:  Period,
        maximum:  Period,
    },

    /// Error parsing a period.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl RangeBoundPeriod {
    pub const fn new(selected: Period, minimum: Period, maximum: Period) -> Self {
        Self {
            selected,
            minimum,
            maximum,
        }
    }

    /// Creates a range-bound selection, rejecting inverted bounds and a
    /// selection outside them.
    ///
    /// # Errors
    /// Returns `RangeError::InvertedBounds` if minimum > maximum, or
    /// `RangeError::SelectionOutOfBounds` if the selection is outside the bounds.
    pub fn try_new(selected: Period, minimum: Period, maximum: Period) -> Result<Self, RangeError> {
        if minimum.is_after(&maximum) {
            return Err(RangeError::InvertedBounds { minimum, maximum });
        }
        let range = Self::new(selected, minimum, maximum);
        if !range.contains(&selected) {
            return Err(RangeError::SelectionOutOfBounds {
                selected,
                minimum,
                maximum,
            });
        }
        Ok(range)
    }

    /// Parses the three periods from their descriptions and validates them.
    ///
    /// # Errors
    /// Returns `RangeError::Parse` for an unparsable period, otherwise the
    /// errors of [`RangeBoundPeriod::try_new`].
    pub fn parse(selected: &str, minimum: &str, maximum: &str) -> Result<Self, RangeError> {
        Self::try_new(selected.parse()?, minimum.parse()?, maximum.parse()?)
    }

    pub const fn selected(&self) -> Period {
        self.selected
    }

    pub const fn minimum(&self) -> Period {
        self.minimum
    }

    pub const fn maximum(&self) -> Period {
        self.maximum
    }

    /// Replaces the selection without any bound check
    pub fn set_selected(&mut self, selected: Period) {
        self.selected = selected;
    }

    pub const fn selected_year(&self) -> Option<i32> {
        self.selected.year()
    }

    pub const fn selected_month(&self) -> Option<u8> {
        self.selected.month()
    }

    /// Whether `period` is neither before the minimum nor after the maximum
    pub fn contains(&self, period: &Period) -> bool {
        !period.is_before(&self.minimum) && !period.is_after(&self.maximum)
    }

    /// False only when the selection is at or below the minimum
    pub fn can_move_previous(&self) -> bool {
        !matches!(
            self.selected.compare(&self.minimum),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// False only when the selection is at or above the maximum
    pub fn can_move_next(&self) -> bool {
        !matches!(
            self.selected.compare(&self.maximum),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// Steps the selection back unless that would cross the minimum.
    /// A refused step leaves the selection as it was.
    pub fn move_to_previous_if_possible(&mut self) {
        let candidate = self.selected.previous();
        if candidate.is_before(&self.minimum) {
            debug!("refusing {} -> {candidate}: below minimum {}", self.selected, self.minimum);
            return;
        }
        trace!("moved {} -> {candidate}", self.selected);
        self.selected = candidate;
    }

    /// Steps the selection forward unless that would cross the maximum.
    /// A refused step leaves the selection as it was.
    pub fn move_to_next_if_possible(&mut self) {
        let candidate = self.selected.next();
        if candidate.is_after(&self.maximum) {
            debug!("refusing {} -> {candidate}: above maximum {}", self.selected, self.maximum);
            return;
        }
        trace!("moved {} -> {candidate}", self.selected);
        self.selected = candidate;
    }

    /// Picks a year in the picker, keeping the selected month if there is one.
    /// `None` selects all time.
    pub fn select_year(&mut self, year: Option<i32>) {
        self.selected = Period::from_components(year, year.and(self.selected_month()));
    }

    /// Picks a month in the picker. `None` widens the selection to its year.
    ///
    /// With no year selected, the month is placed in the minimum bound's year.
    /// If the minimum has no year either, the selection is left unchanged.
    pub fn select_month(&mut self, month: Option<u8>) {
        self.selected = match (self.selected_year(), month) {
            (year, None) => Period::from_components(year, None),
            (Some(year), Some(month)) => Period::Month { year, month },
            (None, Some(month)) => match self.minimum.year() {
                Some(year) => Period::Month { year, month },
                None => {
                    debug!("no anchor year for month {month}: minimum is {}", self.minimum);
                    return;
                }
            },
        };
    }

    pub const fn option_calculator(&self) -> PeriodOptionCalculator {
        PeriodOptionCalculator::new(self.minimum, self.maximum)
    }

    /// Year options for the picker, most recent first
    pub fn available_years(&self) -> YearOptions {
        self.option_calculator().available_years()
    }

    /// Month options for the selected year, most recent first
    pub fn available_months(&self) -> Vec<u8> {
        self.option_calculator().available_months(self.selected_year())
    }
}
