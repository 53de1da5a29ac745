//! Builders shared by the unit tests.

use crate::{Period, RangeBoundPeriod, YearMonth};

pub const fn ym(year: i32, month: u8) -> YearMonth {
    YearMonth::new(year, month)
}

pub const fn period_year(year: i32) -> Period {
    Period::Year { year }
}

pub const fn period_month(year: i32, month: u8) -> Period {
    Period::Month { year, month }
}

pub const fn bounded(selected: Period, minimum: Period, maximum: Period) -> RangeBoundPeriod {
    RangeBoundPeriod::new(selected, minimum, maximum)
}
