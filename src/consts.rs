/// Number of months in a calendar year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Label used for the unbounded ("all time") period
pub const UNBOUNDED_LABEL: &str = "all";

/// Year/month separator in period descriptions
pub const DATE_SEPARATOR: char = '-';
