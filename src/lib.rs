mod consts;
mod date;
#[cfg(feature = "chrono")]
mod interop;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;
mod week;

pub use consts::*;
pub use date::CalendarDate;
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
#[cfg(feature = "chrono")]
pub use week::{current_iso_week, current_week_number};
pub use week::{IsoWeek, WeekDated, WeekError, iso_week, week_number, weeks_in_year};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
