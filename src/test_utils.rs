//! Shorthand constructors for tests.

use crate::{CalendarDate, IsoWeek, Month, Year};

pub(crate) fn year(value: u16) -> Year {
    Year::new(value).unwrap()
}

pub(crate) fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub(crate) fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

pub(crate) fn iso(year: i32, week: u8) -> IsoWeek {
    IsoWeek::new(year, week).unwrap()
}
