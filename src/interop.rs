//! Adapters between this crate's date types and `chrono`.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::ParseError;
use crate::date::CalendarDate;
use crate::types::Weekday;
use crate::week::WeekDated;

impl From<chrono::Weekday> for Weekday {
    #[allow(clippy::cast_possible_truncation)]
    fn from(weekday: chrono::Weekday) -> Self {
        Self::from_days_from_monday(weekday.num_days_from_monday() as u8)
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
            Weekday::Sunday => Self::Sun,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
impl WeekDated for NaiveDate {
    fn civil_ymd(&self) -> (i32, u8, u8) {
        (self.year(), self.month() as u8, self.day() as u8)
    }

    fn iso_weekday(&self) -> Weekday {
        Datelike::weekday(self).into()
    }
}

/// Uses the calendar date in the value's own timezone.
impl<Tz: TimeZone> WeekDated for DateTime<Tz> {
    fn civil_ymd(&self) -> (i32, u8, u8) {
        self.date_naive().civil_ymd()
    }

    fn iso_weekday(&self) -> Weekday {
        self.date_naive().iso_weekday()
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = ParseError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .map_err(|_| ParseError::InvalidFormat(format!("Year out of range: {}", date.year())))?;
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}

impl CalendarDate {
    /// Converts to a `chrono::NaiveDate`.
    /// Returns `None` only if chrono cannot represent the date.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year()),
            u32::from(self.month()),
            u32::from(self.day()),
        )
    }
}
