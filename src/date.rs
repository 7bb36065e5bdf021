use std::str::FromStr;

use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_ERA, EPOCH_SHIFT, GREGORIAN_CYCLE, JANUARY, MIN_DAY,
};
use crate::prelude::*;
use crate::types::{Day, Month, Weekday, Year};
use crate::ParseError;

/// A validated proleptic-Gregorian calendar date with exact day arithmetic.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days elapsed since 1970-01-01 (negative before it).
    pub const fn to_days(&self) -> i64 {
        days_from_civil(self.year.get() as i32, self.month.get(), self.day.get())
    }

    /// Inverse of [`CalendarDate::to_days`].
    /// Returns `None` when the day falls outside the representable years.
    pub fn from_days(days: i64) -> Option<Self> {
        let (y, m, d) = civil_from_days(days);
        let year = u16::try_from(y).ok()?;
        Self::new(year, m, d).ok()
    }

    /// Shifts the date by `days` (negative moves backwards), rolling over
    /// month and year boundaries. Returns `None` if the result leaves the
    /// representable years.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        self.to_days().checked_add(days).and_then(Self::from_days)
    }

    /// Signed number of days from `self` to `other`.
    pub const fn days_until(&self, other: &Self) -> i64 {
        other.to_days() - self.to_days()
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_count(self.to_days())
    }

    /// Day of the year, starting at 1 for January 1st.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn ordinal(&self) -> u16 {
        let jan1 = days_from_civil(self.year.get() as i32, JANUARY, MIN_DAY);
        (self.to_days() - jan1 + 1) as u16
    }
}

/// Days from 1970-01-01 to the given proleptic-Gregorian date.
///
/// Works on the full `i32` year range so week arithmetic can step past the
/// validated years without failing.
#[allow(clippy::cast_lossless)]
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    // Years start in March so the leap day is the last day of the year.
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = y.div_euclid(GREGORIAN_CYCLE as i64);
    let yoe = y - era * GREGORIAN_CYCLE as i64;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * GREGORIAN_CYCLE as i64 + if month <= 2 { 1 } else { 0 };
    (year as i32, month, day)
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s)",
                parts.len()
            )));
        };

        Self::new(parse_u16(year)?, parse_u8(month)?, parse_u8(day)?)
    }
}

pub(crate) fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_and_accessors() {
        let d = CalendarDate::new(1991, 8, 15).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1991, 8, 15));
        assert_eq!(d.year_typed().get(), 1991);
    }

    #[test]
    fn test_new_rejects_invalid_components() {
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_day_count_epoch() {
        assert_eq!(date(1970, 1, 1).to_days(), 0);
        assert_eq!(date(1970, 1, 2).to_days(), 1);
        assert_eq!(date(1969, 12, 31).to_days(), -1);
        assert_eq!(date(2000, 3, 1).to_days(), 11_017);
    }

    #[test]
    fn test_civil_round_trip_over_span() {
        // Every day from 1899-12-01 through 2101-01-31 survives a day-count round trip
        let start = date(1899, 12, 1).to_days();
        let end = date(2101, 1, 31).to_days();
        let mut expected = date(1899, 12, 1);
        for days in start..=end {
            let d = CalendarDate::from_days(days).unwrap();
            assert_eq!(d, expected);
            assert_eq!(d.to_days(), days);
            if let Some(next) = expected.add_days(1) {
                expected = next;
            }
        }
    }

    #[test]
    fn test_civil_outside_validated_years() {
        assert_eq!(civil_from_days(days_from_civil(0, 12, 31)), (0, 12, 31));
        assert_eq!(civil_from_days(days_from_civil(10000, 1, 4)), (10000, 1, 4));
        assert_eq!(days_from_civil(0, 12, 31) + 1, date(1, 1, 1).to_days());
    }

    #[test]
    fn test_add_days_rollover() {
        struct TestCase {
            from: (u16, u8, u8),
            days: i64,
            to: (u16, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                from: (2024, 2, 28),
                days: 1,
                to: (2024, 2, 29),
                description: "into leap day",
            },
            TestCase {
                from: (2023, 2, 28),
                days: 1,
                to: (2023, 3, 1),
                description: "over missing leap day",
            },
            TestCase {
                from: (2025, 12, 29),
                days: 3,
                to: (2026, 1, 1),
                description: "across year end",
            },
            TestCase {
                from: (2023, 1, 1),
                days: -3,
                to: (2022, 12, 29),
                description: "backwards across year start",
            },
            TestCase {
                from: (1900, 2, 28),
                days: 1,
                to: (1900, 3, 1),
                description: "century non-leap year",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.from;
            let got = date(y, m, d).add_days(case.days).unwrap();
            let (ty, tm, td) = case.to;
            assert_eq!(got, date(ty, tm, td), "{}", case.description);
        }
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert_eq!(date(1, 1, 1).add_days(-1), None);
        assert_eq!(date(9999, 12, 31).add_days(1), None);
        assert_eq!(date(2024, 1, 1).add_days(i64::MAX), None);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(2024, 1, 1).days_until(&date(2025, 1, 1)), 366);
        assert_eq!(date(2025, 1, 1).days_until(&date(2024, 1, 1)), -366);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2023, 1, 1).weekday(), Weekday::Sunday);
        assert_eq!(date(2020, 12, 31).weekday(), Weekday::Thursday);
        assert_eq!(date(1, 1, 1).weekday(), Weekday::Monday);
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(date(2024, 1, 1).ordinal(), 1);
        assert_eq!(date(2024, 12, 31).ordinal(), 366);
        assert_eq!(date(2023, 12, 31).ordinal(), 365);
        assert_eq!(date(2023, 3, 1).ordinal(), 60);
    }

    #[test]
    fn test_parse_and_display() {
        let d = "1991-08-15".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(1991, 8, 15));
        assert_eq!(d.to_string(), "1991-08-15");
        assert_eq!(date(7, 1, 2).to_string(), "0007-01-02");
        assert_eq!(" 2024-02-29 ".parse::<CalendarDate>().unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2024-01".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2024-01-XX".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2020, 12, 31);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2020-12-31""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());
    }
}
