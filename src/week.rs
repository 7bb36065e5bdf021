use std::fmt;
use std::str::FromStr;

use crate::ParseError;
use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_WEEK, JANUARY, MAX_WEEK, MIN_DAY, MIN_WEEK, THURSDAY_OFFSET,
    WEEK_DESIGNATOR, WEEK_ONE_ANCHOR_DAY, WEEKS_IN_SHORT_YEAR,
};
use crate::date::{CalendarDate, civil_from_days, days_from_civil, parse_u8};
use crate::types::{Weekday, is_leap_year};

/// Anything with a civil (local calendar) year, month, day and weekday.
///
/// `iso_weekday` defaults to the weekday derived from the civil date; types
/// that already carry a weekday should return it directly.
pub trait WeekDated {
    /// Proleptic-Gregorian `(year, month, day)` in the value's own local calendar.
    fn civil_ymd(&self) -> (i32, u8, u8);

    fn iso_weekday(&self) -> Weekday {
        let (year, month, day) = self.civil_ymd();
        Weekday::from_day_count(days_from_civil(year, month, day))
    }
}

impl WeekDated for CalendarDate {
    fn civil_ymd(&self) -> (i32, u8, u8) {
        (i32::from(self.year()), self.month(), self.day())
    }

    fn iso_weekday(&self) -> Weekday {
        self.weekday()
    }
}

/// An ISO-8601 week: the week-year it belongs to and its number within that year.
///
/// The week-year equals the Gregorian year of the week's Thursday, so it can
/// differ from the calendar year of the Monday or the Sunday.
///
/// Week-years before year 0 display with a leading sign (`-0044-W11`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoWeek {
    year: i32,
    week: u8,
}

impl fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            f.write_str("-")?;
        }
        write!(
            f,
            "{:04}{DATE_SEPARATOR}{WEEK_DESIGNATOR}{:02}",
            self.year.unsigned_abs(),
            self.week
        )
    }
}

/// Error type for ISO week construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// Week number is zero or past the last week of its week-year.
    #[error("Invalid week {week} for week-year {year} (must be {min}-{max})", min = MIN_WEEK)]
    InvalidWeek { year: i32, week: u8, max: u8 },

    /// Weekday digit outside 1-7.
    #[error("Invalid weekday: {0} (must be 1-{max})", max = DAYS_PER_WEEK)]
    InvalidWeekday(u8),

    /// Invalid week date format.
    #[error("Invalid week format: {0}")]
    InvalidFormat(String),

    /// Error parsing a numeric component.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// ISO-8601 week number (1-53) of `date`.
///
/// Dates in the last days of December can belong to week 1 of the next
/// week-year, and dates in the first days of January to week 52 or 53 of the
/// previous one. Use [`iso_week`] when the week-year matters.
pub fn week_number<D: WeekDated + ?Sized>(date: &D) -> u8 {
    iso_week(date).week()
}

/// ISO-8601 week-year and week number of `date`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn iso_week<D: WeekDated + ?Sized>(date: &D) -> IsoWeek {
    let (year, month, day) = date.civil_ymd();
    let target = thursday_of_week(days_from_civil(year, month, day), date.iso_weekday());
    let (week_year, _, _) = civil_from_days(target);
    let first_thursday = first_thursday(week_year);

    let week = weeks_between(first_thursday, target) + 1;
    tracing::trace!(target_day = target, first_thursday, week_year, week, "resolved iso week");
    debug_assert!((1..=i64::from(MAX_WEEK)).contains(&week));

    IsoWeek {
        year: week_year,
        week: week as u8,
    }
}

/// Week number of today's date in the local timezone.
#[cfg(feature = "chrono")]
pub fn current_week_number() -> u8 {
    current_iso_week().week()
}

/// Week-year and week of today's date in the local timezone.
#[cfg(feature = "chrono")]
pub fn current_iso_week() -> IsoWeek {
    let today = chrono::Local::now().date_naive();
    tracing::debug!(%today, "sampled local clock");
    iso_week(&today)
}

/// Number of ISO weeks (52 or 53) in `year`.
///
/// A week-year is long when January 1st is a Thursday, or when it is a leap
/// year starting on a Wednesday.
pub const fn weeks_in_year(year: i32) -> u8 {
    let jan1 = Weekday::from_day_count(days_from_civil(year, JANUARY, MIN_DAY));
    match jan1 {
        Weekday::Thursday => MAX_WEEK,
        Weekday::Wednesday if is_leap_year(year) => MAX_WEEK,
        _ => WEEKS_IN_SHORT_YEAR,
    }
}

/// Day count of the Thursday in the same Monday-Sunday week as `days`.
const fn thursday_of_week(days: i64, weekday: Weekday) -> i64 {
    days + THURSDAY_OFFSET as i64 - weekday.days_from_monday() as i64
}

/// Day count of the Thursday of week 1 of `year`.
const fn first_thursday(year: i32) -> i64 {
    let anchor = days_from_civil(year, JANUARY, WEEK_ONE_ANCHOR_DAY);
    thursday_of_week(anchor, Weekday::from_day_count(anchor))
}

/// Whole weeks from `from` to `to`, rounded to the nearest week.
const fn weeks_between(from: i64, to: i64) -> i64 {
    let per_week = DAYS_PER_WEEK as i64;
    (to - from + per_week / 2).div_euclid(per_week)
}

impl IsoWeek {
    /// Creates a week, validating it against the length of its week-year.
    ///
    /// # Errors
    /// Returns `WeekError::InvalidWeek` if `week` is 0 or past `weeks_in_year(year)`.
    pub fn new(year: i32, week: u8) -> Result<Self, WeekError> {
        let max = weeks_in_year(year);
        if week < MIN_WEEK || week > max {
            return Err(WeekError::InvalidWeek { year, week, max });
        }
        Ok(Self { year, week })
    }

    /// The ISO week-year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The week number within the week-year (1-53)
    pub const fn week(&self) -> u8 {
        self.week
    }

    /// The given day of this week.
    /// Returns `None` if that day falls outside the representable years.
    pub fn day(&self, weekday: Weekday) -> Option<CalendarDate> {
        let monday = first_thursday(self.year) - i64::from(THURSDAY_OFFSET)
            + (i64::from(self.week) - 1) * i64::from(DAYS_PER_WEEK);
        CalendarDate::from_days(monday + i64::from(weekday.days_from_monday()))
    }

    pub fn monday(&self) -> Option<CalendarDate> {
        self.day(Weekday::Monday)
    }

    pub fn sunday(&self) -> Option<CalendarDate> {
        self.day(Weekday::Sunday)
    }

    /// The following week, rolling into week 1 of the next week-year.
    /// Returns `None` on year overflow.
    pub fn next(&self) -> Option<Self> {
        if self.week < weeks_in_year(self.year) {
            Some(Self {
                year: self.year,
                week: self.week + 1,
            })
        } else {
            self.year.checked_add(1).map(|year| Self {
                year,
                week: MIN_WEEK,
            })
        }
    }

    /// The preceding week, rolling into the last week of the previous week-year.
    /// Returns `None` on year overflow.
    pub fn prev(&self) -> Option<Self> {
        if self.week > MIN_WEEK {
            Some(Self {
                year: self.year,
                week: self.week - 1,
            })
        } else {
            self.year.checked_sub(1).map(|year| Self {
                year,
                week: weeks_in_year(year),
            })
        }
    }

    /// Checks whether `date` falls in this week
    pub fn contains<D: WeekDated + ?Sized>(&self, date: &D) -> bool {
        iso_week(date) == *self
    }

    /// Parses a week (`YYYY-Www`, `YYYYWww`) or a week date (`YYYY-Www-D`,
    /// `YYYYWwwD`), returning the weekday when one is present.
    ///
    /// # Errors
    /// Returns `WeekError` if the text is malformed or names a week or
    /// weekday that does not exist.
    pub fn parse_week_date(s: &str) -> Result<(Self, Option<Weekday>), WeekError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        let (year_part, rest) = trimmed.split_once(WEEK_DESIGNATOR).ok_or_else(|| {
            WeekError::InvalidFormat(format!(
                "Missing week designator '{WEEK_DESIGNATOR}': {trimmed}"
            ))
        })?;

        // Extended form separates every component, basic form none of them.
        let (year_part, week_part, day_part) = match year_part.strip_suffix(DATE_SEPARATOR) {
            Some(year_part) => match rest.split_once(DATE_SEPARATOR) {
                Some((week_part, day_part)) => (year_part, week_part, Some(day_part)),
                None => (year_part, rest, None),
            },
            None => match (rest.get(..2), rest.get(2..)) {
                (Some(week_part), Some("")) => (year_part, week_part, None),
                (Some(week_part), Some(day_part)) => (year_part, week_part, Some(day_part)),
                _ => return Err(WeekError::InvalidFormat(trimmed.to_owned())),
            },
        };

        if !is_digits(week_part, 2) || day_part.is_some_and(|d| !is_digits(d, 1)) {
            return Err(WeekError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_week_year(year_part)?;
        let week = Self::new(year, parse_u8(week_part)?)?;
        let weekday = day_part.map(parse_weekday_digit).transpose()?;
        Ok((week, weekday))
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a week-year of at least four digits with an optional leading sign.
fn parse_week_year(s: &str) -> Result<i32, ParseError> {
    let invalid = || ParseError::InvalidFormat(s.to_owned());
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    // Parse with the sign attached so `i32::MIN` stays reachable.
    s.parse::<i32>().map_err(|_| invalid())
}

fn parse_weekday_digit(s: &str) -> Result<Weekday, WeekError> {
    let n = parse_u8(s)?;
    if !(1..=DAYS_PER_WEEK).contains(&n) {
        return Err(WeekError::InvalidWeekday(n));
    }
    Ok(Weekday::from_days_from_monday(n - 1))
}

impl FromStr for IsoWeek {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_week_date(s).map(|(week, _)| week)
    }
}

impl From<CalendarDate> for IsoWeek {
    fn from(date: CalendarDate) -> Self {
        iso_week(&date)
    }
}

impl serde::Serialize for IsoWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for IsoWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
