/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01, the epoch used by day counts
pub(crate) const EPOCH_SHIFT: i64 = 719_468;

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;
/// Offset of Thursday from Monday; an ISO week belongs to the year of its Thursday
pub const THURSDAY_OFFSET: u8 = 3;
/// January 4 always falls in ISO week 1
pub const WEEK_ONE_ANCHOR_DAY: u8 = 4;
/// First ISO week of a year
pub const MIN_WEEK: u8 = 1;
/// Weeks in a short ISO year
pub const WEEKS_IN_SHORT_YEAR: u8 = 52;
/// Weeks in a long ISO year
pub const MAX_WEEK: u8 = 53;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Week designator in ISO 8601 week dates (`2026-W01`)
pub const WEEK_DESIGNATOR: char = 'W';
