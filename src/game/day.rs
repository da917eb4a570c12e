//! Day numbering
//!
//! Day 0 is 2021-06-19. Today is the player's local calendar date, so the
//! puzzle changes at local midnight. Differences are counted on whole civil
//! days, so daylight saving never shifts the index.

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use std::fmt;

/// The date of day 0
pub const FIRST_DAY: Date = Date {
    year: 2021,
    month: 6,
    day: 19,
};

/// Errors resolving a day number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidFormat(String),
    InvalidDate { year: i32, month: u32, day: u32 },
    BeforeFirstDay(Date),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Expected a date like 2021-06-19, got '{s}'"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a calendar date")
            }
            Self::BeforeFirstDay(date) => {
                write!(f, "{date} is before the first puzzle on {FIRST_DAY}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

/// A proleptic Gregorian calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Build a date, checking month and day ranges
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidDate` for impossible dates such as
    /// February 30th.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Parse `YYYY-MM-DD`
    ///
    /// # Errors
    ///
    /// Returns an error for malformed text or impossible dates.
    pub fn parse(s: &str) -> Result<Self, CalendarError> {
        let bad = || CalendarError::InvalidFormat(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let month = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        Self::new(year, month, day)
    }

    /// Today's date in the local time zone
    #[must_use]
    pub fn today_local() -> Self {
        Local::now().date_naive().into()
    }

    /// Days since 1970-01-01 (negative before)
    #[must_use]
    pub fn days_since_epoch(self) -> i64 {
        // Hinnant's days_from_civil
        let y = i64::from(self.year) - i64::from(self.month <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let m = i64::from(self.month);
        let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(self.day) - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Inverse of [`Date::days_since_epoch`]
    #[must_use]
    pub fn from_days_since_epoch(days: i64) -> Self {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
        let year = (yoe + era * 400 + i64::from(month <= 2)) as i32;
        Self { year, month, day }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u32 {
        self.day
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Day number for a date
///
/// # Errors
///
/// Returns `CalendarError::BeforeFirstDay` for dates before day 0.
pub fn day_index(date: Date) -> Result<usize, CalendarError> {
    let offset = date.days_since_epoch() - FIRST_DAY.days_since_epoch();
    usize::try_from(offset).map_err(|_| CalendarError::BeforeFirstDay(date))
}

/// Day number for the local date today
///
/// # Errors
///
/// Returns `CalendarError::BeforeFirstDay` if the clock reads earlier than day 0.
pub fn today_index() -> Result<usize, CalendarError> {
    day_index(Date::today_local())
}

/// Pick a day uniformly from `0..answer_count`
///
/// # Panics
/// Panics if `answer_count` is zero.
pub fn random_day<R: Rng + ?Sized>(answer_count: usize, rng: &mut R) -> usize {
    rng.random_range(0..answer_count)
}
