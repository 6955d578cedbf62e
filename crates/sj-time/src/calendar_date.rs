//! `CalendarDate` — an unchecked `(year, month, day, weekday)` tuple.
//!
//! This is the input of the holiday rules. Unlike [`Date`] it carries no
//! range validation: the caller guarantees a normalized Gregorian date and a
//! weekday consistent with it. Nothing here ever normalizes an out-of-range
//! day or month, and nothing panics on one.

use crate::date::{days_from_civil, days_in_month, Date};
use crate::weekday::Weekday;

/// A calendar day with its weekday, compared structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
    weekday: Weekday,
}

impl CalendarDate {
    /// Build from explicit parts; `weekday` is trusted as given.
    pub const fn new(year: i32, month: u8, day: u8, weekday: Weekday) -> Self {
        Self {
            year,
            month,
            day,
            weekday,
        }
    }

    /// Build from `(year, month, day)`, deriving the weekday from the
    /// proleptic Gregorian calendar.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Self {
        let weekday = Weekday::from_days_since_epoch(days_from_civil(year as i64, month, day));
        Self::new(year, month, day, weekday)
    }

    /// Year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month (1–12).
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month (1–31).
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Weekday.
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// `(year, month, day)`; tuples order chronologically.
    pub const fn ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Return `true` if the weekday is Sunday.
    pub fn is_sunday(&self) -> bool {
        self.weekday == Weekday::Sunday
    }

    /// Which occurrence of its weekday this day is within the month:
    /// days 1–7 are the 1st, 8–14 the 2nd, and so on.
    pub fn week_of_month(&self) -> u8 {
        self.day.saturating_sub(1) / 7 + 1
    }

    /// Return `true` if this is the `n`-th `weekday` of its month.
    pub fn is_nth_weekday(&self, n: u8, weekday: Weekday) -> bool {
        self.weekday == weekday && self.week_of_month() == n
    }

    /// The immediately preceding calendar day.
    pub fn preceding_day(&self) -> Self {
        let weekday = self.weekday.pred();
        if self.day > 1 {
            Self::new(self.year, self.month, self.day - 1, weekday)
        } else if self.month > 1 {
            let month = self.month - 1;
            Self::new(self.year, month, days_in_month(self.year, month), weekday)
        } else {
            Self::new(self.year.saturating_sub(1), 12, 31, weekday)
        }
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> Self {
        let (year, month, day) = date.ymd();
        Self::new(year, month, day, date.weekday())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(
            date.year(),
            date.month() as u8,
            date.day() as u8,
            Weekday::from(date.weekday()),
        )
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ({})",
            self.year, self.month, self.day, self.weekday
        )
    }
}
