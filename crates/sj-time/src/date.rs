//! `Date` type — a validated proleptic Gregorian calendar date.
//!
//! Dates are stored as a serial day number counted from 1970-01-01.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970 (a Thursday).
//! * Negative serials are dates before the epoch.
//! * The valid date range is -9999-01-01 to 9999-12-31.

use crate::weekday::Weekday;
use sj_core::ensure;
use sj_core::errors::{Error, Result};

/// A calendar date represented as a day number since 1970-01-01.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i32", into = "i32")
)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// First supported year.
    pub const MIN_YEAR: i32 = -9999;

    /// Last supported year.
    pub const MAX_YEAR: i32 = 9999;

    /// Minimum valid date: January 1, -9999.
    pub const MIN: Date = Date(days_from_civil(Self::MIN_YEAR as i64, 1, 1) as i32);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(days_from_civil(Self::MAX_YEAR as i64, 12, 31) as i32);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside [`Date::MIN`, `Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(days_from_civil(year as i64, month, day) as i32))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (i32, u8, u8) {
        civil_from_days(self.0 as i64)
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_days_since_epoch(self.0 as i64)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 as i64 + n as i64;
        if serial < Self::MIN.0 as i64 || serial > Self::MAX.0 as i64 {
            return Err(Error::Date(format!(
                "date arithmetic: {self} {n:+} days leaves the supported range"
            )));
        }
        Ok(Date(serial as i32))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Monday, 2024, 1)` returns the
    /// second Monday of January 2024 (2024-01-08).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, if the month does not have an `n`-th
    /// such weekday, or if the month is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        ensure!(n >= 1, "nth_weekday: n must be >= 1, got {n}");
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = (target_wd as i32 - first_wd as i32).rem_euclid(7);
        let day = 1 + skip + 7 * (n as i32 - 1);
        if day > days_in_month(year, month) as i32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

/// # Panics
/// Panics if the result leaves the supported range; use [`Date::add_days`]
/// for a checked alternative.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

/// # Panics
/// Panics if the result leaves the supported range.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<i32> for Date {
    type Error = Error;

    fn try_from(serial: i32) -> Result<Self> {
        Date::from_serial(serial)
    }
}

impl From<Date> for i32 {
    fn from(date: Date) -> i32 {
        date.0
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(date.year(), date.month() as u8, date.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(date: Date) -> Result<Self> {
        let (y, m, d) = date.ymd();
        chrono::NaiveDate::from_ymd_opt(y, m as u32, d as u32)
            .ok_or_else(|| Error::Date(format!("{date} is not representable as chrono::NaiveDate")))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
///
/// Months outside 1–12 are reported as 31 days long so that callers working
/// on unchecked input never panic.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian `(year, month, day)`.
///
/// Works on any input without panicking; an out-of-range day simply rolls
/// into the following month.
pub(crate) const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = (if y >= 0 { y } else { y - 399 }) / 400;
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = (if z >= 0 { z } else { z - 146_096 }) / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y as i32, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1970, 1, 1).unwrap();
        assert_eq!(d.serial(), 0);
        assert_eq!(Date::try_from(0).unwrap(), d);
        assert_eq!(d.weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1948, 7, 20),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (1969, 12, 31),
            (2024, 5, 6),
            (-9999, 1, 1),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "round trip failed for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Date::from_ymd(2024, 1, 1).unwrap().weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(2024, 1, 6).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(Date::from_ymd(1948, 7, 20).unwrap().weekday(), Weekday::Tuesday);
        assert_eq!(Date::from_ymd(1973, 4, 12).unwrap().weekday(), Weekday::Thursday);
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 1, 0).is_err());
        assert!(Date::from_ymd(10_000, 1, 1).is_err());
        assert!(Date::from_serial(Date::MAX.serial() + 1).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2023, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.ymd(), (2023, 2, 1));
        assert_eq!(i32::from(d2) - i32::from(d), 31);
        assert_eq!((d - 1).ymd(), (2022, 12, 31));
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
    }

    #[test]
    fn test_nth_weekday() {
        // 2nd Monday of January 2024 = January 8
        let d = Date::nth_weekday(2, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 1, 8).unwrap());

        // 3rd Monday of July 2003 = July 21
        let d = Date::nth_weekday(3, Weekday::Monday, 2003, 7).unwrap();
        assert_eq!(d, Date::from_ymd(2003, 7, 21).unwrap());

        // 5th Monday of January 2024 = January 29
        let d = Date::nth_weekday(5, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(d, Date::from_ymd(2024, 1, 29).unwrap());
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2024
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(matches!(
            Date::nth_weekday(0, Weekday::Monday, 2024, 1),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(1989, 2, 24).unwrap();
        assert_eq!(d.to_string(), "1989-02-24");
        assert_eq!(format!("{d:?}"), "Date(1989-02-24)");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_round_trip() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let d = Date::try_from(naive).unwrap();
        assert_eq!(d.ymd(), (2024, 5, 6));
        assert_eq!(chrono::NaiveDate::try_from(d).unwrap(), naive);
    }
}
