//! Per-day holiday information for calendar views.
//!
//! A month view styles a day as a day off when it is a Sunday or any kind
//! of holiday; Saturdays are left to the renderer.

use sj_core::errors::Result;
use tracing::debug;

use crate::calendar_date::CalendarDate;
use crate::date::{days_in_month, Date};
use crate::holiday::{holiday, NameStyle, Observance};

/// Holiday facts about a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayInfo {
    date: Date,
    observance: Option<Observance>,
    is_sunday: bool,
}

impl DayInfo {
    /// Look up `date`.
    pub fn new(date: Date) -> Self {
        let day = CalendarDate::from(date);
        Self {
            date,
            observance: holiday(&day),
            is_sunday: day.is_sunday(),
        }
    }

    /// One entry per day of `month` in `year`.
    ///
    /// # Errors
    /// Returns an error if the month or year is out of range.
    pub fn for_month(year: i32, month: u8) -> Result<Vec<Self>> {
        let first = Date::from_ymd(year, month, 1)?;
        let len = days_in_month(year, month);
        let days: Vec<Self> = (0..i32::from(len)).map(|i| Self::new(first + i)).collect();
        debug!(
            year,
            month,
            holidays = days.iter().filter(|d| d.observance.is_some()).count(),
            "built month"
        );
        Ok(days)
    }

    /// The day.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Holiday observed on the day, if any.
    pub fn observance(&self) -> Option<Observance> {
        self.observance
    }

    /// English holiday name, or `""`.
    pub fn holiday_name(&self) -> &'static str {
        self.holiday_name_in(NameStyle::English)
    }

    /// Holiday name in `style`, or `""`.
    pub fn holiday_name_in(&self, style: NameStyle) -> &'static str {
        self.observance.map_or("", |o| o.name_in(style))
    }

    /// Return `true` if the day is a Sunday.
    pub fn is_sunday(&self) -> bool {
        self.is_sunday
    }

    /// Return `true` if the day is a Sunday or a holiday of any kind.
    pub fn is_day_off(&self) -> bool {
        self.is_sunday || self.observance.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_holiday_and_substitute() {
        let sunday = DayInfo::new(Date::from_ymd(2024, 5, 5).unwrap());
        assert!(sunday.is_sunday());
        assert!(sunday.is_day_off());
        assert_eq!(sunday.holiday_name(), "Children's Day");

        let monday = DayInfo::new(Date::from_ymd(2024, 5, 6).unwrap());
        assert!(!monday.is_sunday());
        assert!(monday.is_day_off());
        assert_eq!(monday.holiday_name_in(NameStyle::Japanese), "振替休日");
    }

    #[test]
    fn plain_saturday_is_not_a_day_off() {
        // 2024-06-15 is a Saturday.
        let sat = DayInfo::new(Date::from_ymd(2024, 6, 15).unwrap());
        assert!(!sat.is_day_off());
        assert_eq!(sat.holiday_name(), "");
    }

    #[test]
    fn for_month_covers_every_day() {
        let feb = DayInfo::for_month(2024, 2).unwrap();
        assert_eq!(feb.len(), 29);
        assert_eq!(feb[0].date(), Date::from_ymd(2024, 2, 1).unwrap());
        let named: Vec<_> = feb
            .iter()
            .filter(|d| d.observance().is_some())
            .map(|d| (d.date().day_of_month(), d.holiday_name()))
            .collect();
        assert_eq!(named, vec![(11, "National Foundation Day"), (12, "Substitute Holiday")]);
        assert!(DayInfo::for_month(2024, 13).is_err());
    }
}
