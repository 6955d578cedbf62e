//! Japan calendar.

use sj_core::errors::Result;

use crate::calendar::Calendar;
use crate::calendar_date::CalendarDate;
use crate::date::Date;
use crate::holiday::{holiday, Observance};

/// Japan calendar.
///
/// Weekends are Saturday and Sunday. A weekday is a holiday when
/// [`holiday`](crate::holiday::holiday) reports a national holiday or a
/// substitute holiday for it:
/// * New Year's Day (Jan 1)
/// * Coming-of-Age Day (Jan 15; 2nd Monday in January since 2000)
/// * National Foundation Day (Feb 11, since 1967)
/// * Vernal Equinox Day (approx Mar 20–21)
/// * Emperor's Birthday (Apr 29 until 1988; Dec 23 since 1989)
/// * Greenery Day (Apr 29, since 1989)
/// * Constitution Memorial Day (May 3)
/// * Citizens' Holiday (May 4 on Tuesday–Saturday, since 1986; the Tuesday
///   before a Wednesday autumnal equinox, since 2003)
/// * Children's Day (May 5)
/// * Marine Day (Jul 20 from 1996; 3rd Monday in July since 2003)
/// * Respect-for-the-Aged Day (Sep 15 from 1966; 3rd Monday in September
///   since 2003)
/// * Autumnal Equinox Day (approx Sep 22–24)
/// * Health-Sports Day (Oct 10 from 1966; 2nd Monday in October since 2000)
/// * Culture Day (Nov 3)
/// * Labor Thanksgiving Day (Nov 23)
/// * four one-off imperial ceremonies (1959, 1989, 1990, 1993)
///
/// From 1973-04-12, a Monday following a Sunday holiday is observed as a
/// substitute holiday (*furikae kyūjitsu*).
#[derive(Debug, Clone, Copy, Default)]
pub struct Japan;

impl Japan {
    /// The holiday observed on `date`, if any.
    pub fn observance(&self, date: Date) -> Option<Observance> {
        holiday(&CalendarDate::from(date))
    }

    /// Every observance in `year`, in date order, weekends included.
    ///
    /// # Errors
    /// Returns an error if `year` is outside the supported date range.
    pub fn holidays_in_year(&self, year: i32) -> Result<Vec<(Date, Observance)>> {
        let last = Date::from_ymd(year, 12, 31)?;
        let mut d = Date::from_ymd(year, 1, 1)?;
        let mut holidays = Vec::new();
        loop {
            if let Some(observance) = self.observance(d) {
                holidays.push((d, observance));
            }
            if d == last {
                break;
            }
            d += 1;
        }
        Ok(holidays)
    }
}

impl Calendar for Japan {
    fn name(&self) -> &str {
        "Japan"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && self.observance(date).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::Holiday;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn golden_week_2009() {
        let cal = Japan;
        // May 3 is a Sunday, May 4 its substitute, May 5 Children's Day.
        assert!(cal.is_holiday(date(2009, 5, 3)));
        assert_eq!(
            cal.observance(date(2009, 5, 4)),
            Some(Observance::Substitute { observed: Holiday::ConstitutionMemorialDay })
        );
        assert!(cal.is_holiday(date(2009, 5, 5)));
        assert!(cal.is_business_day(date(2009, 5, 6)));
    }

    #[test]
    fn saturday_is_weekend_without_holiday() {
        let cal = Japan;
        // 2009-05-02 is a Saturday.
        assert!(cal.is_weekend(date(2009, 5, 2)));
        assert!(cal.is_holiday(date(2009, 5, 2)));
        assert_eq!(cal.observance(date(2009, 5, 2)), None);
    }

    #[test]
    fn normal_business_day() {
        let cal = Japan;
        // 2023-06-15 is a Thursday
        assert!(cal.is_business_day(date(2023, 6, 15)));
    }

    #[test]
    fn silver_week_2009() {
        let cal = Japan;
        // Saturday 19th through Wednesday 23rd are all off.
        for d in 19..=23 {
            assert!(cal.is_holiday(date(2009, 9, d)), "2009-09-{d}");
        }
        assert!(cal.is_business_day(date(2009, 9, 18)));
        assert!(cal.is_business_day(date(2009, 9, 24)));
        assert_eq!(
            cal.observance(date(2009, 9, 22)),
            Some(Observance::Holiday(Holiday::CitizensHoliday))
        );
    }

    #[test]
    fn holidays_in_year_rejects_unsupported_years() {
        assert!(Japan.holidays_in_year(10_000).is_err());
        assert!(Japan.holidays_in_year(1947).unwrap().is_empty());
    }
}
