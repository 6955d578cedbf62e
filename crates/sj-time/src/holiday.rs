//! Japanese public holidays.
//!
//! [`holiday`] decides whether a day is a national holiday or a substitute
//! holiday (振替休日). It covers the holiday law as amended up to the 2003
//! reform and reports nothing for days before the law took effect on
//! 1948-07-20.
//!
//! # Example
//! ```
//! use sj_time::holiday::{holiday_name, is_sunday};
//!
//! assert_eq!(holiday_name(2024, 1, 8), "Coming-of-Age Day");
//! assert_eq!(holiday_name(2024, 5, 6), "Substitute Holiday");
//! assert_eq!(holiday_name(2024, 6, 12), "");
//! assert!(is_sunday(2024, 5, 5));
//! ```

use tracing::trace;

use crate::calendar_date::CalendarDate;
use crate::rules::{named_holiday, SUBSTITUTE_HOLIDAY_EFFECTIVE};
use crate::weekday::Weekday;

/// A named national holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// January 1.
    NewYearsDay,
    /// January 15 until 1999, 2nd Monday of January since 2000.
    ComingOfAgeDay,
    /// February 11, since 1967.
    NationalFoundationDay,
    /// 1989-02-24.
    FuneralOfEmperorShowa,
    /// Day of the March equinox.
    VernalEquinoxDay,
    /// April 29, since 1989.
    GreeneryDay,
    /// April 29 until 1988, December 23 since 1989.
    EmperorsBirthday,
    /// 1959-04-10.
    CrownPrinceAkihitosWedding,
    /// May 3.
    ConstitutionMemorialDay,
    /// A weekday sandwiched between two holidays.
    CitizensHoliday,
    /// May 5.
    ChildrensDay,
    /// 1993-06-09.
    CrownPrinceNaruhitosWedding,
    /// July 20 from 1996 to 2002, 3rd Monday of July since 2003.
    MarineDay,
    /// Day of the September equinox.
    AutumnalEquinoxDay,
    /// September 15 from 1966 to 2002, 3rd Monday of September since 2003.
    RespectForTheAgedDay,
    /// October 10 from 1966 to 1999, 2nd Monday of October since 2000.
    HealthSportsDay,
    /// November 3.
    CultureDay,
    /// November 23.
    LaborThanksgivingDay,
    /// 1990-11-12.
    EnthronementCeremony,
}

impl Holiday {
    /// Every named holiday, in declaration order.
    pub const ALL: [Holiday; 19] = [
        Holiday::NewYearsDay,
        Holiday::ComingOfAgeDay,
        Holiday::NationalFoundationDay,
        Holiday::FuneralOfEmperorShowa,
        Holiday::VernalEquinoxDay,
        Holiday::GreeneryDay,
        Holiday::EmperorsBirthday,
        Holiday::CrownPrinceAkihitosWedding,
        Holiday::ConstitutionMemorialDay,
        Holiday::CitizensHoliday,
        Holiday::ChildrensDay,
        Holiday::CrownPrinceNaruhitosWedding,
        Holiday::MarineDay,
        Holiday::AutumnalEquinoxDay,
        Holiday::RespectForTheAgedDay,
        Holiday::HealthSportsDay,
        Holiday::CultureDay,
        Holiday::LaborThanksgivingDay,
        Holiday::EnthronementCeremony,
    ];

    /// English name.
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::ComingOfAgeDay => "Coming-of-Age Day",
            Holiday::NationalFoundationDay => "National Foundation Day",
            Holiday::FuneralOfEmperorShowa => "Funeral of Emperor Showa",
            Holiday::VernalEquinoxDay => "Vernal Equinox Day",
            Holiday::GreeneryDay => "Greenery Day",
            Holiday::EmperorsBirthday => "Emperor's Birthday",
            Holiday::CrownPrinceAkihitosWedding => "Crown Prince Akihito's Wedding",
            Holiday::ConstitutionMemorialDay => "Constitution Memorial Day",
            Holiday::CitizensHoliday => "Citizens' Holiday",
            Holiday::ChildrensDay => "Children's Day",
            Holiday::CrownPrinceNaruhitosWedding => "Crown Prince Naruhito's Wedding",
            Holiday::MarineDay => "Marine Day",
            Holiday::AutumnalEquinoxDay => "Autumnal Equinox Day",
            Holiday::RespectForTheAgedDay => "Respect-for-the-Aged Day",
            Holiday::HealthSportsDay => "Health-Sports Day",
            Holiday::CultureDay => "Culture Day",
            Holiday::LaborThanksgivingDay => "Labor Thanksgiving Day",
            Holiday::EnthronementCeremony => "Enthronement Ceremony",
        }
    }

    /// Name as written in the holiday law.
    pub fn japanese_name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "元日",
            Holiday::ComingOfAgeDay => "成人の日",
            Holiday::NationalFoundationDay => "建国記念の日",
            Holiday::FuneralOfEmperorShowa => "昭和天皇の大喪の礼",
            Holiday::VernalEquinoxDay => "春分の日",
            Holiday::GreeneryDay => "みどりの日",
            Holiday::EmperorsBirthday => "天皇誕生日",
            Holiday::CrownPrinceAkihitosWedding => "皇太子明仁親王の結婚の儀",
            Holiday::ConstitutionMemorialDay => "憲法記念日",
            Holiday::CitizensHoliday => "国民の休日",
            Holiday::ChildrensDay => "こどもの日",
            Holiday::CrownPrinceNaruhitosWedding => "皇太子徳仁親王の結婚の儀",
            Holiday::MarineDay => "海の日",
            Holiday::AutumnalEquinoxDay => "秋分の日",
            Holiday::RespectForTheAgedDay => "敬老の日",
            Holiday::HealthSportsDay => "体育の日",
            Holiday::CultureDay => "文化の日",
            Holiday::LaborThanksgivingDay => "勤労感謝の日",
            Holiday::EnthronementCeremony => "即位礼正殿の儀",
        }
    }

    /// Name in the requested style.
    pub fn name_in(&self, style: NameStyle) -> &'static str {
        match style {
            NameStyle::English => self.name(),
            NameStyle::Japanese => self.japanese_name(),
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Language used for holiday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameStyle {
    /// English names (`"Children's Day"`).
    #[default]
    English,
    /// Statutory Japanese names (`"こどもの日"`).
    Japanese,
}

/// English name reported for a substitute holiday.
pub const SUBSTITUTE_HOLIDAY_NAME: &str = "Substitute Holiday";

/// Japanese name reported for a substitute holiday.
pub const SUBSTITUTE_HOLIDAY_JAPANESE_NAME: &str = "振替休日";

/// Why a day is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Observance {
    /// The day is itself a national holiday.
    Holiday(Holiday),
    /// A Monday standing in for `observed`, which fell on the Sunday before.
    Substitute {
        /// The holiday that fell on Sunday.
        observed: Holiday,
    },
}

impl Observance {
    /// English display name; `"Substitute Holiday"` for substitutes.
    pub fn name(&self) -> &'static str {
        self.name_in(NameStyle::English)
    }

    /// Display name in the requested style.
    pub fn name_in(&self, style: NameStyle) -> &'static str {
        match (self, style) {
            (Observance::Holiday(h), _) => h.name_in(style),
            (Observance::Substitute { .. }, NameStyle::English) => SUBSTITUTE_HOLIDAY_NAME,
            (Observance::Substitute { .. }, NameStyle::Japanese) => {
                SUBSTITUTE_HOLIDAY_JAPANESE_NAME
            }
        }
    }

    /// Return `true` for a substitute holiday.
    pub fn is_substitute(&self) -> bool {
        matches!(self, Observance::Substitute { .. })
    }

    /// The underlying holiday: the day's own, or the one it substitutes for.
    pub fn holiday(&self) -> Holiday {
        match *self {
            Observance::Holiday(h) | Observance::Substitute { observed: h } => h,
        }
    }
}

impl std::fmt::Display for Observance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Determine whether `date` is a holiday.
///
/// Named holidays take precedence. Failing that, a Monday on or after
/// 1973-04-12 is a substitute holiday when the day before (a Sunday) is a
/// named holiday. Only that single preceding day is consulted.
pub fn holiday(date: &CalendarDate) -> Option<Observance> {
    if let Some(h) = named_holiday(date) {
        return Some(Observance::Holiday(h));
    }
    if date.weekday() != Weekday::Monday || date.ymd() < SUBSTITUTE_HOLIDAY_EFFECTIVE {
        return None;
    }
    let observed = named_holiday(&date.preceding_day())?;
    trace!(%date, %observed, "substitute holiday");
    Some(Observance::Substitute { observed })
}

/// English holiday name for `(year, month, day)`, or `""` if the day is not
/// a holiday.
///
/// The weekday is derived from the proleptic Gregorian calendar. The date is
/// not validated; callers pass a real calendar date.
pub fn holiday_name(year: i32, month: u8, day: u8) -> &'static str {
    holiday(&CalendarDate::from_ymd(year, month, day)).map_or("", |o| o.name())
}

/// Return `true` if `(year, month, day)` is a Sunday, regardless of holidays.
pub fn is_sunday(year: i32, month: u8, day: u8) -> bool {
    CalendarDate::from_ymd(year, month, day).is_sunday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_table() {
        let cases = [
            ((2024, 1, 1), "New Year's Day"),
            ((2024, 1, 8), "Coming-of-Age Day"),
            ((1988, 4, 29), "Emperor's Birthday"),
            ((1989, 4, 29), "Greenery Day"),
            ((2023, 3, 21), "Vernal Equinox Day"),
            ((2024, 5, 6), "Substitute Holiday"),
        ];
        for ((y, m, d), expected) in cases {
            assert_eq!(holiday_name(y, m, d), expected, "{y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn substitute_records_the_observed_holiday() {
        let monday = CalendarDate::from_ymd(2024, 5, 6);
        let observance = holiday(&monday).unwrap();
        assert!(observance.is_substitute());
        assert_eq!(observance, Observance::Substitute { observed: Holiday::ChildrensDay });
        assert_eq!(observance.holiday(), Holiday::ChildrensDay);
    }

    #[test]
    fn substitute_effective_date() {
        // 1973-04-30 is a Monday after Emperor's Birthday on Sunday the 29th.
        assert_eq!(holiday_name(1973, 4, 30), "Substitute Holiday");
        // 1967-01-02 is a Monday after a Sunday New Year's Day, but predates
        // the amendment.
        assert_eq!(holiday_name(1967, 1, 2), "");
    }

    #[test]
    fn substitute_needs_a_monday() {
        // 2024-02-12 is a Monday after National Foundation Day on Sunday.
        assert_eq!(holiday_name(2024, 2, 12), "Substitute Holiday");
        // 2023-02-12 is a Sunday after a Saturday holiday: no substitute.
        assert_eq!(holiday_name(2023, 2, 12), "");
    }

    #[test]
    fn trusts_the_given_weekday() {
        // 2024-05-06 is really a Monday; passed as a Tuesday it gets no
        // substitute.
        let date = CalendarDate::new(2024, 5, 6, Weekday::Tuesday);
        assert_eq!(holiday(&date), None);
    }

    #[test]
    fn japanese_names() {
        let observance = holiday(&CalendarDate::from_ymd(2024, 5, 6)).unwrap();
        assert_eq!(observance.name_in(NameStyle::Japanese), "振替休日");
        let observance = holiday(&CalendarDate::from_ymd(2024, 5, 5)).unwrap();
        assert_eq!(observance.name_in(NameStyle::Japanese), "こどもの日");
        assert_eq!(observance.to_string(), "Children's Day");
    }

    #[test]
    fn all_names_are_distinct() {
        let mut english: Vec<_> = Holiday::ALL.iter().map(Holiday::name).collect();
        let mut japanese: Vec<_> = Holiday::ALL.iter().map(Holiday::japanese_name).collect();
        english.sort_unstable();
        english.dedup();
        japanese.sort_unstable();
        japanese.dedup();
        assert_eq!(english.len(), Holiday::ALL.len());
        assert_eq!(japanese.len(), Holiday::ALL.len());
    }

    #[test]
    fn sunday_predicate_is_independent_of_holidays() {
        assert!(is_sunday(2024, 5, 5));
        assert!(!is_sunday(2024, 5, 6));
        assert!(is_sunday(1900, 1, 7));
    }
}
