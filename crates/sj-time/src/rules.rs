//! Year-gated holiday rules, one ordered table per month.
//!
//! Within a month the first matching rule wins, so table order is part of
//! the rule set: a later entry is only consulted when every earlier one
//! failed.

use crate::calendar_date::CalendarDate;
use crate::equinox::{autumnal_equinox_day, equinox_day, Season};
use crate::holiday::Holiday;
use crate::month::Month;
use crate::weekday::Weekday;

/// National Holidays Act (祝日法) comes into force.
pub const HOLIDAY_LAW_EFFECTIVE: (i32, u8, u8) = (1948, 7, 20);

/// The substitute-holiday (振替休日) amendment comes into force.
pub const SUBSTITUTE_HOLIDAY_EFFECTIVE: (i32, u8, u8) = (1973, 4, 12);

/// The two hard-coded "sandwiched weekday" cases of the citizens' holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeDay {
    /// May 4, between Constitution Memorial Day and Children's Day, unless it
    /// is a Sunday (an ordinary Sunday) or a Monday (already a substitute for
    /// May 3).
    GoldenWeek,
    /// A Tuesday falling the day before the autumnal equinox, between
    /// Respect-for-the-Aged Day on Monday and the equinox on Wednesday.
    SilverWeek,
}

/// How a rule picks its day within the month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// A fixed day of the month.
    Fixed {
        /// Day of the month.
        day: u8,
    },
    /// The `n`-th occurrence of `weekday` in the month ("Happy Monday").
    NthWeekday {
        /// Occurrence, 1-based.
        n: u8,
        /// Weekday.
        weekday: Weekday,
    },
    /// The day of an equinox.
    Equinox(Season),
    /// An exact literal date tied to a unique event.
    OneOff {
        /// Year.
        year: i32,
        /// Day of the month.
        day: u8,
    },
    /// A citizens' holiday bridging two holidays.
    Bridge(BridgeDay),
}

/// A holiday, the month it belongs to, how its day is chosen, and the
/// inclusive range of years it applies to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HolidayRule {
    /// Holiday reported when the rule matches.
    pub holiday: Holiday,
    /// Month the rule belongs to.
    pub month: Month,
    /// Day selection.
    pub kind: RuleKind,
    /// First year the rule applies (inclusive).
    pub since: i32,
    /// Last year the rule applies (inclusive).
    pub until: i32,
}

impl HolidayRule {
    const fn new(holiday: Holiday, month: Month, kind: RuleKind) -> Self {
        Self {
            holiday,
            month,
            kind,
            since: i32::MIN,
            until: i32::MAX,
        }
    }

    const fn since(self, year: i32) -> Self {
        Self { since: year, ..self }
    }

    const fn until(self, year: i32) -> Self {
        Self { until: year, ..self }
    }

    /// Return `true` if `year` is within the rule's year gate.
    pub fn applies_in(&self, year: i32) -> bool {
        (self.since..=self.until).contains(&year)
    }

    /// Return `true` if `date` is the day this rule designates.
    pub fn matches(&self, date: &CalendarDate) -> bool {
        if date.month() != self.month.number() || !self.applies_in(date.year()) {
            return false;
        }
        match self.kind {
            RuleKind::Fixed { day } => date.day() == day,
            RuleKind::NthWeekday { n, weekday } => date.is_nth_weekday(n, weekday),
            RuleKind::Equinox(season) => equinox_day(season, date.year()) == Some(date.day()),
            RuleKind::OneOff { year, day } => date.year() == year && date.day() == day,
            RuleKind::Bridge(BridgeDay::GoldenWeek) => {
                date.day() == 4 && !matches!(date.weekday(), Weekday::Sunday | Weekday::Monday)
            }
            RuleKind::Bridge(BridgeDay::SilverWeek) => {
                date.weekday() == Weekday::Tuesday
                    && autumnal_equinox_day(date.year())
                        .and_then(|equinox| equinox.checked_sub(1))
                        == Some(date.day())
            }
        }
    }
}

use Holiday::*;
use Month::*;

const fn fixed(day: u8) -> RuleKind {
    RuleKind::Fixed { day }
}

const fn monday(n: u8) -> RuleKind {
    RuleKind::NthWeekday { n, weekday: Weekday::Monday }
}

const JANUARY_RULES: &[HolidayRule] = &[
    HolidayRule::new(NewYearsDay, January, fixed(1)),
    HolidayRule::new(ComingOfAgeDay, January, monday(2)).since(2000),
    HolidayRule::new(ComingOfAgeDay, January, fixed(15)).until(1999),
];

const FEBRUARY_RULES: &[HolidayRule] = &[
    HolidayRule::new(NationalFoundationDay, February, fixed(11)).since(1967),
    HolidayRule::new(FuneralOfEmperorShowa, February, RuleKind::OneOff { year: 1989, day: 24 }),
];

const MARCH_RULES: &[HolidayRule] = &[HolidayRule::new(
    VernalEquinoxDay,
    March,
    RuleKind::Equinox(Season::Vernal),
)];

const APRIL_RULES: &[HolidayRule] = &[
    HolidayRule::new(GreeneryDay, April, fixed(29)).since(1989),
    HolidayRule::new(EmperorsBirthday, April, fixed(29)).until(1988),
    HolidayRule::new(CrownPrinceAkihitosWedding, April, RuleKind::OneOff { year: 1959, day: 10 }),
];

const MAY_RULES: &[HolidayRule] = &[
    HolidayRule::new(ConstitutionMemorialDay, May, fixed(3)),
    HolidayRule::new(CitizensHoliday, May, RuleKind::Bridge(BridgeDay::GoldenWeek)).since(1986),
    HolidayRule::new(ChildrensDay, May, fixed(5)),
];

const JUNE_RULES: &[HolidayRule] = &[HolidayRule::new(
    CrownPrinceNaruhitosWedding,
    June,
    RuleKind::OneOff { year: 1993, day: 9 },
)];

const JULY_RULES: &[HolidayRule] = &[
    HolidayRule::new(MarineDay, July, monday(3)).since(2003),
    HolidayRule::new(MarineDay, July, fixed(20)).since(1996).until(2002),
];

const SEPTEMBER_RULES: &[HolidayRule] = &[
    HolidayRule::new(AutumnalEquinoxDay, September, RuleKind::Equinox(Season::Autumnal)),
    HolidayRule::new(RespectForTheAgedDay, September, monday(3)).since(2003),
    HolidayRule::new(CitizensHoliday, September, RuleKind::Bridge(BridgeDay::SilverWeek))
        .since(2003),
    HolidayRule::new(RespectForTheAgedDay, September, fixed(15)).since(1966).until(2002),
];

const OCTOBER_RULES: &[HolidayRule] = &[
    HolidayRule::new(HealthSportsDay, October, monday(2)).since(2000),
    HolidayRule::new(HealthSportsDay, October, fixed(10)).since(1966).until(1999),
];

const NOVEMBER_RULES: &[HolidayRule] = &[
    HolidayRule::new(CultureDay, November, fixed(3)),
    HolidayRule::new(LaborThanksgivingDay, November, fixed(23)),
    HolidayRule::new(EnthronementCeremony, November, RuleKind::OneOff { year: 1990, day: 12 }),
];

const DECEMBER_RULES: &[HolidayRule] = &[
    HolidayRule::new(EmperorsBirthday, December, fixed(23)).since(1989),
];

/// The ordered rule table for `month`; empty for August and for numbers
/// outside 1–12.
pub fn rules_for(month: u8) -> &'static [HolidayRule] {
    let Some(month) = Month::from_number(month) else {
        return &[];
    };
    match month {
        January => JANUARY_RULES,
        February => FEBRUARY_RULES,
        March => MARCH_RULES,
        April => APRIL_RULES,
        May => MAY_RULES,
        June => JUNE_RULES,
        July => JULY_RULES,
        August => &[],
        September => SEPTEMBER_RULES,
        October => OCTOBER_RULES,
        November => NOVEMBER_RULES,
        December => DECEMBER_RULES,
    }
}

/// The named holiday falling on `date`, ignoring the substitute rule.
pub fn named_holiday(date: &CalendarDate) -> Option<Holiday> {
    if date.ymd() < HOLIDAY_LAW_EFFECTIVE {
        return None;
    }
    rules_for(date.month())
        .iter()
        .find(|rule| rule.matches(date))
        .map(|rule| rule.holiday)
}
