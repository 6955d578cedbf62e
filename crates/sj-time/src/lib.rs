//! # sj-time
//!
//! Dates, business-day calendars, and Japanese public-holiday rules.
//!
//! The holiday query is a pure function of the date: see
//! [`holiday::holiday`] for the full result and [`holiday_name`] /
//! [`is_sunday`] for the string-and-flag form consumed by calendar views.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait.
pub mod calendar;

/// `CalendarDate` — unchecked `(year, month, day, weekday)` input.
pub mod calendar_date;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Per-day holiday information for calendar views.
pub mod day_info;

/// Vernal and autumnal equinox approximation.
pub mod equinox;

/// Holidays, observances, and the holiday query.
pub mod holiday;

/// `Month` — month of the year.
pub mod month;

/// Year-gated holiday rule tables.
pub mod rules;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use calendar_date::CalendarDate;
pub use calendars::Japan;
pub use date::Date;
pub use day_info::DayInfo;
pub use equinox::{autumnal_equinox_day, vernal_equinox_day, Season};
pub use holiday::{holiday, holiday_name, is_sunday, Holiday, NameStyle, Observance};
pub use month::Month;
pub use rules::{BridgeDay, HolidayRule, RuleKind};
pub use weekday::Weekday;
