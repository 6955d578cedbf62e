//! # shukujitsu
//!
//! Japanese national holidays (*shukujitsu*) from the 1948 holiday law
//! onwards: fixed-date and Happy-Monday holidays, equinox days, citizens'
//! holidays, one-off imperial ceremonies and substitute holidays.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `sj-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! shukujitsu = "0.1"
//! ```
//!
//! ```rust
//! use shukujitsu::{holiday_name, is_sunday, vernal_equinox_day};
//!
//! assert_eq!(holiday_name(2024, 1, 8), "Coming-of-Age Day");
//! assert_eq!(holiday_name(2024, 5, 6), "Substitute Holiday");
//! assert_eq!(holiday_name(2024, 5, 7), "");
//! assert!(is_sunday(2024, 5, 5));
//! assert_eq!(vernal_equinox_day(2023), Some(21));
//! ```
//!
//! Days off in a range come from the [`Calendar`] trait:
//!
//! ```rust
//! use shukujitsu::{Calendar, Date, Japan};
//!
//! let from = Date::from_ymd(2009, 9, 19)?;
//! let to = Date::from_ymd(2009, 9, 23)?;
//! assert_eq!(Japan.holiday_list(from, to, false).len(), 3);
//! # Ok::<(), shukujitsu::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use sj_core as core;

/// Dates, calendars, equinoxes, and holiday rules.
pub use sj_time as time;

pub use sj_time::{
    autumnal_equinox_day, holiday, holiday_name, is_sunday, vernal_equinox_day,
    Calendar, CalendarDate, Date, DayInfo, Holiday, Japan,
    NameStyle, Observance, Season, Weekday,
};
