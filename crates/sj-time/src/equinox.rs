//! Vernal and autumnal equinox approximation.
//!
//! Both equinox holidays are proclaimed annually from astronomical
//! observation, so their dates are not fixed. For 1948–2150 the day of the
//! month is approximated by a piecewise linear formula:
//!
//! ```text
//! day = trunc(base + 0.242194 × (year − 1980) − trunc((year − offset) / 4))
//! ```
//!
//! with one `(base, offset)` pair per season and year band. Outside that
//! range the formula is undefined and the day is unknown (`None`).

use tracing::trace;

/// Mean drift of the equinox through the calendar, in days per year.
const DRIFT_PER_YEAR: f64 = 0.242194;

/// Reference year of the formula.
const REFERENCE_YEAR: i32 = 1980;

/// First year with a known approximation (the holiday law dates from 1948).
pub const FIRST_YEAR: i32 = 1948;

/// Last year with a known approximation.
pub const LAST_YEAR: i32 = 2150;

/// Which equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Season {
    /// March equinox (Vernal Equinox Day).
    Vernal,
    /// September equinox (Autumnal Equinox Day).
    Autumnal,
}

/// One year band of the formula.
#[derive(Debug, Clone, Copy)]
struct Band {
    first_year: i32,
    last_year: i32,
    base: f64,
    offset: i32,
}

const VERNAL_BANDS: [Band; 3] = [
    Band { first_year: 1948, last_year: 1979, base: 20.8357, offset: 1983 },
    Band { first_year: 1980, last_year: 2099, base: 20.8431, offset: 1980 },
    Band { first_year: 2100, last_year: 2150, base: 21.851, offset: 1980 },
];

const AUTUMNAL_BANDS: [Band; 3] = [
    Band { first_year: 1948, last_year: 1979, base: 23.2588, offset: 1983 },
    Band { first_year: 1980, last_year: 2099, base: 23.2488, offset: 1980 },
    Band { first_year: 2100, last_year: 2150, base: 24.2488, offset: 1980 },
];

fn bands(season: Season) -> &'static [Band; 3] {
    match season {
        Season::Vernal => &VERNAL_BANDS,
        Season::Autumnal => &AUTUMNAL_BANDS,
    }
}

/// Untruncated day-of-month estimate of the equinox in `year`.
///
/// Returns `None` outside [`FIRST_YEAR`]..=[`LAST_YEAR`].
pub fn equinox_estimate(season: Season, year: i32) -> Option<f64> {
    let Some(band) = bands(season)
        .iter()
        .find(|b| (b.first_year..=b.last_year).contains(&year))
    else {
        trace!(year, ?season, "year outside the equinox approximation range");
        return None;
    };
    // Integer division truncates toward zero; for the pre-1980 band
    // `year - 1983` is negative and must not be floored.
    let leap_correction = (year - band.offset) / 4;
    Some(
        band.base + DRIFT_PER_YEAR * f64::from(year - REFERENCE_YEAR)
            - f64::from(leap_correction),
    )
}

/// Day of the month on which the equinox falls in `year`, or `None` when
/// the year is outside the approximation range.
pub fn equinox_day(season: Season, year: i32) -> Option<u8> {
    equinox_estimate(season, year).map(|d| d.trunc() as u8)
}

/// Day of March on which the vernal equinox falls.
///
/// ```
/// use sj_time::equinox::vernal_equinox_day;
/// assert_eq!(vernal_equinox_day(2023), Some(21));
/// assert_eq!(vernal_equinox_day(1947), None);
/// ```
pub fn vernal_equinox_day(year: i32) -> Option<u8> {
    equinox_day(Season::Vernal, year)
}

/// Day of September on which the autumnal equinox falls.
pub fn autumnal_equinox_day(year: i32) -> Option<u8> {
    equinox_day(Season::Autumnal, year)
}

/// Untruncated vernal equinox estimate; see [`equinox_estimate`].
pub fn vernal_equinox_estimate(year: i32) -> Option<f64> {
    equinox_estimate(Season::Vernal, year)
}

/// Untruncated autumnal equinox estimate; see [`equinox_estimate`].
pub fn autumnal_equinox_estimate(year: i32) -> Option<f64> {
    equinox_estimate(Season::Autumnal, year)
}
