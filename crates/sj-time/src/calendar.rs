//! `Calendar` trait.
//!
//! A calendar tells working days from days off.

use crate::date::Date;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Saturday and Sunday by default.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// All holidays in the inclusive range `[from, to]`, in date order.
    ///
    /// Weekends are only listed when `include_weekends` is set.
    fn holiday_list(&self, from: Date, to: Date, include_weekends: bool) -> Vec<Date> {
        let mut holidays = Vec::new();
        let mut d = from;
        while d <= to {
            if self.is_holiday(d) && (include_weekends || !self.is_weekend(d)) {
                holidays.push(d);
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        holidays
    }
}
