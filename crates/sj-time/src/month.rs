//! `Month` — the month a holiday rule belongs to.

/// Month of the year, numbered 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// The month numbered `n`, or `None` outside 1–12.
    pub fn from_number(n: u8) -> Option<Self> {
        MONTHS.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }
}
