//! United Kingdom bank-holiday calendar.
//!
//! The holidays are an explicit table of observed England & Wales bank
//! holidays — gazetted dates, substitute days included — rather than rules
//! derived from Easter arithmetic. The table is business-policy data and
//! covers 2023 through 2028.

use crate::calendar::Calendar;
use crate::date::Date;
use dc_core::errors::{Error, Result};
use dc_core::parsers::parse_iso_date;
use std::collections::HashSet;

/// Observed England & Wales bank holidays, 2023–2028.
#[rustfmt::skip]
const BANK_HOLIDAYS: [&str; 49] = [
    "2023-01-02", "2023-04-07", "2023-04-10", "2023-05-01", "2023-05-08", "2023-05-29", "2023-08-28", "2023-12-25", "2023-12-26",
    "2024-01-01", "2024-03-29", "2024-04-01", "2024-05-06", "2024-05-27", "2024-08-26", "2024-12-25", "2024-12-26",
    "2025-01-01", "2025-04-18", "2025-04-21", "2025-05-05", "2025-05-26", "2025-08-25", "2025-12-25", "2025-12-26",
    "2026-01-01", "2026-04-03", "2026-04-06", "2026-05-04", "2026-05-25", "2026-08-31", "2026-12-25", "2026-12-28",
    "2027-01-01", "2027-03-26", "2027-03-29", "2027-05-03", "2027-05-31", "2027-08-30", "2027-12-27", "2027-12-28",
    "2028-01-03", "2028-04-14", "2028-04-17", "2028-05-01", "2028-05-29", "2028-08-28", "2028-12-25", "2028-12-26",
];

/// A business-day calendar over the fixed UK bank-holiday table.
///
/// The set of holidays is immutable after construction. Dates outside the
/// covered 2023–2028 span are treated as ordinary weekdays: the calendar is
/// not authoritative beyond its compiled range.
#[derive(Debug, Clone)]
pub struct UkBankHolidays {
    holidays: HashSet<i32>,
}

impl UkBankHolidays {
    /// Build the calendar from the compiled holiday table.
    pub fn new() -> Self {
        Self::from_iso_dates(BANK_HOLIDAYS).expect("builtin bank-holiday table is valid")
    }

    /// Build a calendar from a list of ISO `YYYY-MM-DD` strings.
    ///
    /// Duplicates collapse by set semantics. A malformed entry is rejected
    /// with [`Error::Holiday`] naming its position; nothing is silently
    /// ignored.
    pub fn from_iso_dates<'a, I>(dates: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut holidays = HashSet::new();
        for (index, entry) in dates.into_iter().enumerate() {
            let date = parse_iso_date(entry)
                .and_then(|(y, m, d)| Date::from_ymd(y, m, d).ok())
                .ok_or_else(|| Error::Holiday {
                    index,
                    entry: entry.to_string(),
                })?;
            holidays.insert(date.serial());
        }
        Ok(Self { holidays })
    }

    /// Return `true` iff `date` is in the holiday table.
    ///
    /// Weekends are not table entries; this is exact-date membership only.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains(&date.serial())
    }

    /// Number of distinct holidays in the table.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Default for UkBankHolidays {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar for UkBankHolidays {
    fn name(&self) -> &str {
        "UK (Bank Holidays)"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.contains(date)
    }
}
