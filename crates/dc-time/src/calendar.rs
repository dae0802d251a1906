//! `Calendar` trait and built-in implementations.
//!
//! A calendar knows which dates are business days and can count a payment
//! term forward one business day at a time.

use crate::date::Date;
use dc_core::errors::Result;

/// A business-day calendar.
///
/// A business day is a weekday (Monday–Friday) that the calendar does not
/// list as a holiday.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"UK (Bank Holidays)"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Advance `date` by `n` business days.
    ///
    /// Each step moves one calendar day forward and counts it only when it
    /// lands on a business day. `n = 0` returns `date` unchanged, even when
    /// `date` itself is a weekend or holiday: the starting date is an anchor
    /// for counting, never corrected.
    ///
    /// # Errors
    /// Returns `Error::Date` when the walk leaves the representable range.
    fn advance_business_days(&self, date: Date, n: u32) -> Result<Date> {
        let mut current = date;
        let mut remaining = n;
        while remaining > 0 {
            current = current.add_days(1)?;
            if self.is_business_day(current) {
                remaining -= 1;
            }
        }
        Ok(current)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive). Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.is_business_day(d) {
                count += 1;
            }
            d = d + 1;
        }
        sign * count
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
///
/// Useful as a base case and for tables that carry no listed holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}
