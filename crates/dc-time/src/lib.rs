//! # dc-time
//!
//! Date, weekday, and business-day calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and built-in implementations.
pub mod calendar;

/// Concrete calendar implementations (holiday tables).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Month` — month-of-year enum.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::UkBankHolidays;
pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
