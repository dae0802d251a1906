//! Concrete calendar implementations.

/// United Kingdom bank-holiday calendar.
pub mod united_kingdom;

pub use united_kingdom::UkBankHolidays;
