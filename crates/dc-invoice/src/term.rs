//! `PaymentTerm` — a validated count of days.

use dc_core::errors::{Error, Result};
use dc_core::parsers::parse_term_days;

/// A non-negative number of days added to an invoice date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PaymentTerm(u32);

impl PaymentTerm {
    /// A term of `days` days.
    pub fn new(days: u32) -> Self {
        Self(days)
    }

    /// Parse free-text payment-terms input.
    ///
    /// Empty, non-numeric, fractional, and negative input are all rejected
    /// with [`Error::InvalidPaymentTerms`].
    pub fn parse(input: &str) -> Result<Self> {
        parse_term_days(input)
            .map(Self)
            .ok_or(Error::InvalidPaymentTerms)
    }

    /// The number of days.
    pub fn days(&self) -> u32 {
        self.0
    }
}
