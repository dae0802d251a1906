//! Due-date calculation.
//!
//! [`DueDateCalculator::compute`] is the validation boundary for raw form
//! input; [`DueDateCalculator::due_date`] is the typed core beneath it.
//! Every failure comes back as a [`DueDateResult`] value carrying its
//! display message — nothing panics past this module.

use crate::term::PaymentTerm;
use dc_core::errors::{Error, Result};
use dc_time::calendar::Calendar;
use dc_time::calendars::united_kingdom::UkBankHolidays;
use dc_time::date::Date;

/// How a payment term is counted forward from the invoice date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculationMode {
    /// Every calendar day counts, weekends and holidays included.
    #[default]
    CalendarDays,
    /// Only weekdays absent from the holiday table count.
    BusinessDays,
}

/// Raw input for one calculation, as the form supplies it.
#[derive(Debug, Clone, Copy)]
pub struct DueDateRequest<'a> {
    /// Invoice date as an ISO `YYYY-MM-DD` string; empty when the user
    /// picked nothing.
    pub invoice_date: &'a str,
    /// Payment terms as entered: a whole number of days.
    pub payment_terms: &'a str,
    /// Counting mode.
    pub mode: CalculationMode,
}

/// A computed due date, or the reason the calculation was rejected.
pub type DueDateResult = Result<Date>;

/// Computes due dates against a business-day calendar.
///
/// The calendar is consulted only in [`CalculationMode::BusinessDays`];
/// calendar-day arithmetic never looks at it.
#[derive(Debug, Clone)]
pub struct DueDateCalculator<C> {
    calendar: C,
}

impl DueDateCalculator<UkBankHolidays> {
    /// A calculator over the built-in UK bank-holiday table.
    pub fn uk() -> Self {
        Self::new(UkBankHolidays::new())
    }
}

impl<C: Calendar> DueDateCalculator<C> {
    /// Create a calculator consulting `calendar` in business-days mode.
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    /// The calendar consulted in business-days mode.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Validate raw form input and compute the due date.
    ///
    /// An empty invoice date is rejected as [`Error::MissingInvoiceDate`];
    /// a non-empty but malformed one is a [`Error::Date`] failure. The
    /// payment terms must parse as a non-negative whole number of days.
    pub fn compute(&self, request: &DueDateRequest<'_>) -> DueDateResult {
        if request.invoice_date.trim().is_empty() {
            return Err(Error::MissingInvoiceDate);
        }
        let start = Date::parse_iso(request.invoice_date)?;
        let term = PaymentTerm::parse(request.payment_terms)?;
        self.due_date(start, term, request.mode)
    }

    /// Compute the due date for already-validated inputs.
    ///
    /// A zero term returns `start` unchanged in either mode. A weekend or
    /// holiday start is used as the counting anchor, never corrected to a
    /// business day.
    pub fn due_date(
        &self,
        start: Date,
        term: PaymentTerm,
        mode: CalculationMode,
    ) -> DueDateResult {
        match mode {
            CalculationMode::CalendarDays => {
                let days = i32::try_from(term.days()).map_err(|_| {
                    Error::Date(format!(
                        "term of {} days exceeds the representable range",
                        term.days()
                    ))
                })?;
                start.add_days(days)
            }
            CalculationMode::BusinessDays => {
                self.calendar.advance_business_days(start, term.days())
            }
        }
    }
}

impl Default for DueDateCalculator<UkBankHolidays> {
    fn default() -> Self {
        Self::uk()
    }
}
