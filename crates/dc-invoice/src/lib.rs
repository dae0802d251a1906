//! # dc-invoice
//!
//! Due-date calculation: add a payment term to an invoice date, either as
//! plain calendar days or counting only business days against a calendar.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// The due-date calculator and its input/result types.
pub mod calculator;

/// `PaymentTerm` — a validated count of days.
pub mod term;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calculator::{CalculationMode, DueDateCalculator, DueDateRequest, DueDateResult};
pub use term::PaymentTerm;
