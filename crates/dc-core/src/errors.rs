//! Error types for duecalc-rs.
//!
//! The whole workspace funnels failures through a single `thiserror`-derived
//! enum. The validation variants carry the exact message the presentation
//! layer shows, so a caller only ever needs `Display`; no failure crosses a
//! calculator boundary as a panic.

use thiserror::Error;

/// The top-level error type used throughout duecalc-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No invoice date was supplied.
    #[error("Please select an invoice date.")]
    MissingInvoiceDate,

    /// The payment-terms input is not a non-negative whole number of days.
    #[error("Please enter valid payment terms.")]
    InvalidPaymentTerms,

    /// Date construction or arithmetic failure, including results outside
    /// the representable range.
    #[error("date error: {0}")]
    Date(String),

    /// A malformed entry in an externally supplied holiday table.
    #[error("holiday table entry {index} is not an ISO date: `{entry}`")]
    Holiday {
        /// Zero-based position of the offending entry.
        index: usize,
        /// The entry text as supplied.
        entry: String,
    },
}

/// Shorthand `Result` type used throughout duecalc-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;
