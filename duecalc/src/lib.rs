//! # duecalc
//!
//! Invoice due-date calculation: add a payment term to an invoice date as
//! plain calendar days, or count only business days against the built-in
//! UK bank-holiday table.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! duecalc = "0.1"
//! ```
//!
//! ```rust
//! use duecalc::invoice::{CalculationMode, DueDateCalculator, DueDateRequest};
//!
//! let calculator = DueDateCalculator::uk();
//! let due = calculator
//!     .compute(&DueDateRequest {
//!         invoice_date: "2024-01-01",
//!         payment_terms: "5",
//!         mode: CalculationMode::BusinessDays,
//!     })
//!     .unwrap();
//! assert_eq!(due.long_format(), "Monday, 8 January 2024");
//! ```
//!
//! Validation failures come back as values whose `Display` is the message
//! to show:
//!
//! ```rust
//! use duecalc::invoice::{CalculationMode, DueDateCalculator, DueDateRequest};
//!
//! let calculator = DueDateCalculator::uk();
//! let err = calculator
//!     .compute(&DueDateRequest {
//!         invoice_date: "2024-01-01",
//!         payment_terms: "-7",
//!         mode: CalculationMode::CalendarDays,
//!     })
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Please enter valid payment terms.");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and input-parsing helpers.
pub use dc_core as core;

/// Date, weekday, and calendar types.
pub use dc_time as time;

/// The due-date calculator.
pub use dc_invoice as invoice;
