//! Integration tests for the due-date calculator against the real UK
//! bank-holiday table, plus property tests over both counting modes.

use dc_core::Error;
use dc_invoice::{CalculationMode, DueDateCalculator, DueDateRequest, PaymentTerm};
use dc_time::calendar::Calendar;
use dc_time::{Date, UkBankHolidays, WeekendsOnly};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn uk() -> DueDateCalculator<UkBankHolidays> {
    DueDateCalculator::uk()
}

// ─── Concrete scenarios ───────────────────────────────────────────────────────

#[test]
fn five_calendar_days_from_new_year() {
    // 2024-01-01 is a Monday and a bank holiday; calendar mode ignores both
    let due = uk()
        .due_date(
            date(2024, 1, 1),
            PaymentTerm::new(5),
            CalculationMode::CalendarDays,
        )
        .unwrap();
    assert_eq!(due, date(2024, 1, 6));
}

#[test]
fn five_business_days_from_new_year() {
    // Counting starts at Jan 2; Sat 6th and Sun 7th are passed over,
    // landing on Monday the 8th
    let due = uk()
        .due_date(
            date(2024, 1, 1),
            PaymentTerm::new(5),
            CalculationMode::BusinessDays,
        )
        .unwrap();
    assert_eq!(due, date(2024, 1, 8));
    assert_eq!(due.long_format(), "Monday, 8 January 2024");
}

#[test]
fn one_business_day_from_christmas_weekend() {
    // Saturday 2023-12-23 + 1 business day: Sunday, Christmas Day, and
    // Boxing Day are all non-business, so the 27th is the first counted day
    let due = uk()
        .due_date(
            date(2023, 12, 23),
            PaymentTerm::new(1),
            CalculationMode::BusinessDays,
        )
        .unwrap();
    assert_eq!(due, date(2023, 12, 27));
}

#[test]
fn invalid_terms_are_rejected() {
    let calc = uk();
    for payment_terms in ["-1", "abc"] {
        let err = calc
            .compute(&DueDateRequest {
                invoice_date: "2024-01-01",
                payment_terms,
                mode: CalculationMode::BusinessDays,
            })
            .unwrap_err();
        assert_eq!(err, Error::InvalidPaymentTerms, "terms {payment_terms:?}");
        assert_eq!(err.to_string(), "Please enter valid payment terms.");
    }
}

#[test]
fn empty_invoice_date_is_rejected() {
    let err = uk()
        .compute(&DueDateRequest {
            invoice_date: "",
            payment_terms: "30",
            mode: CalculationMode::CalendarDays,
        })
        .unwrap_err();
    assert_eq!(err, Error::MissingInvoiceDate);
    assert_eq!(err.to_string(), "Please select an invoice date.");
}

#[test]
fn thirty_calendar_days_crosses_month_end() {
    let due = uk()
        .compute(&DueDateRequest {
            invoice_date: "2024-01-15",
            payment_terms: "30",
            mode: CalculationMode::CalendarDays,
        })
        .unwrap();
    assert_eq!(due, date(2024, 2, 14));
}

#[test]
fn leap_day_is_counted() {
    // 2024-02-28 (Wednesday) + 2 business days = Thursday the 29th, Friday
    // the 1st
    let due = uk()
        .due_date(
            date(2024, 2, 28),
            PaymentTerm::new(2),
            CalculationMode::BusinessDays,
        )
        .unwrap();
    assert_eq!(due, date(2024, 3, 1));
}

// ─── Properties ───────────────────────────────────────────────────────────────

// Serial range kept well inside the representable span so that no
// arithmetic can leave it.
const START_RANGE: std::ops::RangeInclusive<i32> = 40_000..=50_000;

proptest! {
    #[test]
    fn calendar_offset_equals_term(serial in START_RANGE, term in 0u32..=5_000) {
        let start = Date::from_serial(serial).unwrap();
        let due = uk()
            .due_date(start, PaymentTerm::new(term), CalculationMode::CalendarDays)
            .unwrap();
        prop_assert_eq!(start.days_between(due), term as i32);
    }

    #[test]
    fn business_days_counted_exactly(serial in START_RANGE, term in 0u32..=500) {
        let calc = uk();
        let start = Date::from_serial(serial).unwrap();
        let due = calc
            .due_date(start, PaymentTerm::new(term), CalculationMode::BusinessDays)
            .unwrap();
        // Exactly `term` business days lie in (start, due]
        prop_assert_eq!(calc.calendar().business_days_between(start, due), term as i32);
        // Every uncounted date in the interval is a weekend or a listed holiday
        let mut d = start;
        while d < due {
            d = d.add_days(1).unwrap();
            if !calc.calendar().is_business_day(d) {
                prop_assert!(
                    d.weekday().is_weekend() || calc.calendar().contains(d),
                    "{:?} skipped without reason", d
                );
            }
        }
        // The result itself is a business day whenever something was counted
        if term > 0 {
            prop_assert!(calc.calendar().is_business_day(due));
        }
    }

    #[test]
    fn increasing_term_never_moves_due_date_back(
        serial in START_RANGE,
        term in 0u32..=1_000,
        extra in 0u32..=100,
    ) {
        let calc = uk();
        let start = Date::from_serial(serial).unwrap();
        for mode in [CalculationMode::CalendarDays, CalculationMode::BusinessDays] {
            let shorter = calc.due_date(start, PaymentTerm::new(term), mode).unwrap();
            let longer = calc
                .due_date(start, PaymentTerm::new(term + extra), mode)
                .unwrap();
            prop_assert!(longer >= shorter, "{:?}", mode);
        }
    }

    #[test]
    fn business_mode_never_lands_earlier_than_calendar_term(
        serial in START_RANGE,
        term in 0u32..=500,
    ) {
        // Business-day counting can only skip days, never save them
        let calc = uk();
        let start = Date::from_serial(serial).unwrap();
        let business = calc
            .due_date(start, PaymentTerm::new(term), CalculationMode::BusinessDays)
            .unwrap();
        let calendar = calc
            .due_date(start, PaymentTerm::new(term), CalculationMode::CalendarDays)
            .unwrap();
        prop_assert!(business >= calendar);
    }

    #[test]
    fn weekends_only_calendar_is_a_lower_bound(
        serial in START_RANGE,
        term in 0u32..=500,
    ) {
        // Removing holidays from the table can only bring the due date closer
        let with_holidays = uk();
        let without = DueDateCalculator::new(WeekendsOnly);
        let start = Date::from_serial(serial).unwrap();
        let a = with_holidays
            .due_date(start, PaymentTerm::new(term), CalculationMode::BusinessDays)
            .unwrap();
        let b = without
            .due_date(start, PaymentTerm::new(term), CalculationMode::BusinessDays)
            .unwrap();
        prop_assert!(a >= b);
    }
}
