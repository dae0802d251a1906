//! Input parsing helpers.
//!
//! The invoice form delivers its fields as plain strings: an ISO date from a
//! date picker and a free-text day count. These helpers split and parse that
//! text; range checking of the resulting numbers is the caller's concern.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Only the field split and the
/// numeric parse happen here — `2024-02-31` parses fine and must be rejected
/// by the date constructor.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// Parse payment-terms input as a non-negative whole number of days.
///
/// Empty, non-numeric, fractional, and negative input all return `None`.
pub fn parse_term_days(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}
