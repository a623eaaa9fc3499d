use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a non-negative decimal amount such as `"35.35"` or `"12"`
///
/// Only ASCII digits with at most one decimal point are accepted, so signs,
/// exponents, whitespace and digit separators are all rejected. Amounts
/// beyond `Decimal::MAX` (about 7.9e28) do not fit and are rejected too.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    Decimal::from_str(text).ok()
}

/// Parse a `YYYY-MM-DD` calendar date, rejecting impossible dates
pub fn parse_purchase_date(text: &str) -> Option<NaiveDate> {
    if !matches_layout(text, "dddd-dd-dd") {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Parse a 24-hour `HH:MM` time
pub fn parse_purchase_time(text: &str) -> Option<NaiveTime> {
    if !matches_layout(text, "dd:dd") {
        return None;
    }
    NaiveTime::parse_from_str(text, "%H:%M").ok()
}

// 'd' matches any ASCII digit, every other byte must match literally
fn matches_layout(text: &str, layout: &str) -> bool {
    text.len() == layout.len()
        && text.bytes().zip(layout.bytes()).all(|(actual, expected)| match expected {
            b'd' => actual.is_ascii_digit(),
            _ => actual == expected,
        })
}
