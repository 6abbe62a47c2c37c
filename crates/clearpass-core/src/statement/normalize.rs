use rust_decimal::Decimal;
use std::str::FromStr;

use crate::types::{Cell, Money};

/// Clean one raw cell into a signed amount.
///
/// Accounting notation: thousands commas are stripped and a parenthesised
/// amount is negative. Anything that does not survive numeric parsing is
/// missing, not zero — missing values are excluded from aggregation
/// entirely, so a true zero balance stays distinguishable downstream.
pub fn normalize_cell(cell: &Cell) -> Option<Money> {
    match cell {
        Cell::Number(amount) => Some(*amount),
        Cell::Empty => None,
        Cell::Text(raw) => normalize_text(raw),
    }
}

fn normalize_text(raw: &str) -> Option<Money> {
    let cleaned = raw
        .trim()
        .replace(',', "")
        .replace('(', "-")
        .replace(')', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}
