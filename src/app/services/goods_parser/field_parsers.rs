//! Field parsing utilities for goods file lines
//!
//! This module provides helper functions for splitting delimited lines and
//! parsing numeric fields with locale-style decimal separators.

use crate::constants::{FIELD_DELIMITER, LOCALE_DECIMAL_SEPARATOR};

/// Split a line on the field delimiter, trimming each field
pub fn split_line_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_DELIMITER).map(str::trim).collect()
}

/// Normalize a locale-style comma decimal separator to a period
///
/// No thousands-separator handling and no currency symbol stripping; the
/// input is passed to the numeric parser otherwise unchanged.
pub fn normalize_decimal_separator(raw: &str) -> String {
    raw.replace(LOCALE_DECIMAL_SEPARATOR, ".")
}

/// Parse a field as a finite number after decimal-separator normalization
///
/// Returns `None` for empty fields, unparseable text, and the `inf`/`NaN`
/// spellings the float parser would otherwise accept.
pub fn parse_finite_number(raw: &str) -> Option<f64> {
    let normalized = normalize_decimal_separator(raw.trim());

    normalized
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
