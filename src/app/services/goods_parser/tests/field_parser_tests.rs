//! Tests for field splitting and numeric parsing utilities

use crate::app::services::goods_parser::field_parsers::{
    normalize_decimal_separator, parse_finite_number, split_line_fields,
};

#[test]
fn test_split_trims_each_field() {
    let fields = split_line_fields(" a | b |c|  d  ");
    assert_eq!(fields, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_split_keeps_empty_fields() {
    let fields = split_line_fields("a||c");
    assert_eq!(fields, vec!["a", "", "c"]);
}

#[test]
fn test_normalize_replaces_comma() {
    assert_eq!(normalize_decimal_separator("10,5"), "10.5");
    assert_eq!(normalize_decimal_separator("10.5"), "10.5");
}

#[test]
fn test_parse_accepts_comma_decimal_separator() {
    assert_eq!(parse_finite_number("10,5"), Some(10.5));
    assert_eq!(parse_finite_number("10.5"), Some(10.5));
    assert_eq!(parse_finite_number(" 3 "), Some(3.0));
}

#[test]
fn test_parse_accepts_negative_numbers() {
    // Negative values pass the finite check by design; no lower bound is
    // enforced at this layer.
    assert_eq!(parse_finite_number("-2"), Some(-2.0));
    assert_eq!(parse_finite_number("-0,5"), Some(-0.5));
}

#[test]
fn test_parse_rejects_text_and_empty() {
    assert_eq!(parse_finite_number("abc"), None);
    assert_eq!(parse_finite_number(""), None);
    assert_eq!(parse_finite_number("  "), None);
    assert_eq!(parse_finite_number("12x"), None);
}

#[test]
fn test_parse_rejects_non_finite_spellings() {
    assert_eq!(parse_finite_number("inf"), None);
    assert_eq!(parse_finite_number("-inf"), None);
    assert_eq!(parse_finite_number("NaN"), None);
}

#[test]
fn test_parse_has_no_thousands_separator_handling() {
    // "1,234" normalizes to "1.234", not one thousand
    assert_eq!(parse_finite_number("1,234"), Some(1.234));
    // Two separators after normalization fail to parse
    assert_eq!(parse_finite_number("1,234,5"), None);
}
