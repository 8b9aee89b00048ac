//! Test utilities for goods parser testing
//!
//! This module provides common fixture content and helper functions used
//! across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::constants::DEFAULT_CATEGORY_ID;

use super::GoodsParser;

// Test modules
mod field_parser_tests;
mod stats_tests;

/// Helper to create a parser with the default import category
pub fn create_test_parser() -> GoodsParser {
    GoodsParser::new(DEFAULT_CATEGORY_ID)
}

/// Helper to create goods file content with a mix of valid and invalid lines
pub fn create_mixed_goods_txt() -> String {
    [
        "b1|c1|Widget|12345|10,5|3",
        "b1|c2|Gadget|67890|4.25|0",
        "b1|c3||11111|2.00|5",
        "b1|c4|Doodad|22222|abc|5",
        "short|line",
    ]
    .join("\n")
}

/// Helper to create goods file content where every line is valid
pub fn create_valid_goods_txt() -> String {
    [
        "b1|c1|Widget|12345|10,5|3",
        "b1|c2|Gadget|67890|4.25|12",
    ]
    .join("\n")
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
