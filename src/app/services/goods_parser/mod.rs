//! Pipe-delimited goods file parser
//!
//! This module converts raw goods file text into validated product records
//! plus a parallel list of per-line error descriptors. Every non-blank line
//! yields exactly one outcome; malformed input never raises an error, it is
//! collected for operator-facing reports instead.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line splitting, per-line validation, and record assembly
//! - [`field_parsers`] - Utility functions for field extraction and numeric parsing
//! - [`stats`] - Parse outcome and statistics structures
//!
//! ## Usage
//!
//! ```rust
//! use goods_importer::app::services::goods_parser::GoodsParser;
//!
//! let parser = GoodsParser::new(14);
//! let outcome = parser.parse_text("b|c|Widget|12345|10,5|3");
//!
//! assert_eq!(outcome.products.len(), 1);
//! assert!(outcome.errors.is_empty());
//! ```

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::GoodsParser;
pub use stats::{ParseOutcome, ParseStats};
