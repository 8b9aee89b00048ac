//! Data models for goods import processing
//!
//! This module contains the core data structures for representing parsed
//! product records and per-line rejection descriptors, matching the bulk
//! endpoint's product attribute set.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Product Record Structure
// =============================================================================

/// One sellable item ready for submission to the bulk endpoint
///
/// The serialized form uses the endpoint's camelCase attribute names. The
/// product name is reused verbatim as description and brand; prices mirror
/// each other because this import path carries no discount information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Display name of the product
    pub name: String,

    /// Description shown in the catalog (same as name for this import path)
    pub description: String,

    /// Brand label (same as name for this import path)
    pub brand: String,

    /// Unique identifier supplied by the input file
    pub barcode: String,

    /// Fixed category for this import path
    pub category_id: i64,

    /// Fixed sub-category for this import path
    pub sub_category: SubCategory,

    /// Selling price
    pub current_price: f64,

    /// Pre-discount price (equal to the selling price here)
    pub original_price: f64,

    /// Derived availability flag: stock quantity above zero
    pub is_in_stock: bool,

    /// Stock quantity; zero and negative values pass through unchanged
    pub stock_quantity: f64,
}

impl Product {
    /// Build a product record from validated field values
    pub fn new(name: String, barcode: String, price: f64, quantity: f64, category_id: i64) -> Self {
        Self {
            description: name.clone(),
            brand: name.clone(),
            name,
            barcode,
            category_id,
            sub_category: SubCategory::default(),
            current_price: price,
            original_price: price,
            is_in_stock: quantity > 0.0,
            stock_quantity: quantity,
        }
    }
}

/// Sub-category values accepted by the bulk endpoint
///
/// This import path always assigns [`SubCategory::Other`]; the remaining
/// variants exist because the endpoint's enumeration is shared with other
/// ingestion paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubCategory {
    Food,
    Beverage,
    Household,
    #[default]
    Other,
}

// =============================================================================
// Line Error Descriptor
// =============================================================================

/// One rejected input line with its position, raw text, and reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    /// 1-based position in the filtered non-blank line sequence
    pub line: usize,

    /// Raw (trimmed) line text for operator diagnosis
    pub raw: String,

    /// Why the line was rejected
    pub reason: LineErrorKind,
}

/// Rejection reasons, checked in declaration order with short-circuiting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineErrorKind {
    /// Fewer delimited fields than the format requires
    ColumnCountBelowMinimum,
    /// Name field empty after trimming
    EmptyName,
    /// Barcode field empty after trimming
    EmptyBarcode,
    /// Price field did not parse to a finite number
    InvalidPrice,
    /// Quantity field did not parse to a finite number
    InvalidQuantity,
}

impl LineErrorKind {
    /// Human-readable rejection reason for operator-facing reports
    pub fn description(&self) -> &'static str {
        match self {
            Self::ColumnCountBelowMinimum => "column count below 6",
            Self::EmptyName => "name is empty",
            Self::EmptyBarcode => "barcode is empty",
            Self::InvalidPrice => "price invalid or empty",
            Self::InvalidQuantity => "quantity invalid or empty",
        }
    }
}

impl fmt::Display for LineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_derives_fields_from_name_and_quantity() {
        let product = Product::new("Widget".to_string(), "12345".to_string(), 10.5, 3.0, 14);

        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "Widget");
        assert_eq!(product.brand, "Widget");
        assert_eq!(product.barcode, "12345");
        assert_eq!(product.category_id, 14);
        assert_eq!(product.sub_category, SubCategory::Other);
        assert_eq!(product.current_price, 10.5);
        assert_eq!(product.original_price, 10.5);
        assert_eq!(product.stock_quantity, 3.0);
        assert!(product.is_in_stock);
    }

    #[test]
    fn test_zero_quantity_is_out_of_stock() {
        let product = Product::new("Widget".to_string(), "12345".to_string(), 1.0, 0.0, 14);
        assert!(!product.is_in_stock);
    }

    #[test]
    fn test_product_serializes_with_endpoint_attribute_names() {
        let product = Product::new("Widget".to_string(), "12345".to_string(), 10.5, 3.0, 14);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["name"], "Widget");
        assert_eq!(json["categoryId"], 14);
        assert_eq!(json["subCategory"], "OTHER");
        assert_eq!(json["currentPrice"], 10.5);
        assert_eq!(json["originalPrice"], 10.5);
        assert_eq!(json["isInStock"], true);
        assert_eq!(json["stockQuantity"], 3.0);
    }

    #[test]
    fn test_error_kind_descriptions() {
        assert_eq!(
            LineErrorKind::ColumnCountBelowMinimum.description(),
            "column count below 6"
        );
        assert_eq!(LineErrorKind::EmptyName.description(), "name is empty");
        assert_eq!(
            LineErrorKind::InvalidPrice.to_string(),
            "price invalid or empty"
        );
    }
}
