//! Request and response bodies for the bulk-creation endpoint

use serde::{Deserialize, Serialize};

use crate::app::models::Product;

/// JSON body POSTed to the bulk-creation endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateRequest<'a> {
    /// Branch the imported products are assigned to
    pub branch_id: i64,

    /// Valid product records only; rejected lines are never transmitted
    pub products: &'a [Product],
}

/// Response body returned by the bulk-creation endpoint
///
/// Decoded leniently: the endpoint is not guaranteed to return a body on
/// success, and error bodies may carry only a `message`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateResponse {
    /// Number of products the endpoint reports as created
    #[serde(default)]
    pub created: Option<u64>,

    /// Human-readable status or error message
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_endpoint_attribute_names() {
        let products = vec![Product::new(
            "Widget".to_string(),
            "12345".to_string(),
            10.5,
            3.0,
            14,
        )];
        let request = BulkCreateRequest {
            branch_id: 9,
            products: &products,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["branchId"], 9);
        assert_eq!(json["products"].as_array().unwrap().len(), 1);
        assert_eq!(json["products"][0]["barcode"], "12345");
        assert_eq!(json["products"][0]["currentPrice"], 10.5);
    }

    #[test]
    fn test_response_decodes_partial_bodies() {
        let full: BulkCreateResponse =
            serde_json::from_str(r#"{"created": 7, "message": "ok"}"#).unwrap();
        assert_eq!(full.created, Some(7));
        assert_eq!(full.message.as_deref(), Some("ok"));

        let message_only: BulkCreateResponse =
            serde_json::from_str(r#"{"message": "duplicate barcode"}"#).unwrap();
        assert_eq!(message_only.created, None);

        let empty: BulkCreateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.created, None);
        assert_eq!(empty.message, None);
    }

    #[test]
    fn test_response_tolerates_unknown_fields() {
        let response: BulkCreateResponse =
            serde_json::from_str(r#"{"created": 2, "requestId": "abc", "warnings": []}"#).unwrap();
        assert_eq!(response.created, Some(2));
    }
}
