//! HTTP client for the bulk-creation endpoint
//!
//! Builds a `reqwest` client with the configured timeout and submits one
//! batch per call, authenticating with the partner API key header.

use tracing::{debug, info};

use super::payload::{BulkCreateRequest, BulkCreateResponse};
use crate::app::models::Product;
use crate::config::Config;
use crate::constants::API_KEY_HEADER;
use crate::{Error, Result};

/// HTTP client for submitting product batches
#[derive(Debug)]
pub struct UploadClient {
    client: reqwest::Client,
    endpoint_url: String,
    api_key: String,
    branch_id: i64,
}

impl UploadClient {
    /// Create a client from validated configuration
    ///
    /// The configuration must have passed `validate_for_submission`, so the
    /// API key is known to be present.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate_for_submission()?;

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(
                config.submission.request_timeout_secs,
            ))
            .build()
            .map_err(|e| Error::http("Failed to create HTTP client", e))?;

        let api_key = config
            .submission
            .api_key
            .clone()
            .ok_or_else(|| Error::configuration("API key missing after validation"))?;

        Ok(Self {
            client,
            endpoint_url: config.submission.endpoint_url.clone(),
            api_key,
            branch_id: config.submission.branch_id,
        })
    }

    /// Submit a batch of products in a single request
    ///
    /// Non-success statuses become `Error::Submission` carrying the
    /// endpoint's `message` when one is present. Success bodies are decoded
    /// leniently; an empty or unparseable success body yields a default
    /// response rather than an error.
    pub async fn submit(&self, products: &[Product]) -> Result<BulkCreateResponse> {
        info!(
            "Submitting {} products to {}",
            products.len(),
            self.endpoint_url
        );

        let request = BulkCreateRequest {
            branch_id: self.branch_id,
            products,
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::http("Failed to reach bulk endpoint", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::http("Failed to read endpoint response", e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<BulkCreateResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        "no error details provided".to_string()
                    } else {
                        body.trim().to_string()
                    }
                });
            return Err(Error::submission(status.as_u16(), message));
        }

        let decoded = serde_json::from_str::<BulkCreateResponse>(&body).unwrap_or_else(|e| {
            debug!("Endpoint returned a non-JSON success body: {}", e);
            BulkCreateResponse::default()
        });

        info!(
            "Bulk endpoint accepted the upload (created: {})",
            decoded
                .created
                .map(|n| n.to_string())
                .unwrap_or_else(|| "unreported".to_string())
        );

        Ok(decoded)
    }
}
