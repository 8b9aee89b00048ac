//! Bulk upload client for the partner product catalog
//!
//! This module serializes valid product records and issues a single
//! outbound HTTP request per upload. There is no retry or backoff; a
//! failed request surfaces as an error for the command layer to report.
//!
//! ## Architecture
//!
//! - [`client`] - HTTP client construction and the submit operation
//! - [`payload`] - Request and response body structures

pub mod client;
pub mod payload;

// Re-export main types for easy access
pub use client::UploadClient;
pub use payload::{BulkCreateRequest, BulkCreateResponse};
