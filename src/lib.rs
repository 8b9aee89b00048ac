//! Goods Importer Library
//!
//! A Rust library for importing pipe-delimited goods files into a partner
//! product catalog via its bulk-creation HTTP API.
//!
//! This library provides tools for:
//! - Parsing pipe-delimited goods files into validated product records
//! - Collecting per-line error descriptors with line numbers and reasons
//! - Submitting a batch of valid records in a single bulk request
//! - Layered configuration (defaults, TOML file, environment, CLI)
//! - Summary reporting with success and error counts

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod goods_parser;
        pub mod upload_client;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{LineError, LineErrorKind, Product, SubCategory};
pub use config::Config;

/// Result type alias for the goods importer
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for goods import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Input file is not decodable text
    #[error("Input format error in file '{path}': {message}")]
    InputFormat { path: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Every non-blank line was rejected, nothing to submit
    #[error("No valid records parsed: all {lines_rejected} non-blank lines failed validation")]
    NoValidRecords { lines_rejected: usize },

    /// The bulk endpoint returned a non-success status
    #[error("Bulk endpoint rejected the upload (HTTP {status}): {message}")]
    Submission { status: u16, message: String },

    /// HTTP transport error
    #[error("HTTP request failed: {message}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an input format error
    pub fn input_format(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a no-valid-records error
    pub fn no_valid_records(lines_rejected: usize) -> Self {
        Self::NoValidRecords { lines_rejected }
    }

    /// Create a submission error from an endpoint response
    pub fn submission(status: u16, message: impl Into<String>) -> Self {
        Self::Submission {
            status,
            message: message.into(),
        }
    }

    /// Create an HTTP transport error with context
    pub fn http(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Http {
            message: "HTTP request failed".to_string(),
            source: error,
        }
    }
}
