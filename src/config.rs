//! Configuration management and validation.
//!
//! Provides layered configuration for the importer: built-in defaults,
//! an optional TOML file, environment variables, and CLI overrides applied
//! by the command layer. The API key is never a source literal; it arrives
//! through the config file, the environment, or a CLI flag.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BRANCH_ID, DEFAULT_CATEGORY_ID,
    DEFAULT_ENDPOINT_URL, DEFAULT_ERROR_PREVIEW_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS, ENV_API_KEY,
    ENV_BRANCH_ID, ENV_ENDPOINT_URL,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Global configuration for the goods importer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Settings for the outbound bulk request
    pub submission: SubmissionConfig,

    /// Settings applied while building product records
    pub import: ImportConfig,
}

/// Settings for the outbound bulk request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Bulk-creation endpoint URL
    pub endpoint_url: String,

    /// Partner API key; required for submission, unused by parse-only runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Branch the imported products are assigned to
    pub branch_id: i64,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Settings applied while building product records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Fixed category assigned to every imported product
    pub category_id: i64,

    /// Maximum rejected lines listed in human-readable reports
    pub error_preview_limit: usize,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            api_key: None,
            branch_id: DEFAULT_BRANCH_ID,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            category_id: DEFAULT_CATEGORY_ID,
            error_preview_limit: DEFAULT_ERROR_PREVIEW_LIMIT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            submission: SubmissionConfig::default(),
            import: ImportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with the layered approach (defaults -> file -> env)
    ///
    /// CLI overrides are applied afterwards by the command layer.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                info!("Using config file: {}", path.display());
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!("Using config file: {}", path.display());
                    Self::from_file(&path)?
                }
                _ => {
                    debug!("No config file found, using defaults and environment variables");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Default config file location under the user config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Apply environment variable overrides on top of the loaded values
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT_URL) {
            if !endpoint.trim().is_empty() {
                debug!("Endpoint URL overridden from {}", ENV_ENDPOINT_URL);
                self.submission.endpoint_url = endpoint.trim().to_string();
            }
        }

        if let Ok(api_key) = std::env::var(ENV_API_KEY) {
            if !api_key.trim().is_empty() {
                debug!("API key supplied via {}", ENV_API_KEY);
                self.submission.api_key = Some(api_key.trim().to_string());
            }
        }

        if let Ok(branch) = std::env::var(ENV_BRANCH_ID) {
            let branch = branch.trim();
            if !branch.is_empty() {
                self.submission.branch_id = branch.parse::<i64>().map_err(|_| {
                    Error::configuration(format!(
                        "Invalid {} value '{}': expected an integer",
                        ENV_BRANCH_ID, branch
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Validate settings every command depends on
    pub fn validate(&self) -> Result<()> {
        let endpoint = &self.submission.endpoint_url;
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(Error::configuration(format!(
                "Endpoint URL must start with http:// or https://, got '{}'",
                endpoint
            )));
        }

        if self.submission.request_timeout_secs == 0 {
            return Err(Error::configuration(
                "Request timeout must be greater than 0 seconds".to_string(),
            ));
        }

        if self.import.category_id <= 0 {
            return Err(Error::configuration(format!(
                "Category id must be positive, got {}",
                self.import.category_id
            )));
        }

        Ok(())
    }

    /// Validate settings required before submitting a batch
    pub fn validate_for_submission(&self) -> Result<()> {
        self.validate()?;

        match &self.submission.api_key {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(Error::configuration(format!(
                "API key is required for submission; set {} or use --api-key",
                ENV_API_KEY
            ))),
        }
    }
}
