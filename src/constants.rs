//! Application constants for the goods importer
//!
//! This module contains the input format contract, default submission
//! settings, and environment variable names used throughout the application.

// =============================================================================
// Input Format Contract
// =============================================================================

/// Field delimiter in goods files
pub const FIELD_DELIMITER: char = '|';

/// Minimum number of delimited fields a line must carry
pub const MIN_FIELD_COUNT: usize = 6;

/// Field positions within a delimited line
///
/// The first two fields are reserved by the exporting system and are not
/// consumed here; fields beyond [`fields::QUANTITY`] are ignored.
pub mod fields {
    pub const NAME: usize = 2;
    pub const BARCODE: usize = 3;
    pub const PRICE: usize = 4;
    pub const QUANTITY: usize = 5;
}

/// Decimal separator accepted in numeric fields besides the period
pub const LOCALE_DECIMAL_SEPARATOR: char = ',';

// =============================================================================
// Submission Defaults
// =============================================================================

/// Default bulk-creation endpoint
pub const DEFAULT_ENDPOINT_URL: &str = "https://savey.az/api/partner/products/bulk";

/// Default branch the imported products are assigned to
pub const DEFAULT_BRANCH_ID: i64 = 9;

/// Fixed category for this import path
pub const DEFAULT_CATEGORY_ID: i64 = 14;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Header carrying the partner API key
pub const API_KEY_HEADER: &str = "X-API-Key";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable overriding the endpoint URL
pub const ENV_ENDPOINT_URL: &str = "GOODS_IMPORTER_ENDPOINT";

/// Environment variable supplying the partner API key
pub const ENV_API_KEY: &str = "GOODS_IMPORTER_API_KEY";

/// Environment variable overriding the branch id
pub const ENV_BRANCH_ID: &str = "GOODS_IMPORTER_BRANCH_ID";

// =============================================================================
// Reporting
// =============================================================================

/// Maximum number of rejected lines listed in human-readable reports
pub const DEFAULT_ERROR_PREVIEW_LIMIT: usize = 10;

/// Configuration location under the user config directory
pub const CONFIG_DIR_NAME: &str = "goods-importer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
