//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the places controller.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HbnbConfig {
    /// REST API endpoints.
    pub api: ApiConfig,

    /// Client timeouts.
    pub timeouts: TimeoutConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Rendered page settings.
    pub page: PageConfig,
}

/// REST API endpoint configuration.
///
/// The status check and the other API calls use separate base URLs; the
/// HBnB front-end historically addressed them through different hosts.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL for places search and catalog lookups.
    pub base_url: String,

    /// Base URL for the status endpoint.
    pub status_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001".to_string(),
            status_base_url: "http://0.0.0.0:5001".to_string(),
        }
    }
}

/// Timeout configuration for API calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

/// Settings for the rendered HTML page.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PageConfig {
    /// Document title.
    pub title: String,

    /// Where the page is written; `-` means stdout.
    pub output_path: String,

    /// Fetch states, cities and amenities to build the filter checkboxes.
    pub load_catalog: bool,

    /// Clear `section.places` before appending a new search result.
    pub replace_results: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "HBnB".to_string(),
            output_path: "hbnb.html".to_string(),
            load_catalog: true,
            replace_results: false,
        }
    }
}
