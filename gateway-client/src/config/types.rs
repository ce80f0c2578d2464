use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Main configuration structure for the gateway console
///
/// Built once at startup and handed to every component that needs it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Management API settings
    pub api: ApiConfig,
    /// Login service settings
    pub login: LoginConfig,
    /// List pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Management API connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the management API, e.g. `https://apigw.example.com/api/v1`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Headers applied to all requests
    pub headers: Option<HashMap<String, String>>,
    /// Bearer token sent as `Authorization`
    pub token: Option<String>,
}

/// Login service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginConfig {
    /// Login page URL used when a session expires
    pub url: String,
    /// Public URL of the console itself, round-tripped through the login page
    pub site_url: String,
}

/// Pagination defaults for list views
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Page size used when a list is created without an explicit limit
    pub default_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Effective request timeout
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}
