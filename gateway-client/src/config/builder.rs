use crate::config::types::{ApiConfig, ConsoleConfig, LoginConfig, PaginationConfig};
use crate::config::validator::ConfigValidatorImpl;
use crate::error::Result;
use crate::traits::ConfigValidator;
use std::collections::HashMap;

/// Builder for ConsoleConfig to improve API ergonomics
pub struct ConsoleConfigBuilder {
    base_url: String,
    timeout_seconds: Option<u64>,
    headers: HashMap<String, String>,
    token: Option<String>,
    login_url: String,
    site_url: String,
    default_limit: Option<u64>,
}

impl ConsoleConfigBuilder {
    /// Create a new config builder
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: None,
            headers: HashMap::new(),
            token: None,
            login_url: String::new(),
            site_url: String::new(),
            default_limit: None,
        }
    }

    /// Set the management API base URL
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set timeout in seconds
    #[must_use]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn header<S: Into<String>>(mut self, key: S, value: S) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the bearer token
    #[must_use]
    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the login page URL and the console's own URL
    #[must_use]
    pub fn login<S: Into<String>>(mut self, login_url: S, site_url: S) -> Self {
        self.login_url = login_url.into();
        self.site_url = site_url.into();
        self
    }

    /// Set the default page size for lists
    #[must_use]
    pub fn default_limit(mut self, limit: u64) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid (e.g., unparsable URLs)
    pub fn build(self) -> Result<ConsoleConfig> {
        let config = ConsoleConfig {
            api: ApiConfig {
                base_url: self.base_url,
                timeout_seconds: self.timeout_seconds,
                headers: (!self.headers.is_empty()).then_some(self.headers),
                token: self.token,
            },
            login: LoginConfig {
                url: self.login_url,
                site_url: self.site_url,
            },
            pagination: self
                .default_limit
                .map(|default_limit| PaginationConfig { default_limit })
                .unwrap_or_default(),
        };

        ConfigValidatorImpl::new().validate(&config)?;

        Ok(config)
    }
}

impl Default for ConsoleConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
