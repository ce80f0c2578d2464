use crate::config::types::ConsoleConfig;
use crate::error::{ConsoleError, Result};
use crate::pagination::FETCH_ALL_PAGE_SIZE;
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = ConsoleConfig;

    fn validate(&self, config: &ConsoleConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with the config file path in error messages
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &ConsoleConfig,
        config_path: P,
    ) -> Result<()> {
        let config_path_str = config_path.as_ref().to_string_lossy();

        for (key, value) in [
            ("api.base_url", &config.api.base_url),
            ("login.url", &config.login.url),
            ("login.site_url", &config.login.site_url),
        ] {
            if url::Url::parse(value).is_err() {
                return Err(ConsoleError::invalid_config(format!(
                    "Invalid {} '{}' in {}. Must be a valid URL.",
                    key, value, config_path_str
                )));
            }
        }

        if let Some(timeout) = config.api.timeout_seconds {
            if timeout == 0 || timeout > 300 {
                return Err(ConsoleError::invalid_config(
                    "timeout_seconds must be between 1 and 300 seconds".to_string(),
                ));
            }
        }

        let limit = config.pagination.default_limit;
        if limit == 0 || limit > FETCH_ALL_PAGE_SIZE {
            return Err(ConsoleError::invalid_config(format!(
                "pagination.default_limit must be between 1 and {}",
                FETCH_ALL_PAGE_SIZE
            )));
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}
