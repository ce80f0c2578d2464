use crate::config::types::ConsoleConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{ConsoleError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Environment variable overriding `api.base_url`
pub const ENV_API_URL: &str = "APIGW_API_URL";
/// Environment variable overriding `login.url`
pub const ENV_LOGIN_URL: &str = "APIGW_LOGIN_URL";
/// Environment variable overriding `api.token`
pub const ENV_TOKEN: &str = "APIGW_TOKEN";

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from an apigw.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| ConsoleError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: ConsoleConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, apply environment overrides and validate the result
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ConsoleError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;

        let mut config: ConsoleConfig = toml::from_str(&content).map_err(|e| {
            ConsoleError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        apply_env_overrides(&mut config);
        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;

        Ok(config)
    }
}

/// Apply `APIGW_*` environment overrides from the process environment
pub fn apply_env_overrides(config: &mut ConsoleConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using an arbitrary variable lookup
pub fn apply_overrides_from<F>(config: &mut ConsoleConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
        tracing::debug!("api.base_url overridden by {}", ENV_API_URL);
        config.api.base_url = url;
    }
    if let Some(url) = lookup(ENV_LOGIN_URL).filter(|v| !v.is_empty()) {
        tracing::debug!("login.url overridden by {}", ENV_LOGIN_URL);
        config.login.url = url;
    }
    if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
        config.api.token = Some(token);
    }
}

// Convenience functions maintaining the API
impl ConsoleConfig {
    /// Create a new config builder
    pub fn builder() -> crate::config::builder::ConsoleConfigBuilder {
        crate::config::builder::ConsoleConfigBuilder::new()
    }

    /// Load configuration from an apigw.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration with environment overrides and validation
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }
}
