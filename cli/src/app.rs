use crate::error::Result;
use crate::surfaces::{TerminalNavigator, TerminalNotifier, spawn_login_listener};
use gateway_client::{ApiClient, ConsoleConfig, ConsoleError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Default configuration file name
pub const CONFIG_FILE: &str = "apigw.toml";

/// Everything a command needs: configuration and a connected client
pub struct App {
    pub config: Arc<ConsoleConfig>,
    pub client: ApiClient,
    login_listener: JoinHandle<()>,
}

impl App {
    /// Load configuration and build the API client with terminal surfaces
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = resolve_config_path(config_path);
        tracing::debug!("loading configuration from {}", path.display());

        let config = Arc::new(ConsoleConfig::load_with_validation(&path)?);
        let client = ApiClient::with_surfaces(
            &config,
            Arc::new(TerminalNotifier),
            Arc::new(TerminalNavigator::new(config.login.site_url.clone())),
        )?;
        let login_listener = spawn_login_listener(client.events());

        Ok(Self {
            config,
            client,
            login_listener,
        })
    }

    /// Page size for list commands without an explicit limit
    pub fn default_limit(&self) -> u64 {
        self.config.pagination.default_limit
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.login_listener.abort();
    }
}

/// Pick the configuration file: the explicit path, then `apigw.toml` in the
/// working directory, then the user config directory
pub fn resolve_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .map(|dir| dir.join("apigw").join(CONFIG_FILE))
        .filter(|path| path.exists())
        .unwrap_or(local)
}

/// Create the parent directory of a configuration path if needed
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(ConsoleError::from)?;
    }
    Ok(())
}
