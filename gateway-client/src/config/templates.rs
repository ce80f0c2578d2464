use crate::error::Result;
use std::path::Path;

/// Generate default apigw.toml template with examples
pub fn generate_default_config_template() -> String {
    r#"# API Gateway Console Configuration

# Management API connection
[api]
base_url = "https://apigw.example.com/api/v1"
# Request timeout in seconds
timeout_seconds = 30
# Bearer token (can also be provided through APIGW_TOKEN)
# token = "..."

# Headers applied to all requests
[api.headers]
"Accept" = "application/json"
"X-Requested-With" = "XMLHttpRequest"

# Login service used when the session expires
[login]
url = "https://login.example.com"
# Public URL of this console, sent to the login page as the return target
site_url = "https://apigw.example.com/console"

# List defaults
[pagination]
default_limit = 10
"#
    .to_string()
}

/// Write the default configuration file unless one already exists
///
/// Returns `true` when a file was written.
pub fn ensure_config_file_exists<P: AsRef<Path>>(config_path: P, force: bool) -> Result<bool> {
    let path = config_path.as_ref();

    if path.exists() && !force {
        return Ok(false);
    }

    std::fs::write(path, generate_default_config_template())?;
    tracing::info!("wrote default configuration to {}", path.display());
    Ok(true)
}
