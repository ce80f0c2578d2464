use crate::app::{CONFIG_FILE, ensure_parent_dir};
use crate::error::{Result, ResultExt};
use crate::ui;
use gateway_client::config::ensure_config_file_exists;
use std::path::PathBuf;

/// Write a default configuration file to `path` (or `apigw.toml`)
pub fn execute(path: Option<String>, force: bool) -> Result<()> {
    let path = path.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    ensure_parent_dir(&path)?;

    let created = ensure_config_file_exists(&path, force)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    if created {
        ui::success_message(&format!("Created {}", path.display()));
        ui::info_message("Edit api.base_url and login.url before running other commands");
    } else {
        ui::warning_message(&format!(
            "{} already exists, pass --force to overwrite it",
            path.display()
        ));
    }
    Ok(())
}
