//! Path resolution for the config file and store directory.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, VoteboxConfig};
use crate::errors::CliError;

fn config_override() -> Option<PathBuf> {
    std::env::var("VOTEBOX_CONFIG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

/// Resolve the config file path, checking `VOTEBOX_CONFIG` first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    match config_override() {
        Some(path) => Ok(path),
        None => default_config_path(),
    }
}

/// Load the config file if one exists.
///
/// A missing default config is not an error; a missing `VOTEBOX_CONFIG`
/// target is.
pub fn load_config() -> anyhow::Result<Option<VoteboxConfig>> {
    let explicit = config_override();
    let path = match &explicit {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    if !path.exists() {
        if explicit.is_some() {
            return Err(CliError::not_found(
                format!("No config found at {}", path.display()),
                "Hint: Run `votebox init` to create it, or unset VOTEBOX_CONFIG.",
            )
            .into());
        }
        debug!(path = %path.display(), "no config file");
        return Ok(None);
    }
    read_config(&path).map(Some)
}

/// Resolve the store directory: `--store`/`VOTEBOX_STORE`, then config, then
/// the XDG data directory.
pub fn resolve_store_dir(cli: &Cli, config: Option<&VoteboxConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.store.path));
    }
    default_store_path()
}
