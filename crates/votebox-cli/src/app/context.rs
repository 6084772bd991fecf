//! Application context for the Votebox CLI.
//!
//! Bundles CLI arguments with the lazily loaded config file so handlers do
//! not re-read it or thread extra parameters around.

use std::cell::OnceCell;
use std::path::PathBuf;

use tracing::debug;
use votebox_core::storage::FileStore;
use votebox_core::VoteStore;

use crate::cli::Cli;
use crate::config::VoteboxConfig;
use crate::ui::{OutputFormat, UiContext};

use super::resolver::{load_config, resolve_store_dir};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<VoteboxConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, loaded on first use. `None` when no file exists.
    pub fn config(&self) -> anyhow::Result<Option<&VoteboxConfig>> {
        if let Some(loaded) = self.config.get() {
            return Ok(loaded.as_ref());
        }
        let loaded = load_config()?;
        Ok(self.config.get_or_init(|| loaded).as_ref())
    }

    /// UI context for a command, honoring `ui.ascii` from the config.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        // A broken config surfaces when the store is opened; the UI falls back.
        let config_ascii = self
            .config()
            .ok()
            .flatten()
            .map(|config| config.ui.ascii)
            .unwrap_or(false);
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii || config_ascii)
    }

    pub fn store_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_store_dir(self.cli, self.config()?)
    }

    /// Open the vote store in the resolved directory, creating it if needed.
    pub fn open_store(&self) -> anyhow::Result<VoteStore<FileStore>> {
        let dir = self.store_dir()?;
        debug!(dir = %dir.display(), "opening store");
        let blobs = FileStore::open(&dir)?;
        Ok(VoteStore::new(blobs))
    }
}
