use std::path::PathBuf;

use tracing::info;
use votebox_core::storage::FileStore;
use votebox_core::VoteStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, VoteboxConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ))
        .into());
    }

    let store_dir = match args.path.as_deref().or(ctx.cli().store.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };

    let mut store = VoteStore::new(FileStore::open(&store_dir)?);
    let seeded = store.initialize_if_absent()?;
    write_config(&config_path, &VoteboxConfig::new(&store_dir))?;
    info!(config = %config_path.display(), store = %store_dir.display(), seeded, "initialized");

    if ctx.quiet() {
        return Ok(());
    }
    let config_display = config_path.display().to_string();
    let store_display = store_dir.display().to_string();
    let catalog = if seeded { "seeded" } else { "kept existing" };
    print(
        &ui,
        &receipt(
            &ui,
            Badge::Ok,
            "ok",
            "Votebox initialized",
            &[
                ("Config", config_display.as_str()),
                ("Store", store_display.as_str()),
                ("Catalog", catalog),
            ],
        ),
    );
    print(&ui, &hint(&ui, "votebox list"));
    Ok(())
}
