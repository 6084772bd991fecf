use tracing::info;

use crate::app::AppContext;
use crate::cli::{CheckArgs, ResetArgs};
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{badge, print, receipt, Badge};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json, None);
    let mut store = ctx.open_store()?;
    let report = store.check_consistency()?;

    if ui.mode.is_json() {
        let payload = serde_json::json!({
            "consistent": report.is_consistent(),
            "issues": report.issue_count(),
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if report.is_consistent() {
        if !ctx.quiet() {
            print(&ui, &badge(&ui, Badge::Ok, "Vote counts match your votes"));
        }
    } else {
        print(&ui, &badge(&ui, Badge::Warn, "Vote counts disagree with your votes"));
        for mismatch in &report.mismatched {
            println!(
                "- item {}: count {} but {} vote(s) recorded",
                mismatch.item_id, mismatch.recorded, mismatch.expected
            );
        }
        for id in &report.orphaned {
            println!("- vote for unknown item {}", id);
        }
        for id in &report.duplicate_items {
            println!("- item id {} appears more than once", id);
        }
        for id in &report.duplicate_votes {
            println!("- more than one vote for item {}", id);
        }
    }

    if report.is_consistent() {
        Ok(())
    } else {
        Err(CliError::corrupt(
            format!("Consistency check found {} issue(s)", report.issue_count()),
            "Hint: Run `votebox reset --yes` to start over.",
        )
        .into())
    }
}

pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false, None);
    if !confirm("Delete all items and votes?", args.yes, ui.interactive)? {
        if !ctx.quiet() {
            println!("Reset cancelled.");
        }
        return Ok(());
    }

    let mut store = ctx.open_store()?;
    store.reset_all()?;
    info!("store reset from cli");

    if !ctx.quiet() {
        let dir = store.blobs().dir().display().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                Badge::Ok,
                "ok",
                "All items and votes deleted",
                &[("Store", dir.as_str())],
            ),
        );
    }
    Ok(())
}
