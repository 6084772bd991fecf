use votebox_core::view::ResultsView;

use crate::app::AppContext;
use crate::cli::ResultsArgs;
use crate::helpers::parse_output_format;
use crate::output::results_json;
use crate::ui::theme::{podium_marker, styled, styles};
use crate::ui::{
    bar, blank_line, format_percent, header, kv, print, single_line, table, truncate, Column,
    UiContext,
};

const BAR_WIDTH: usize = 20;
const TITLE_MAX: usize = 40;

pub fn handle_results(ctx: &AppContext, args: &ResultsArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format);

    let mut store = ctx.open_store()?;
    let items = store.list_items()?;
    let view = ResultsView::build(&items);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&results_json(&view))?);
        return Ok(());
    }
    if ctx.quiet() {
        for row in &view.rows {
            println!("{}", row.item.id);
        }
        return Ok(());
    }

    print(&ui, &header(&ui, "results", None));
    blank_line(&ui);
    if view.is_empty() {
        println!("No votes recorded yet.");
        return Ok(());
    }

    print_summary(&ui, &view);
    blank_line(&ui);
    print_rows(&ui, &view);
    Ok(())
}

fn print_summary(ui: &UiContext, view: &ResultsView<'_>) {
    let summary = &view.summary;
    println!("{}", kv(ui, "Total votes", &summary.total_votes.to_string()));
    println!("{}", kv(ui, "Proposals", &summary.item_count.to_string()));
    if let Some(leader) = summary.leader {
        let title = single_line(&leader.title);
        let title = if ui.mode.is_pretty() {
            styled(&title, styles::accent(), ui.color)
        } else {
            title
        };
        println!("{}", kv(ui, "Most popular", &title));
    }
}

fn print_rows(ui: &UiContext, view: &ResultsView<'_>) {
    if ui.mode.is_pretty() {
        // Escape codes inside cells would throw off comfy-table's widths.
        let cell_ui = UiContext {
            color: false,
            ..ui.clone()
        };
        let columns = [
            Column::new("#"),
            Column::new("TITLE"),
            Column::right("VOTES"),
            Column::new("OF LEADER"),
            Column::right("SHARE"),
        ];
        let rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|row| {
                let rank = row
                    .podium
                    .map(|podium| podium_marker(podium, ui.unicode).to_string())
                    .unwrap_or_else(|| row.rank.to_string());
                let percent = row.percentage_of_max.round() as u32;
                vec![
                    rank,
                    truncate(&single_line(&row.item.title), TITLE_MAX),
                    row.item.votes.to_string(),
                    format!(
                        "{} {}",
                        bar(&cell_ui, row.percentage_of_max, BAR_WIDTH),
                        format_percent(percent)
                    ),
                    format_percent(row.share_of_total),
                ]
            })
            .collect();
        println!("{}", table(ui, &columns, &rows));
    } else {
        let columns = [
            Column::new("RANK"),
            Column::new("ID"),
            Column::right("VOTES"),
            Column::right("OF LEADER"),
            Column::right("SHARE"),
            Column::new("TITLE"),
        ];
        let rows: Vec<Vec<String>> = view
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.rank.to_string(),
                    row.item.id.clone(),
                    row.item.votes.to_string(),
                    format_percent(row.percentage_of_max.round() as u32),
                    format_percent(row.share_of_total),
                    single_line(&row.item.title),
                ]
            })
            .collect();
        println!("{}", table(ui, &columns, &rows));
    }
}
