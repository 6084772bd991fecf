//! Text and table output formatting for items.

use std::collections::HashSet;

use votebox_core::VotingItem;

use crate::ui::theme::{styled, styles, symbols};
use crate::ui::{format_datetime, kv, simple_table, single_line, truncate, Column, UiContext};

const TITLE_MAX: usize = 48;

/// Render the voting list: one row per item with the user's vote marker.
pub fn print_item_list(ctx: &UiContext, items: &[&VotingItem], voted: &HashSet<&str>) {
    let columns = [
        Column::new("ID"),
        Column::new("CATEGORY"),
        Column::new("TITLE"),
        Column::right("VOTES"),
        Column::new("VOTED"),
    ];
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            let has_voted = voted.contains(item.id.as_str());
            vec![
                item.id.clone(),
                category_cell(ctx, item),
                title_cell(ctx, item),
                item.votes.to_string(),
                voted_cell(ctx, has_voted),
            ]
        })
        .collect();
    println!("{}", simple_table(ctx, &columns, &rows));
}

/// Render a single item with its description.
pub fn print_item(ctx: &UiContext, item: &VotingItem, voted: bool, quiet: bool) {
    if quiet {
        println!("{}", item.id);
        return;
    }
    if ctx.mode.is_pretty() {
        println!("{}", styled(&item.title, styles::bold(), ctx.color));
        println!("{}", kv(ctx, "ID", &item.id));
        println!("{}", kv(ctx, "Category", item.category.english()));
        println!("{}", kv(ctx, "Votes", &item.votes.to_string()));
        println!("{}", kv(ctx, "Voted", if voted { "yes" } else { "no" }));
        println!("{}", kv(ctx, "Created", &format_datetime(&item.created_at, true)));
        if !item.description.is_empty() {
            println!();
            for line in crate::ui::wrap(&item.description, ctx.width.clamp(20, 80)) {
                println!("{}", line);
            }
        }
    } else {
        println!("{}", kv(ctx, "ID", &item.id));
        println!("{}", kv(ctx, "Title", &single_line(&item.title)));
        println!("{}", kv(ctx, "Category", item.category.as_str()));
        println!("{}", kv(ctx, "Votes", &item.votes.to_string()));
        println!("{}", kv(ctx, "Voted", if voted { "true" } else { "false" }));
        println!(
            "{}",
            kv(ctx, "Created", &format_datetime(&item.created_at, false))
        );
        println!("{}", kv(ctx, "Description", &single_line(&item.description)));
    }
}

fn category_cell(ctx: &UiContext, item: &VotingItem) -> String {
    if ctx.mode.is_pretty() {
        item.category.english().to_string()
    } else {
        item.category.as_str().to_string()
    }
}

fn title_cell(ctx: &UiContext, item: &VotingItem) -> String {
    let title = single_line(&item.title);
    if ctx.mode.is_pretty() {
        truncate(&title, TITLE_MAX)
    } else {
        title
    }
}

fn voted_cell(ctx: &UiContext, voted: bool) -> String {
    if ctx.mode.is_pretty() {
        let symbol = if voted {
            symbols::VOTED
        } else {
            symbols::NOT_VOTED
        };
        symbol.get(ctx.unicode).to_string()
    } else if voted {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}
