use votebox_core::view::{filter_by_category, voted_item_ids};
use votebox_core::CategoryFilter;

use crate::app::AppContext;
use crate::cli::{ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::helpers::{parse_category_filter, parse_item_id, parse_output_format};
use crate::output::{item_json, items_json, print_item, print_item_list};
use crate::ui::{blank_line, header_with_context, hint, print};

fn item_not_found(id: &str) -> CliError {
    CliError::not_found(
        format!("Item \"{}\" not found", id),
        "Hint: Run `votebox list` to see item IDs.",
    )
}

fn filter_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "all",
        CategoryFilter::Only(category) => category.english(),
    }
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let filter = parse_category_filter(args.category.as_deref())?;
    let ui = ctx.ui_context(args.json, format);

    let mut store = ctx.open_store()?;
    let items = store.list_items()?;
    let votes = store.list_user_votes()?;
    let voted = voted_item_ids(&votes);
    let visible = filter_by_category(&items, filter);

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&items_json(&visible, &voted))?
        );
        return Ok(());
    }
    if ctx.quiet() {
        for item in &visible {
            println!("{}", item.id);
        }
        return Ok(());
    }

    let store_dir = store.blobs().dir().display().to_string();
    print(
        &ui,
        &header_with_context(&ui, "list", Some(filter_label(filter)), Some(&store_dir)),
    );
    blank_line(&ui);
    if visible.is_empty() {
        println!("No items in this category.");
        return Ok(());
    }
    print_item_list(&ui, &visible, &voted);
    blank_line(&ui);
    print(&ui, &hint(&ui, "votebox vote <ID>"));
    Ok(())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_item_id(&args.id)?;
    let ui = ctx.ui_context(args.json, None);

    let mut store = ctx.open_store()?;
    let item = store.find_item(id)?.ok_or_else(|| item_not_found(id))?;
    let voted = store.has_voted(id)?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&item_json(&item, voted))?);
    } else {
        print_item(&ui, &item, voted, ctx.quiet());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use votebox_core::Category;

    #[test]
    fn test_filter_label_is_english() {
        assert_eq!(filter_label(CategoryFilter::All), "all");
        assert_eq!(
            filter_label(CategoryFilter::Only(Category::Improvement)),
            "improvement"
        );
    }
}
