use votebox_core::{RetractOutcome, VoteOutcome};

use crate::app::AppContext;
use crate::cli::{VoteArgs, VotesArgs};
use crate::helpers::{parse_item_id, parse_output_format};
use crate::output::votes_json;
use crate::ui::{
    blank_line, format_datetime, header, hint, print, receipt, simple_table, single_line, Badge,
    Column, UiContext,
};

/// Print the outcome of a vote transition.
fn print_transition(
    ui: &UiContext,
    quiet: bool,
    id: &str,
    status: &str,
    title: &str,
    changed: bool,
    votes: Option<u32>,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        let payload = serde_json::json!({
            "id": id,
            "status": status,
            "changed": changed,
            "votes": votes,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }
    let votes_display = votes
        .map(|count| count.to_string())
        .unwrap_or_else(|| "-".to_string());
    let kind = if changed { Badge::Ok } else { Badge::Info };
    print(
        ui,
        &receipt(
            ui,
            kind,
            status,
            title,
            &[("ID", id), ("Votes", votes_display.as_str())],
        ),
    );
    Ok(())
}

pub fn handle_vote(ctx: &AppContext, args: &VoteArgs) -> anyhow::Result<()> {
    let id = parse_item_id(&args.id)?;
    let ui = ctx.ui_context(args.json, None);

    let mut store = ctx.open_store()?;
    let outcome = store.cast_vote(id)?;
    let votes = store.find_item(id)?.map(|item| item.votes);

    match outcome {
        VoteOutcome::Recorded => {
            print_transition(&ui, ctx.quiet(), id, "recorded", "Vote recorded", true, votes)
        }
        VoteOutcome::AlreadyVoted => print_transition(
            &ui,
            ctx.quiet(),
            id,
            "already_voted",
            "You have already voted for this item",
            false,
            votes,
        ),
    }
}

pub fn handle_unvote(ctx: &AppContext, args: &VoteArgs) -> anyhow::Result<()> {
    let id = parse_item_id(&args.id)?;
    let ui = ctx.ui_context(args.json, None);

    let mut store = ctx.open_store()?;
    let outcome = store.retract_vote(id)?;
    let votes = store.find_item(id)?.map(|item| item.votes);

    match outcome {
        RetractOutcome::Retracted => {
            print_transition(&ui, ctx.quiet(), id, "retracted", "Vote retracted", true, votes)
        }
        RetractOutcome::NotVoted => print_transition(
            &ui,
            ctx.quiet(),
            id,
            "not_voted",
            "You have not voted for this item",
            false,
            votes,
        ),
    }
}

pub fn handle_votes(ctx: &AppContext, args: &VotesArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let ui = ctx.ui_context(args.json, format);

    let mut store = ctx.open_store()?;
    let items = store.list_items()?;
    let votes = store.list_user_votes()?;

    if ui.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&votes_json(&votes, &items))?
        );
        return Ok(());
    }
    if ctx.quiet() {
        for vote in &votes {
            println!("{}", vote.item_id);
        }
        return Ok(());
    }

    print(&ui, &header(&ui, "votes", None));
    blank_line(&ui);
    if votes.is_empty() {
        println!("You have not voted for anything yet.");
        print(&ui, &hint(&ui, "votebox vote <ID>"));
        return Ok(());
    }

    let columns = [
        Column::new("ID"),
        Column::new("TITLE"),
        Column::new("VOTED AT"),
    ];
    let rows: Vec<Vec<String>> = votes
        .iter()
        .map(|vote| {
            let title = items
                .iter()
                .find(|item| item.id == vote.item_id)
                .map(|item| single_line(&item.title))
                .unwrap_or_else(|| "(removed)".to_string());
            vec![
                vote.item_id.clone(),
                title,
                format_datetime(&vote.voted_at, ui.mode.is_pretty()),
            ]
        })
        .collect();
    println!("{}", simple_table(&ui, &columns, &rows));
    Ok(())
}
