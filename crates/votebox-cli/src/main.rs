//! Votebox CLI - vote on proposals and see what matters most
//!
//! Command-line front end for `votebox-core`: browse the catalog, cast and
//! retract votes, and view ranked results.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use std::env;

use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::errors::{exit_code_for, hint_for};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = AppContext::new(&cli);
    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let rendered = format!("{}", e);
        let (message, hint) = split_hint(&rendered);
        let hint = hint
            .or_else(|| hint_for(&e))
            .map(|h| h.trim_start_matches("Hint:").trim());
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Install the stderr subscriber. `VOTEBOX_LOG` takes an `EnvFilter`
/// directive; `VOTEBOX_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("VOTEBOX_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "votebox=debug,votebox_core=debug,warn"
        } else {
            "votebox=warn,votebox_core=warn"
        })
    });

    let format = env::var("VOTEBOX_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Split a trailing "Hint:" line off an error message.
fn split_hint(rendered: &str) -> (&str, Option<&str>) {
    match rendered.find("\nHint:") {
        Some(idx) => (&rendered[..idx], Some(&rendered[idx + 1..])),
        None => (rendered, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => commands::handle_init(ctx, args),
        Some(Commands::List(args)) => commands::handle_list(ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(ctx, args),
        Some(Commands::Vote(args)) => commands::handle_vote(ctx, args),
        Some(Commands::Unvote(args)) => commands::handle_unvote(ctx, args),
        Some(Commands::Votes(args)) => commands::handle_votes(ctx, args),
        Some(Commands::Results(args)) => commands::handle_results(ctx, args),
        Some(Commands::Check(args)) => commands::handle_check(ctx, args),
        Some(Commands::Reset(args)) => commands::handle_reset(ctx, args),
        Some(Commands::Completions(args)) => commands::handle_completions(args.shell),
        None => {
            print_quickstart();
            Ok(())
        }
    }
}

fn print_quickstart() {
    println!("Votebox {}", votebox_core::VERSION);
    println!();
    println!("Quick start:");
    println!("  votebox list              Show items to vote on");
    println!("  votebox vote <ID>         Vote for an item");
    println!("  votebox unvote <ID>       Take back a vote");
    println!("  votebox results           See what is most popular");
    println!();
    println!("Run `votebox --help` for all commands.");
}
