use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use votebox_core::VERSION;

/// Votebox - vote on proposals and see what matters most
#[derive(Parser)]
#[command(name = "votebox")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the vote records
    #[arg(short, long, global = true, env = "VOTEBOX_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Directory where the vote records will be kept
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only show items in this category (all, project, feature, improvement, other)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `vote` and `unvote` commands
#[derive(Args)]
pub struct VoteArgs {
    /// Item ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `votes` command
#[derive(Args)]
pub struct VotesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `results` command
#[derive(Args)]
pub struct ResultsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `reset` command
#[derive(Args)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and seed the default catalog
    Init(InitArgs),

    /// List items to vote on
    List(ListArgs),

    /// Show a single item
    Show(ShowArgs),

    /// Vote for an item
    Vote(VoteArgs),

    /// Take back a vote
    Unvote(VoteArgs),

    /// List the items you have voted for
    Votes(VotesArgs),

    /// Show results ranked by votes
    Results(ResultsArgs),

    /// Compare item counts against your votes
    Check(CheckArgs),

    /// Delete all items and votes (the catalog is reseeded on next use)
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
