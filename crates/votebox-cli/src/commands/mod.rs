//! Command handlers, one function per subcommand.

mod init;
mod items;
mod maintenance;
mod misc;
mod results;
mod votes;

pub use init::handle_init;
pub use items::{handle_list, handle_show};
pub use maintenance::{handle_check, handle_reset};
pub use misc::handle_completions;
pub use results::handle_results;
pub use votes::{handle_unvote, handle_vote, handle_votes};

