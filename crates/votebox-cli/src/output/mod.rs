//! Output formatting helpers for the CLI.
//!
//! JSON payloads for `--json` and text renderers for plain and pretty modes.

mod json;
mod text;

pub use json::{item_json, items_json, results_json, votes_json};
pub use text::{print_item, print_item_list};
