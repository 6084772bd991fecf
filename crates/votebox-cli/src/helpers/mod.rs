//! Input and parsing helper functions for the CLI.
//!
//! - Confirmation prompts (`input`)
//! - Output format, category, and item id parsing (`parsing`)

mod input;
mod parsing;

pub use input::confirm;
pub use parsing::{parse_category_filter, parse_item_id, parse_output_format};
