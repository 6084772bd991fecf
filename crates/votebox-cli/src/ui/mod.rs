//! UI primitives for the Votebox CLI.
//!
//! - **Context**: environment detection (TTY, width, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badge tokens, styles, symbols
//! - **Render**: tables, headers, receipts, hints, vote bars
//! - **Format**: string utilities (truncate, wrap, dates)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{header, table, UiContext};
//!
//! let ctx = UiContext::from_env(args.json, format, cli.no_color, cli.ascii);
//! if ctx.mode.is_json() {
//!     return Ok(());
//! }
//! println!("{}", header(&ctx, "list", None));
//! println!("{}", table(&ctx, &columns, &rows));
//! ```

mod context;
pub mod format;
pub(crate) mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputFormat;
pub use theme::Badge;

pub use render::{
    badge, bar, blank_line, header, header_with_context, hint, kv, print, print_error, receipt,
    simple_table, table, Column,
};

pub use format::{format_datetime, format_percent, single_line, truncate, wrap};
