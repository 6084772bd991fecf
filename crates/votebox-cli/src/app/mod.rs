//! Application-level utilities for the Votebox CLI.
//!
//! - Path resolution for the config file and store directory
//! - The per-invocation context handed to command handlers

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
