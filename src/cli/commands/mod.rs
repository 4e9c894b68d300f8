//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`dryg add`, `dryg resolve`)
//! - A bare query (`dryg !gh tokio`) falling through to `search`
//! - Consistent global flag handling

pub mod bangs;
pub mod completions;
pub mod dispatcher;
pub mod preferences;
pub mod resolve;
pub mod search;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
