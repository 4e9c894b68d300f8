//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Dryg - Fast bang redirects from the command line.
///
/// A bare query is searched (`dryg !gh tokio`). A query whose first word
/// is a subcommand name goes through `dryg search` or after `--`.
#[derive(Debug, Parser)]
#[command(name = "dryg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Queries starting with a command name: dryg -- default gateway")]
pub struct Cli {
    /// Data directory (overrides ~/.dryg)
    #[arg(long, global = true, env = "DRYG_HOME")]
    pub home: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Search used when no subcommand is given (`dryg !gh tokio`)
    #[command(flatten)]
    pub search: SearchArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a query and open the destination (default)
    Search(SearchArgs),

    /// Print where a query would redirect without opening it
    Resolve(ResolveArgs),

    /// Add or replace a custom bang
    Add(AddArgs),

    /// Remove a custom bang
    Remove(RemoveArgs),

    /// List custom or built-in bangs
    List(ListArgs),

    /// Show or set the default bang
    Default(DefaultArgs),

    /// Show or set the color theme
    Theme(ThemeArgs),

    /// Print custom bangs as JSON
    Export,

    /// Import custom bangs from a JSON file
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `search` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SearchArgs {
    /// Query, e.g. `!gh tokio`
    pub query: Vec<String>,

    /// Read the query from a full search page URL
    #[arg(long, conflicts_with = "query")]
    pub url: Option<String>,

    /// Print the destination instead of opening a browser
    #[arg(long)]
    pub print: bool,
}

impl SearchArgs {
    /// The words of the query joined with single spaces.
    pub fn joined_query(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Query to resolve
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Show which bang was used and why
    #[arg(long)]
    pub explain: bool,

    /// Output the resolution as JSON
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Trigger, with or without the leading `!`
    pub trigger: String,

    /// Destination URL containing {{{s}}}
    pub url_template: String,

    /// Display name of the service
    #[arg(long)]
    pub name: Option<String>,

    /// Page to open when the search term is empty
    #[arg(long)]
    pub domain: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Trigger to remove
    pub trigger: String,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// List the built-in bangs instead of custom ones
    #[arg(long)]
    pub builtin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `default` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DefaultArgs {
    /// New default trigger
    pub trigger: Option<String>,

    /// List popular default choices
    #[arg(long, conflicts_with = "trigger")]
    pub list: bool,
}

/// Arguments for the `theme` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ThemeArgs {
    /// `light` or `dark`
    pub theme: Option<String>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// JSON file produced by `dryg export`
    pub file: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
