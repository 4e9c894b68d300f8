//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::registry::BuiltinRegistry;
use crate::store::{FileBackend, TriggerStore};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Open the trigger store of a data directory.
pub fn open_store(data_dir: &Path) -> TriggerStore<FileBackend> {
    TriggerStore::load(FileBackend::in_dir(data_dir))
}

/// Load the embedded bangs.
pub fn open_registry() -> Result<BuiltinRegistry> {
    BuiltinRegistry::new()
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: PathBuf,
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given data directory.
    pub fn new(data_dir: PathBuf, settings: Settings) -> Self {
        Self { data_dir, settings }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. Without a subcommand the top-level query is searched.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dir = &self.data_dir;
        match &cli.command {
            Some(Commands::Search(args)) => {
                super::search::SearchCommand::new(dir, &self.settings, args.clone()).execute(ui)
            }
            Some(Commands::Resolve(args)) => {
                super::resolve::ResolveCommand::new(dir, args.clone()).execute(ui)
            }
            Some(Commands::Add(args)) => {
                super::bangs::AddCommand::new(dir, args.clone()).execute(ui)
            }
            Some(Commands::Remove(args)) => {
                super::bangs::RemoveCommand::new(dir, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::bangs::ListCommand::new(dir, args.clone()).execute(ui)
            }
            Some(Commands::Default(args)) => {
                super::preferences::DefaultCommand::new(dir, args.clone()).execute(ui)
            }
            Some(Commands::Theme(args)) => {
                super::preferences::ThemeCommand::new(dir, args.clone()).execute(ui)
            }
            Some(Commands::Export) => super::bangs::ExportCommand::new(dir).execute(ui),
            Some(Commands::Import(args)) => {
                super::bangs::ImportCommand::new(dir, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::search::SearchCommand::new(dir, &self.settings, cli.search.clone())
                .execute(ui),
        }
    }
}
