//! Custom bang management commands.
//!
//! `dryg add`, `dryg remove`, `dryg list`, `dryg export` and `dryg import`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::{AddArgs, ImportArgs, ListArgs, RemoveArgs};
use crate::error::{DrygError, Result};
use crate::registry::{normalize_trigger, TriggerDefinition};
use crate::store::UpsertOutcome;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{open_registry, open_store, Command, CommandResult};

/// The add command implementation.
pub struct AddCommand {
    data_dir: PathBuf,
    args: AddArgs,
}

impl AddCommand {
    /// Create a new add command.
    pub fn new(data_dir: &Path, args: AddArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    fn definition(&self) -> TriggerDefinition {
        let mut definition = TriggerDefinition::new(&self.args.trigger, &self.args.url_template);
        if let Some(name) = &self.args.name {
            definition = definition.with_service_name(name);
        }
        if let Some(domain) = &self.args.domain {
            definition = definition.with_home_target(domain);
        }
        definition
    }
}

impl Command for AddCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = open_registry()?;
        let mut store = open_store(&self.data_dir);
        let trigger = normalize_trigger(&self.args.trigger);

        match store.upsert(self.definition()) {
            Ok(outcome) => {
                if let Some(builtin) = registry.conflict(&trigger) {
                    ui.warning(&format!(
                        "!{} overrides the built-in {} bang",
                        trigger,
                        builtin.display_name()
                    ));
                }
                let verb = match outcome {
                    UpsertOutcome::Added => "Added",
                    UpsertOutcome::Replaced => "Updated",
                };
                ui.success(&format!("{} !{}", verb, trigger));
                Ok(CommandResult::success())
            }
            Err(e @ DrygError::InvalidTrigger { .. }) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

/// The remove command implementation.
pub struct RemoveCommand {
    data_dir: PathBuf,
    args: RemoveArgs,
}

impl RemoveCommand {
    /// Create a new remove command.
    pub fn new(data_dir: &Path, args: RemoveArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for RemoveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store(&self.data_dir);
        let trigger = normalize_trigger(&self.args.trigger);

        if store.remove(&trigger) {
            ui.success(&format!("Removed !{}", trigger));
            Ok(CommandResult::success())
        } else {
            ui.warning(&format!("No custom bang !{}", trigger));
            Ok(CommandResult::failure(1))
        }
    }
}

/// The list command implementation.
pub struct ListCommand {
    data_dir: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(data_dir: &Path, args: ListArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry;
        let store;
        let definitions: Vec<&TriggerDefinition> = if self.args.builtin {
            registry = open_registry()?;
            registry.definitions().iter().collect()
        } else {
            store = open_store(&self.data_dir);
            let mut defs: Vec<_> = store.list().iter().collect();
            defs.sort_by(|a, b| a.trigger.cmp(&b.trigger));
            defs
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&definitions)
                .map_err(|e| DrygError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if definitions.is_empty() {
            ui.message("No custom bangs.");
            ui.show_hint("Add one with: dryg add <trigger> <url-template>");
            return Ok(CommandResult::success());
        }

        let palette = ui.palette().clone();
        let mut table = Table::new(vec!["Bang", "Service", "URL"]);
        for def in &definitions {
            let bang = palette.trigger.apply_to(format!("!{}", def.trigger)).to_string();
            let url = palette.url.apply_to(&def.url_template).to_string();
            table.add_row(vec![bang.as_str(), def.display_name(), url.as_str()]);
        }
        for line in table.render().lines() {
            ui.message(line);
        }

        if ui.output_mode().shows_status() {
            let kind = if self.args.builtin { "built-in" } else { "custom" };
            ui.message("");
            ui.message(&format!("{} {} bangs", definitions.len(), kind));
        }

        Ok(CommandResult::success())
    }
}

/// The export command implementation.
pub struct ExportCommand {
    data_dir: PathBuf,
}

impl ExportCommand {
    /// Create a new export command.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = open_store(&self.data_dir);
        ui.message(&store.export_json()?);
        Ok(CommandResult::success())
    }
}

/// The import command implementation.
pub struct ImportCommand {
    data_dir: PathBuf,
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(data_dir: &Path, args: ImportArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    fn read_definitions(&self) -> Result<Vec<TriggerDefinition>> {
        let content = fs::read_to_string(&self.args.file)?;
        serde_json::from_str(&content).map_err(|e| DrygError::ConfigParseError {
            path: self.args.file.clone(),
            message: e.to_string(),
        })
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let definitions = match self.read_definitions() {
            Ok(defs) => defs,
            Err(e @ DrygError::ConfigParseError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let mut store = open_store(&self.data_dir);
        let report = store.import(definitions);

        for (trigger, reason) in &report.rejected {
            ui.warning(&format!("Skipped !{}: {}", trigger, reason));
        }
        ui.success(&format!("Imported {} bangs", report.accepted.len()));

        Ok(if report.rejected.is_empty() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
