//! Preference commands: `dryg default` and `dryg theme`.

use std::path::{Path, PathBuf};

use crate::cli::args::{DefaultArgs, ThemeArgs};
use crate::error::{DrygError, Result};
use crate::registry::{normalize_trigger, POPULAR_DEFAULTS};
use crate::resolver::BangResolver;
use crate::store::Theme;
use crate::ui::UserInterface;

use super::dispatcher::{open_registry, open_store, Command, CommandResult};

/// The default command implementation.
pub struct DefaultCommand {
    data_dir: PathBuf,
    args: DefaultArgs,
}

impl DefaultCommand {
    /// Create a new default command.
    pub fn new(data_dir: &Path, args: DefaultArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for DefaultCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = open_registry()?;
        let mut store = open_store(&self.data_dir);
        let current = store.default_trigger().to_string();

        if self.args.list {
            ui.show_header("Popular defaults");
            for (trigger, name) in POPULAR_DEFAULTS {
                let marker = if *trigger == current { "*" } else { " " };
                ui.message(&format!("{} !{:<6} {}", marker, trigger, name));
            }
            return Ok(CommandResult::success());
        }

        let Some(requested) = &self.args.trigger else {
            let resolver = BangResolver::new(&registry, &store);
            let name = resolver
                .lookup(&current)
                .map(|found| found.definition.display_name().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            ui.message(&format!("!{} ({})", current, name));
            return Ok(CommandResult::success());
        };

        let trigger = normalize_trigger(requested);
        let known = BangResolver::new(&registry, &store).lookup(&trigger).is_some();
        if !known {
            let err = DrygError::UnknownTrigger { trigger };
            ui.error(&err.to_string());
            ui.show_hint("See the choices with: dryg default --list");
            return Ok(CommandResult::failure(1));
        }

        store.set_default_trigger(&trigger);
        ui.success(&format!("Default bang set to !{}", trigger));
        Ok(CommandResult::success())
    }
}

/// The theme command implementation.
pub struct ThemeCommand {
    data_dir: PathBuf,
    args: ThemeArgs,
}

impl ThemeCommand {
    /// Create a new theme command.
    pub fn new(data_dir: &Path, args: ThemeArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }
}

impl Command for ThemeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = open_store(&self.data_dir);

        let Some(raw) = &self.args.theme else {
            ui.message(&store.theme().to_string());
            return Ok(CommandResult::success());
        };

        match raw.parse::<Theme>() {
            Ok(theme) => {
                store.set_theme(theme);
                ui.success(&format!("Theme set to {}", theme));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e);
                ui.show_hint("Choose 'light' or 'dark'");
                Ok(CommandResult::failure(1))
            }
        }
    }
}
