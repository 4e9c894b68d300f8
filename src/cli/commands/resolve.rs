//! Resolve command implementation.
//!
//! The `dryg resolve` command prints where a query would go without
//! navigating. Exits with 1 when the query has no destination. `--explain`
//! (or `-v`) shows which bang was used.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::error::{DrygError, Result};
use crate::resolver::{BangResolver, Resolution};
use crate::ui::UserInterface;

use super::dispatcher::{open_registry, open_store, Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    data_dir: PathBuf,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(data_dir: &Path, args: ResolveArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            args,
        }
    }

    fn explain(&self, resolution: &Resolution, ui: &mut dyn UserInterface) {
        let palette = ui.palette().clone();
        let bang = match (&resolution.trigger, &resolution.source) {
            (Some(trigger), Some(source)) => format!(
                "{} ({})",
                palette.trigger.apply_to(format!("!{}", trigger)),
                source
            ),
            _ => "none".to_string(),
        };
        let destination = match &resolution.destination_url {
            Some(url) => palette.url.apply_to(url).to_string(),
            None => "none".to_string(),
        };

        ui.message(&format!("Query:       {}", self.args.query.join(" ")));
        if let Some(candidate) = &resolution.candidate {
            ui.message(&format!(
                "Typed bang:  {}",
                palette.trigger.apply_to(format!("!{}", candidate))
            ));
        }
        ui.message(&format!("Used bang:   {}", bang));
        ui.message(&format!("Search term: {}", resolution.search_term));
        ui.message(&format!("Destination: {}", destination));

        if resolution.fell_back() {
            ui.show_hint("The typed bang is unknown; the default bang was used.");
        }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = open_registry()?;
        let store = open_store(&self.data_dir);
        let resolver = BangResolver::new(&registry, &store);

        let resolution = resolver.resolve(&self.args.query.join(" "));

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolution)
                .map_err(|e| DrygError::Other(e.into()))?;
            ui.message(&json);
        } else if self.args.explain || ui.output_mode().shows_details() {
            self.explain(&resolution, ui);
        } else if let Some(url) = &resolution.destination_url {
            ui.message(url);
        }

        Ok(if resolution.destination_url.is_some() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TriggerDefinition;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn run(temp: &TempDir, query: &str, explain: bool, json: bool) -> (CommandResult, MockUI) {
        run_with_mode(temp, query, explain, json, OutputMode::Normal)
    }

    fn run_with_mode(
        temp: &TempDir,
        query: &str,
        explain: bool,
        json: bool,
        mode: OutputMode,
    ) -> (CommandResult, MockUI) {
        let args = ResolveArgs {
            query: query.split(' ').map(String::from).collect(),
            explain,
            json,
        };
        let mut ui = MockUI::with_mode(mode);
        let result = ResolveCommand::new(temp.path(), args)
            .execute(&mut ui)
            .unwrap();
        (result, ui)
    }

    #[test]
    fn prints_destination() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, "!ghr tokio-rs/tokio", false, false);
        assert!(result.success);
        assert_eq!(ui.messages(), ["https://github.com/tokio-rs/tokio"]);
    }

    #[test]
    fn home_target_destination() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, "!ghr", false, false);
        assert!(result.success);
        assert_eq!(ui.messages(), ["https://github.com"]);
    }

    #[test]
    fn missing_destination_exits_one() {
        let temp = TempDir::new().unwrap();
        open_store(temp.path())
            .upsert(TriggerDefinition::new("nohome", "https://nohome.test/{{{s}}}"))
            .unwrap();

        let (result, ui) = run(&temp, "!nohome", false, false);
        assert_eq!(result.exit_code, 1);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn explain_reports_fallback() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, "!zzzunknown rust", true, false);
        assert!(result.success);
        assert!(ui.has_message("Typed bang:  !zzzunknown"));
        assert!(ui.has_message("Used bang:   !g (built-in)"));
        assert!(ui.has_message("Search term: rust"));
        assert!(ui.has_hint("unknown"));
    }

    #[test]
    fn verbose_mode_explains() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run_with_mode(&temp, "!w rust", false, false, OutputMode::Verbose);
        assert!(result.success);
        assert!(ui.has_message("Used bang:   !w (built-in)"));
        assert!(ui.has_message("Destination: https://en.wikipedia.org/"));
    }

    #[test]
    fn quiet_mode_prints_only_destination() {
        let temp = TempDir::new().unwrap();
        let (_, ui) = run_with_mode(&temp, "!w rust", false, false, OutputMode::Quiet);
        assert_eq!(ui.messages().len(), 1);
        assert!(ui.messages()[0].starts_with("https://en.wikipedia.org/"));
    }

    #[test]
    fn json_output_is_parseable() {
        let temp = TempDir::new().unwrap();
        let (_, ui) = run(&temp, "!w rust lang", false, true);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["trigger"], "w");
        assert_eq!(value["source"], "builtin");
        assert_eq!(value["search_term"], "rust lang");
    }
}
