//! Search command implementation.
//!
//! `dryg search` (and bare `dryg <query>`) resolves the query and sends
//! the user to the destination, or shows the landing page when there is
//! nowhere to go.

use std::path::{Path, PathBuf};

use crate::cli::args::SearchArgs;
use crate::config::Settings;
use crate::dispatcher::{
    query_from_url, BrowserNavigator, Dispatch, LandingPage, Navigator, PrintNavigator,
    RedirectDispatcher,
};
use crate::error::{DrygError, Result};
use crate::resolver::BangResolver;
use crate::ui::UserInterface;

use super::dispatcher::{open_registry, open_store, Command, CommandResult};

/// The search command implementation.
pub struct SearchCommand {
    data_dir: PathBuf,
    settings: Settings,
    args: SearchArgs,
}

impl SearchCommand {
    /// Create a new search command.
    pub fn new(data_dir: &Path, settings: &Settings, args: SearchArgs) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            settings: settings.clone(),
            args,
        }
    }

    /// The query to resolve, from `--url` or the positional words.
    pub fn query(&self) -> Result<String> {
        match &self.args.url {
            Some(url) => Ok(query_from_url(url, &self.settings.query_param)?.unwrap_or_default()),
            None => Ok(self.args.joined_query()),
        }
    }

    /// Whether destinations are printed rather than opened.
    pub fn prints(&self) -> bool {
        self.args.print || !self.settings.open_browser
    }

    fn run<N: Navigator>(
        &self,
        query: &str,
        navigator: N,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let registry = open_registry()?;
        let store = open_store(&self.data_dir);
        let landing = LandingPage {
            search_url: self.settings.search_url.clone(),
        };
        let mut dispatcher =
            RedirectDispatcher::new(BangResolver::new(&registry, &store), navigator, landing);

        match dispatcher.dispatch(query, ui) {
            Ok(Dispatch::Redirected(url)) => {
                tracing::debug!("Redirected to {}", url);
                Ok(CommandResult::success())
            }
            Ok(Dispatch::Landing) => Ok(CommandResult::success()),
            Err(DrygError::NavigationFailed { url, message }) => {
                ui.error(&format!("Could not open a browser: {}", message));
                ui.message(&url);
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}

impl Command for SearchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let query = match self.query() {
            Ok(q) => q,
            Err(e @ DrygError::InvalidUrl { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };
        tracing::debug!("Searching for {:?}", query);

        if self.prints() {
            self.run(&query, PrintNavigator, ui)
        } else {
            self.run(&query, BrowserNavigator, ui)
        }
    }
}
