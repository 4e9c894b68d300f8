//! Redirect dispatching.
//!
//! [`RedirectDispatcher`] is the thin shim between a query source and the
//! browser: resolve the query, then either navigate or show the landing
//! page. Navigation is terminal for the invocation.

use url::Url;

use crate::error::{DrygError, Result};
use crate::resolver::BangResolver;
use crate::store::KeyValueBackend;
use crate::ui::UserInterface;

/// Something that can take the user to a URL.
pub trait Navigator {
    /// Navigate to `url`.
    fn navigate(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs in the system browser.
#[derive(Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        tracing::info!("Opening {}", url);
        open::that(url).map_err(|e| DrygError::NavigationFailed {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// Prints URLs to stdout instead of opening them.
#[derive(Debug, Default)]
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        println!("{}", url);
        Ok(())
    }
}

/// Records visited URLs.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Vec<String>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs navigated to, in order.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) -> Result<()> {
        self.visited.push(url.to_string());
        Ok(())
    }
}

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Navigated to this URL.
    Redirected(String),
    /// Nothing to redirect to; the landing page was shown.
    Landing,
}

/// Landing page shown when there is nothing to redirect to.
#[derive(Debug, Clone)]
pub struct LandingPage {
    /// Search URL to register in the browser.
    pub search_url: String,
}

impl LandingPage {
    /// Render the landing page.
    pub fn render(&self, ui: &mut dyn UserInterface) {
        ui.show_header("Dryg Search");
        ui.message("Fast bang redirects. Add the URL below as a custom search engine");
        ui.message("in your browser to enable every built-in bang:");
        ui.message("");
        ui.message(&format!("    {}", self.search_url));
        ui.message("");
        ui.show_hint("Add your own bangs with: dryg add <trigger> <url-template>");
    }
}

/// Resolves a query and performs the redirect.
pub struct RedirectDispatcher<'a, B: KeyValueBackend, N: Navigator> {
    resolver: BangResolver<'a, B>,
    navigator: N,
    landing: LandingPage,
}

impl<'a, B: KeyValueBackend, N: Navigator> RedirectDispatcher<'a, B, N> {
    /// Create a dispatcher.
    pub fn new(resolver: BangResolver<'a, B>, navigator: N, landing: LandingPage) -> Self {
        Self {
            resolver,
            navigator,
            landing,
        }
    }

    /// Resolve `query` and navigate, or render the landing page.
    pub fn dispatch(&mut self, query: &str, ui: &mut dyn UserInterface) -> Result<Dispatch> {
        let resolution = self.resolver.resolve(query);

        match resolution.destination_url {
            Some(url) => {
                self.navigator.navigate(&url)?;
                Ok(Dispatch::Redirected(url))
            }
            None => {
                tracing::debug!("Nothing to redirect to, showing landing page");
                self.landing.render(ui);
                Ok(Dispatch::Landing)
            }
        }
    }

    /// The navigator, for inspecting recorded navigation.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

/// Read the raw query from a search page URL.
///
/// Returns `Ok(None)` when the parameter is absent. Repeated parameters
/// use the first occurrence.
pub fn query_from_url(page_url: &str, param: &str) -> Result<Option<String>> {
    let url = Url::parse(page_url).map_err(|e| DrygError::InvalidUrl {
        url: page_url.to_string(),
        message: e.to_string(),
    })?;

    Ok(url
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned()))
}
