//! Configuration schema.

use serde::{Deserialize, Serialize};

/// User settings from `~/.dryg/config.yml`.
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Query parameter read from a search URL passed with `--url`.
    pub query_param: String,

    /// Search URL shown on the landing page (`%s` marks the query).
    pub search_url: String,

    /// Open destinations in the browser; `false` prints them instead.
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            query_param: "q".to_string(),
            search_url: "https://search.dryg.net?q=%s".to_string(),
            open_browser: true,
        }
    }
}
