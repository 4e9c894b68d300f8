//! Built-in bangs embedded at compile time.

use crate::error::{DrygError, Result};
use crate::registry::trigger::{normalize_trigger, TriggerDefinition};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use std::collections::HashMap;

/// Embedded bang table, one YAML file per category.
static BANGS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/bangs");

/// Trigger used when neither the query nor the saved preference resolves.
pub const UNIVERSAL_DEFAULT_TRIGGER: &str = "g";

/// General search engines offered as default choices, as `(trigger, name)`.
pub const POPULAR_DEFAULTS: &[(&str, &str)] = &[
    ("g", "Google"),
    ("ddg", "DuckDuckGo"),
    ("b", "Bing"),
    ("sp", "Startpage"),
    ("brave", "Brave Search"),
    ("ka", "Kagi"),
];

/// One category file of the embedded table.
#[derive(Debug, Deserialize)]
struct CategoryFile {
    category: String,
    #[serde(default)]
    bangs: Vec<TriggerDefinition>,
}

/// Load all built-in definitions from the embedded table.
///
/// Files are read in path order so duplicate handling is deterministic.
pub fn load_definitions() -> Result<Vec<TriggerDefinition>> {
    let mut files: Vec<_> = BANGS_DIR
        .files()
        .filter(|f| {
            f.path()
                .extension()
                .map(|e| e == "yml" || e == "yaml")
                .unwrap_or(false)
        })
        .collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    let mut definitions = Vec::new();
    for file in files {
        let content = file
            .contents_utf8()
            .ok_or_else(|| DrygError::ConfigParseError {
                path: file.path().to_path_buf(),
                message: "Invalid UTF-8".to_string(),
            })?;
        let parsed: CategoryFile =
            serde_yaml::from_str(content).map_err(|e| DrygError::ConfigParseError {
                path: file.path().to_path_buf(),
                message: e.to_string(),
            })?;
        tracing::trace!(
            "Loaded {} bangs from category '{}'",
            parsed.bangs.len(),
            parsed.category
        );
        definitions.extend(parsed.bangs);
    }

    Ok(definitions)
}

/// The immutable built-in trigger table.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    definitions: Vec<TriggerDefinition>,
    index: HashMap<String, usize>,
}

impl BuiltinRegistry {
    /// Load the embedded table.
    pub fn new() -> Result<Self> {
        let registry = Self::from_definitions(load_definitions()?);
        tracing::debug!("Loaded {} built-in bangs", registry.len());
        Ok(registry)
    }

    /// Build a registry from an explicit list.
    ///
    /// Triggers are lower-cased; the first definition of a trigger wins.
    pub fn from_definitions(definitions: Vec<TriggerDefinition>) -> Self {
        let mut kept = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());

        for mut def in definitions {
            def.trigger = def.trigger.to_lowercase();
            if index.contains_key(&def.trigger) {
                tracing::debug!("Ignoring duplicate built-in bang !{}", def.trigger);
                continue;
            }
            index.insert(def.trigger.clone(), kept.len());
            kept.push(def);
        }

        Self {
            definitions: kept,
            index,
        }
    }

    /// Look up a trigger (case-insensitive).
    pub fn lookup(&self, trigger: &str) -> Option<&TriggerDefinition> {
        self.index
            .get(&trigger.to_lowercase())
            .map(|&i| &self.definitions[i])
    }

    /// The built-in a custom trigger would shadow, if any.
    pub fn conflict(&self, trigger: &str) -> Option<&TriggerDefinition> {
        self.lookup(&normalize_trigger(trigger))
    }

    /// All definitions in table order.
    pub fn definitions(&self) -> &[TriggerDefinition] {
        &self.definitions
    }

    /// All trigger names in table order.
    pub fn triggers(&self) -> Vec<&str> {
        self.definitions.iter().map(|d| d.trigger.as_str()).collect()
    }

    /// Number of built-in bangs.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
