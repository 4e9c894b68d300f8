//! Custom trigger store.
//!
//! [`TriggerStore`] keeps custom bangs and preferences in memory and writes
//! them through a [`KeyValueBackend`]. Reads fail open: anything missing or
//! unparseable loads as empty. Writes are fire-and-forget: a failed write
//! is logged and the in-memory state keeps the change.

use crate::error::{DrygError, Result};
use crate::registry::{normalize_trigger, TriggerDefinition, UNIVERSAL_DEFAULT_TRIGGER};

use super::backend::KeyValueBackend;
use super::theme::Theme;

/// Key holding the default trigger preference.
pub const KEY_DEFAULT_TRIGGER: &str = "dryg-default-bang";

/// Key holding the JSON array of custom definitions.
pub const KEY_CUSTOM_TRIGGERS: &str = "dryg-custom-bangs";

/// Key holding the theme preference.
pub const KEY_THEME: &str = "dryg-theme";

/// Outcome of [`TriggerStore::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No custom bang had this trigger before.
    Added,
    /// An existing custom bang was replaced.
    Replaced,
}

/// Summary of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Triggers that were stored.
    pub accepted: Vec<String>,
    /// Triggers that failed validation, with the reason.
    pub rejected: Vec<(String, String)>,
}

/// Custom bangs and preferences over a persistence backend.
#[derive(Debug)]
pub struct TriggerStore<B: KeyValueBackend> {
    backend: B,
    custom: Vec<TriggerDefinition>,
    default_trigger: Option<String>,
    theme: Theme,
}

impl<B: KeyValueBackend> TriggerStore<B> {
    /// Load the store from a backend.
    pub fn load(backend: B) -> Self {
        let custom = read_custom(&backend);
        let default_trigger = read_value(&backend, KEY_DEFAULT_TRIGGER)
            .map(|t| normalize_trigger(&t))
            .filter(|t| !t.is_empty());
        let theme = read_value(&backend, KEY_THEME)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!("Ignoring stored theme: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        tracing::debug!(
            "Loaded {} custom bangs (default: {:?})",
            custom.len(),
            default_trigger
        );

        Self {
            backend,
            custom,
            default_trigger,
            theme,
        }
    }

    /// All custom definitions. Order is not significant.
    pub fn list(&self) -> &[TriggerDefinition] {
        &self.custom
    }

    /// Look up a custom definition (case-insensitive).
    pub fn get(&self, trigger: &str) -> Option<&TriggerDefinition> {
        let trigger = trigger.to_lowercase();
        self.custom.iter().find(|d| d.trigger == trigger)
    }

    /// Insert or replace a custom definition.
    ///
    /// The definition is validated first; invalid definitions are never
    /// stored.
    pub fn upsert(&mut self, definition: TriggerDefinition) -> Result<UpsertOutcome> {
        let definition = definition.validated()?;

        let before = self.custom.len();
        self.custom.retain(|d| d.trigger != definition.trigger);
        let outcome = if self.custom.len() < before {
            UpsertOutcome::Replaced
        } else {
            UpsertOutcome::Added
        };

        tracing::debug!("Storing custom bang !{} ({:?})", definition.trigger, outcome);
        self.custom.push(definition);
        self.persist_custom();

        Ok(outcome)
    }

    /// Remove a custom definition. Returns whether one was removed.
    pub fn remove(&mut self, trigger: &str) -> bool {
        let trigger = normalize_trigger(trigger);
        let before = self.custom.len();
        self.custom.retain(|d| d.trigger != trigger);

        let removed = self.custom.len() < before;
        if removed {
            tracing::debug!("Removed custom bang !{}", trigger);
            self.persist_custom();
        }
        removed
    }

    /// Upsert every definition, collecting which ones were rejected.
    pub fn import(&mut self, definitions: Vec<TriggerDefinition>) -> ImportReport {
        let mut report = ImportReport::default();
        for definition in definitions {
            let trigger = definition.trigger.clone();
            match self.upsert(definition) {
                Ok(_) => report.accepted.push(normalize_trigger(&trigger)),
                Err(e) => report.rejected.push((trigger, e.to_string())),
            }
        }
        report
    }

    /// Serialize the custom definitions for export.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.custom).map_err(|e| DrygError::Other(e.into()))
    }

    /// The saved default trigger, or the universal default.
    pub fn default_trigger(&self) -> &str {
        self.default_trigger
            .as_deref()
            .unwrap_or(UNIVERSAL_DEFAULT_TRIGGER)
    }

    /// Save the default trigger. Blank input is ignored.
    pub fn set_default_trigger(&mut self, trigger: &str) {
        let trigger = normalize_trigger(trigger);
        if trigger.is_empty() {
            tracing::debug!("Ignoring blank default trigger");
            return;
        }

        self.write(KEY_DEFAULT_TRIGGER, &trigger);
        self.default_trigger = Some(trigger);
    }

    /// The saved theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Save the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.write(KEY_THEME, &theme.to_string());
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn persist_custom(&mut self) {
        match serde_json::to_string(&self.custom) {
            Ok(json) => self.write(KEY_CUSTOM_TRIGGERS, &json),
            Err(e) => tracing::warn!("Failed to serialize custom bangs: {}", e),
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            tracing::warn!("Failed to persist '{}': {}", key, e);
        }
    }
}

fn read_value<B: KeyValueBackend>(backend: &B, key: &str) -> Option<String> {
    match backend.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Could not read '{}': {}", key, e);
            None
        }
    }
}

/// Decode the custom list, keeping the last entry for repeated triggers.
fn read_custom<B: KeyValueBackend>(backend: &B) -> Vec<TriggerDefinition> {
    let Some(raw) = read_value(backend, KEY_CUSTOM_TRIGGERS) else {
        return Vec::new();
    };

    let parsed: Vec<TriggerDefinition> = match serde_json::from_str(&raw) {
        Ok(defs) => defs,
        Err(e) => {
            let err = DrygError::StoreParseError {
                key: KEY_CUSTOM_TRIGGERS.to_string(),
                message: e.to_string(),
            };
            tracing::warn!("Ignoring custom bangs: {}", err);
            return Vec::new();
        }
    };

    let mut custom: Vec<TriggerDefinition> = Vec::with_capacity(parsed.len());
    for mut def in parsed {
        def.trigger = normalize_trigger(&def.trigger);
        if def.trigger.is_empty() || def.trigger.starts_with('!') {
            continue;
        }
        custom.retain(|d| d.trigger != def.trigger);
        custom.push(def);
    }
    custom
}
