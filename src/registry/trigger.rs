//! Trigger definitions shared by the built-in table and the custom store.
//!
//! Both sources use the same [`TriggerDefinition`] shape; where a definition
//! came from is carried separately as a [`TriggerSource`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DrygError, Result};

/// Token inside a URL template replaced by the encoded search term.
pub const PLACEHOLDER: &str = "{{{s}}}";

/// A single `!trigger` mapping.
///
/// Serialized with the short keys of the persisted format
/// (`t`, `u`, `s`, `d`) so existing exports stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDefinition {
    /// Trigger text without the leading `!`, lower-cased.
    #[serde(rename = "t")]
    pub trigger: String,

    /// Destination template containing [`PLACEHOLDER`].
    #[serde(rename = "u")]
    pub url_template: String,

    /// Display name of the target service.
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    /// Domain or absolute URL used when the search term is empty.
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    pub home_target: Option<String>,
}

impl TriggerDefinition {
    /// Create a definition with just a trigger and template.
    pub fn new(trigger: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            url_template: url_template.into(),
            service_name: None,
            home_target: None,
        }
    }

    /// Set the display name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Set the home target.
    pub fn with_home_target(mut self, target: impl Into<String>) -> Self {
        self.home_target = Some(target.into());
        self
    }

    /// Name to show for this definition, falling back to the trigger.
    pub fn display_name(&self) -> &str {
        self.service_name.as_deref().unwrap_or(&self.trigger)
    }

    /// Normalize and validate a user-supplied definition.
    ///
    /// The trigger is normalized with [`normalize_trigger`], blank optional
    /// fields become `None`, and the template must contain exactly one
    /// placeholder.
    pub fn validated(self) -> Result<Self> {
        let trigger = normalize_trigger(&self.trigger);
        if trigger.is_empty() {
            return Err(DrygError::invalid(&self.trigger, "trigger must not be empty"));
        }
        if trigger.chars().any(char::is_whitespace) {
            return Err(DrygError::invalid(
                &trigger,
                "trigger must not contain whitespace",
            ));
        }
        if trigger.starts_with('!') {
            return Err(DrygError::invalid(
                &trigger,
                "trigger must not start with more than one '!'",
            ));
        }

        let url_template = self.url_template.trim().to_string();
        if url_template.is_empty() {
            return Err(DrygError::invalid(&trigger, "URL template must not be empty"));
        }
        match url_template.matches(PLACEHOLDER).count() {
            0 => {
                return Err(DrygError::invalid(
                    &trigger,
                    format!(
                        "URL template must include {} as the search placeholder",
                        PLACEHOLDER
                    ),
                ))
            }
            1 => {}
            _ => {
                return Err(DrygError::invalid(
                    &trigger,
                    format!("URL template must include {} only once", PLACEHOLDER),
                ))
            }
        }

        Ok(Self {
            trigger,
            url_template,
            service_name: non_blank(self.service_name),
            home_target: non_blank(self.home_target),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Normalize trigger input: trim, drop one leading `!`, lower-case.
pub fn normalize_trigger(input: &str) -> String {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('!').unwrap_or(trimmed);
    trimmed.to_lowercase()
}

/// Where a definition was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerSource {
    /// Shipped in the built-in table.
    Builtin,
    /// Defined by the user.
    Custom,
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerSource::Builtin => write!(f, "built-in"),
            TriggerSource::Custom => write!(f, "custom"),
        }
    }
}

/// A looked-up definition together with its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTrigger<'a> {
    pub definition: &'a TriggerDefinition,
    pub source: TriggerSource,
}
