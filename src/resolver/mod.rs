//! Bang resolution.
//!
//! [`BangResolver`] turns a raw query into a destination URL:
//!
//! 1. [`tokenizer`] finds the first `!token` and strips it from the query
//! 2. The trigger is looked up in the custom store, then the built-in table
//! 3. Unknown or missing triggers fall back to the saved default trigger,
//!    then to [`UNIVERSAL_DEFAULT_TRIGGER`], through the same two tiers
//! 4. [`template`] substitutes the encoded search term, or picks the home
//!    target when the term is empty
//!
//! Resolution never fails; anything unresolvable yields a [`Resolution`]
//! without a destination.
//!
//! # Example
//!
//! ```
//! use dryg::registry::{BuiltinRegistry, TriggerDefinition};
//! use dryg::resolver::BangResolver;
//! use dryg::store::{MemoryBackend, TriggerStore};
//!
//! let builtin = BuiltinRegistry::new().unwrap();
//! let mut store = TriggerStore::load(MemoryBackend::new());
//! store
//!     .upsert(TriggerDefinition::new("crate", "https://lib.rs/search?q={{{s}}}"))
//!     .unwrap();
//!
//! let resolver = BangResolver::new(&builtin, &store);
//! let resolution = resolver.resolve("!crate serde json");
//! assert_eq!(
//!     resolution.destination_url.as_deref(),
//!     Some("https://lib.rs/search?q=serde%20json")
//! );
//! ```

pub mod template;
pub mod tokenizer;

pub use template::{encode_search_term, fill_template, home_url};
pub use tokenizer::{find_marker, parse_query, strip_marker, Marker, ParsedQuery};

use serde::Serialize;

use crate::registry::{
    BuiltinRegistry, ResolvedTrigger, TriggerSource, UNIVERSAL_DEFAULT_TRIGGER,
};
use crate::store::{KeyValueBackend, TriggerStore};

/// Outcome of resolving a query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Resolution {
    /// Where to go. `None` means no redirect: show the landing page.
    pub destination_url: Option<String>,
    /// Trigger typed in the query, if any.
    pub candidate: Option<String>,
    /// Trigger of the definition that was used.
    pub trigger: Option<String>,
    /// Source of the definition that was used.
    pub source: Option<TriggerSource>,
    /// Query with the first marker removed.
    pub search_term: String,
}

impl Resolution {
    /// Whether the candidate trigger was unknown and a default was used.
    pub fn fell_back(&self) -> bool {
        match (&self.candidate, &self.trigger) {
            (Some(candidate), Some(used)) => candidate != used,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

/// Resolves queries against the custom store and the built-in table.
pub struct BangResolver<'a, B: KeyValueBackend> {
    builtin: &'a BuiltinRegistry,
    store: &'a TriggerStore<B>,
}

impl<'a, B: KeyValueBackend> BangResolver<'a, B> {
    /// Create a resolver over the given sources.
    pub fn new(builtin: &'a BuiltinRegistry, store: &'a TriggerStore<B>) -> Self {
        Self { builtin, store }
    }

    /// Look up a trigger, custom definitions first.
    pub fn lookup(&self, trigger: &str) -> Option<ResolvedTrigger<'a>> {
        if let Some(definition) = self.store.get(trigger) {
            return Some(ResolvedTrigger {
                definition,
                source: TriggerSource::Custom,
            });
        }

        self.builtin.lookup(trigger).map(|definition| ResolvedTrigger {
            definition,
            source: TriggerSource::Builtin,
        })
    }

    /// The definition used when a query names no known trigger.
    pub fn default_definition(&self) -> Option<ResolvedTrigger<'a>> {
        let preferred = self.store.default_trigger();
        self.lookup(preferred).or_else(|| {
            tracing::debug!(
                "Default bang !{} is unknown, using !{}",
                preferred,
                UNIVERSAL_DEFAULT_TRIGGER
            );
            self.lookup(UNIVERSAL_DEFAULT_TRIGGER)
        })
    }

    /// Resolve a raw query.
    pub fn resolve(&self, raw_query: &str) -> Resolution {
        let query = raw_query.trim();
        if query.is_empty() {
            return Resolution::default();
        }

        let parsed = parse_query(query);
        let effective = match parsed.trigger.as_deref() {
            Some(candidate) => self.lookup(candidate).or_else(|| {
                tracing::debug!("Unknown bang !{}, using default", candidate);
                self.default_definition()
            }),
            None => self.default_definition(),
        };

        let mut resolution = Resolution {
            destination_url: None,
            candidate: parsed.trigger,
            trigger: None,
            source: None,
            search_term: parsed.search_term,
        };

        let Some(effective) = effective else {
            tracing::debug!("No bang resolved for query");
            return resolution;
        };

        let definition = effective.definition;
        resolution.trigger = Some(definition.trigger.clone());
        resolution.source = Some(effective.source);

        resolution.destination_url = if resolution.search_term.is_empty() {
            definition.home_target.as_deref().and_then(home_url)
        } else {
            let url = fill_template(&definition.url_template, &resolution.search_term);
            if url.is_none() {
                tracing::warn!("Bang !{} has no search placeholder", definition.trigger);
            }
            url
        };

        tracing::debug!(
            "Resolved via !{} ({}) to {:?}",
            definition.trigger,
            effective.source,
            resolution.destination_url
        );

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TriggerDefinition;
    use crate::store::{MemoryBackend, KEY_CUSTOM_TRIGGERS};

    fn small_registry() -> BuiltinRegistry {
        BuiltinRegistry::from_definitions(vec![
            TriggerDefinition::new("g", "https://google.test/search?q={{{s}}}")
                .with_home_target("google.test"),
            TriggerDefinition::new("gh", "https://github.test/search?q={{{s}}}")
                .with_home_target("github.test"),
            TriggerDefinition::new("ghr", "https://github.test/{{{s}}}"),
            TriggerDefinition::new("ddg", "https://ddg.test/?q={{{s}}}"),
            TriggerDefinition::new("nohome", "https://nohome.test/?q={{{s}}}"),
        ])
    }

    fn empty_store() -> TriggerStore<MemoryBackend> {
        TriggerStore::load(MemoryBackend::new())
    }

    fn url(resolution: Resolution) -> Option<String> {
        resolution.destination_url
    }

    #[test]
    fn empty_query_has_no_destination() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        assert_eq!(resolver.resolve(""), Resolution::default());
        assert_eq!(resolver.resolve("   \t "), Resolution::default());
    }

    #[test]
    fn no_marker_uses_default_template() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        assert_eq!(
            url(resolver.resolve("rust traits")).as_deref(),
            Some("https://google.test/search?q=rust%20traits")
        );
    }

    #[test]
    fn no_marker_uses_saved_default() {
        let registry = small_registry();
        let mut store = empty_store();
        store.set_default_trigger("ddg");
        let resolver = BangResolver::new(&registry, &store);
        assert_eq!(
            url(resolver.resolve("rust")).as_deref(),
            Some("https://ddg.test/?q=rust")
        );
    }

    #[test]
    fn custom_beats_builtin() {
        let registry = small_registry();
        let mut store = empty_store();
        store
            .upsert(TriggerDefinition::new("gh", "https://git.corp.test/search?q={{{s}}}"))
            .unwrap();
        let resolver = BangResolver::new(&registry, &store);

        let resolution = resolver.resolve("!gh tokio");
        assert_eq!(resolution.source, Some(TriggerSource::Custom));
        assert_eq!(
            resolution.destination_url.as_deref(),
            Some("https://git.corp.test/search?q=tokio")
        );
    }

    #[test]
    fn trigger_lookup_is_case_insensitive() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        let resolution = resolver.resolve("!GH serde");
        assert_eq!(resolution.trigger.as_deref(), Some("gh"));
    }

    #[test]
    fn marker_only_uses_home_target() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        assert_eq!(
            url(resolver.resolve("!gh")).as_deref(),
            Some("https://github.test")
        );
    }

    #[test]
    fn marker_only_without_home_target_has_no_destination() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        let resolution = resolver.resolve("!nohome");
        assert_eq!(resolution.destination_url, None);
        assert_eq!(resolution.trigger.as_deref(), Some("nohome"));
    }

    #[test]
    fn scheme_qualified_home_target_is_unchanged() {
        let registry = small_registry();
        let mut store = empty_store();
        store
            .upsert(
                TriggerDefinition::new("org", "https://example.com/org/search?q={{{s}}}")
                    .with_home_target("https://example.com/org"),
            )
            .unwrap();
        let resolver = BangResolver::new(&registry, &store);
        assert_eq!(
            url(resolver.resolve("!org")).as_deref(),
            Some("https://example.com/org")
        );
    }

    #[test]
    fn slashes_stay_literal() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        let destination = url(resolver.resolve("!ghr user/repo")).unwrap();
        assert_eq!(destination, "https://github.test/user/repo");
        assert!(!destination.contains("%2F"));
    }

    #[test]
    fn only_first_marker_counts() {
        let registry = BuiltinRegistry::from_definitions(vec![
            TriggerDefinition::new("g", "https://google.test/?q={{{s}}}"),
            TriggerDefinition::new("a", "https://a.test/?q={{{s}}}"),
            TriggerDefinition::new("b", "https://b.test/?q={{{s}}}"),
        ]);
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);

        let resolution = resolver.resolve("!a text !b more");
        assert_eq!(resolution.trigger.as_deref(), Some("a"));
        assert_eq!(resolution.search_term, "text !b more");
        assert_eq!(
            resolution.destination_url.as_deref(),
            Some("https://a.test/?q=text%20%21b%20more")
        );
    }

    #[test]
    fn unknown_trigger_falls_back_to_default_without_marker() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);

        let resolution = resolver.resolve("!unknownxyz term");
        assert!(resolution.fell_back());
        assert_eq!(resolution.candidate.as_deref(), Some("unknownxyz"));
        assert_eq!(
            resolution.destination_url.as_deref(),
            Some("https://google.test/search?q=term")
        );
    }

    #[test]
    fn unknown_saved_default_falls_back_to_universal_default() {
        let registry = small_registry();
        let mut store = empty_store();
        store.set_default_trigger("gone");
        let resolver = BangResolver::new(&registry, &store);
        assert_eq!(
            resolver.resolve("x").trigger.as_deref(),
            Some(UNIVERSAL_DEFAULT_TRIGGER)
        );
    }

    #[test]
    fn saved_default_may_be_custom() {
        let registry = small_registry();
        let mut store = empty_store();
        store
            .upsert(TriggerDefinition::new("intra", "https://intra.test/?q={{{s}}}"))
            .unwrap();
        store.set_default_trigger("intra");
        let resolver = BangResolver::new(&registry, &store);

        let resolution = resolver.resolve("quarterly report");
        assert_eq!(resolution.source, Some(TriggerSource::Custom));
        assert_eq!(
            resolution.destination_url.as_deref(),
            Some("https://intra.test/?q=quarterly%20report")
        );
    }

    #[test]
    fn unresolvable_default_chain_has_no_destination() {
        let registry = BuiltinRegistry::from_definitions(vec![TriggerDefinition::new(
            "w",
            "https://w.test/{{{s}}}",
        )]);
        let mut store = empty_store();
        store.set_default_trigger("missing");
        let resolver = BangResolver::new(&registry, &store);

        let resolution = resolver.resolve("!unknownxyz term");
        assert_eq!(resolution.destination_url, None);
        assert_eq!(resolution.trigger, None);
        assert!(resolution.fell_back());
    }

    #[test]
    fn template_without_placeholder_has_no_destination() {
        let registry = small_registry();
        let raw = r#"[{"t":"broken","u":"https://broken.test/"}]"#;
        let store = TriggerStore::load(MemoryBackend::new().with_value(KEY_CUSTOM_TRIGGERS, raw));
        let resolver = BangResolver::new(&registry, &store);
        assert_eq!(url(resolver.resolve("!broken term")), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        for query in ["!gh serde", "plain", "!gh", "", "!nope x", "!ghr a/b"] {
            assert_eq!(resolver.resolve(query), resolver.resolve(query));
        }
    }

    #[test]
    fn single_character_bang_mid_query() {
        let registry = small_registry();
        let store = empty_store();
        let resolver = BangResolver::new(&registry, &store);
        let resolution = resolver.resolve("tokio runtime !gh");
        assert_eq!(resolution.search_term, "tokio runtime");
        assert_eq!(resolution.trigger.as_deref(), Some("gh"));
    }
}
