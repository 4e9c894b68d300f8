//! Persistent storage for custom bangs and preferences.
//!
//! The store is an explicit object injected into the resolver and the CLI
//! commands rather than global state:
//! - [`KeyValueBackend`] is the load/save boundary ([`FileBackend`] on disk,
//!   [`MemoryBackend`] in tests)
//! - [`TriggerStore`] holds the in-memory representation

pub mod backend;
pub mod theme;
pub mod triggers;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use theme::Theme;
pub use triggers::{
    ImportReport, TriggerStore, UpsertOutcome, KEY_CUSTOM_TRIGGERS, KEY_DEFAULT_TRIGGER,
    KEY_THEME,
};
