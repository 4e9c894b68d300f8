//! Trigger registry for dryg.
//!
//! This module holds the trigger data model and the built-in table:
//! - [`TriggerDefinition`] and [`TriggerSource`] shared by both sources
//! - [`BuiltinRegistry`], the bang table embedded in the binary
//!
//! User-defined triggers live in [`crate::store`].
//!
//! # Example
//!
//! ```
//! use dryg::registry::BuiltinRegistry;
//!
//! let registry = BuiltinRegistry::new().unwrap();
//! if let Some(def) = registry.lookup("gh") {
//!     println!("!gh -> {}", def.url_template);
//! }
//! ```

pub mod builtin;
pub mod trigger;

// Re-exports
pub use builtin::{BuiltinRegistry, POPULAR_DEFAULTS, UNIVERSAL_DEFAULT_TRIGGER};
pub use trigger::{
    normalize_trigger, ResolvedTrigger, TriggerDefinition, TriggerSource, PLACEHOLDER,
};
