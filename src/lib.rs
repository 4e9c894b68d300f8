//! Dryg - Fast bang redirects.
//!
//! Dryg turns a query such as `!gh tokio` into a destination URL and opens
//! it. Triggers come from an embedded table of built-in bangs and from
//! custom bangs stored in `~/.dryg`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings and data directory discovery
//! - [`dispatcher`] - Navigation after resolution
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Trigger definitions and the built-in table
//! - [`resolver`] - Query tokenizing and URL construction
//! - [`store`] - Custom bangs and preferences
//! - [`ui`] - Terminal output
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
//!     .upsert(TriggerDefinition::new("crate", "https://docs.rs/{{{s}}}"))
//!     .unwrap();
//!
//! let resolution = BangResolver::new(&builtin, &store).resolve("!crate serde");
//! assert_eq!(
//!     resolution.destination_url.as_deref(),
//!     Some("https://docs.rs/serde")
//! );
//! ```

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod store;
pub mod ui;

pub use error::{DrygError, Result};
