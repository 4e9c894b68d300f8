//! Configuration for dryg.
//!
//! - Schema definitions in [`schema`]
//! - Data directory discovery and file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use dryg::config::{load_settings, Settings};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let settings = load_settings(temp.path()).unwrap();
//! assert_eq!(settings, Settings::default());
//! ```
//!
//! # File Locations
//!
//! Everything lives in one data directory, `~/.dryg` by default:
//! - `config.yml`: [`Settings`]
//! - `store.json`: custom bangs and preferences (see [`crate::store`])

pub mod loader;
pub mod schema;

pub use loader::{config_path, data_dir, load_settings, parse_settings, CONFIG_FILE_NAME};
pub use schema::Settings;
