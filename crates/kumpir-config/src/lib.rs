//! Menu configuration for the kumpir builder.
//!
//! A `kumpir.toml` (or `kumpir.json`) can override the base price and
//! calories, the category opened on first render, toast settings and the
//! catalog itself. Without a file the launch menu and its defaults apply.

pub mod config;
pub mod discovery;
pub mod error;
pub mod menu;
pub mod settings;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use menu::*;
pub use settings::*;

pub use discovery::{CONFIG_FILES, ConfigDiscovery, ENV_PREFIX, discover, layered_figment, load_file};
pub use validation::{ConfigValidator, SchemaValidator, validate_schema};
