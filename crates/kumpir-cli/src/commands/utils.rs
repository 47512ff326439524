//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use kumpir_config::{ConfigDiscovery, MenuConfig};

use crate::error::Result;

/// Load the menu config from `explicit`, or discover it in the current
/// directory, falling back to defaults when there is no file.
pub fn load_config(explicit: Option<&Path>) -> Result<MenuConfig> {
    let config = match explicit {
        Some(path) => kumpir_config::load_file(path)?,
        None => kumpir_config::discover()?,
    };
    Ok(config)
}

/// The file a config would be read from, if any.
pub fn config_source(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => Ok(Some(path.to_path_buf())),
        None => Ok(ConfigDiscovery::new(get_cwd()?).find()),
    }
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}
