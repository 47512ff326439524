//! File-based config discovery and layered loading.
//!
//! Sources are merged in this order, later ones winning:
//! built-in defaults, the config file, `KUMPIR_*` environment variables.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};

use crate::config::MenuConfig;
use crate::error::{ConfigError, Result};

/// Prefix of environment overrides, e.g. `KUMPIR_PRICING__BASE_PRICE=249`.
pub const ENV_PREFIX: &str = "KUMPIR_";

/// Config file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &["kumpir.toml", "kumpir.json"];

/// Searches a directory for a menu config file and loads it.
///
/// # Example
///
/// ```no_run
/// use kumpir_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load_or_default().unwrap();
/// println!("base price: {}", config.pricing.base_price);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// First existing file of [`CONFIG_FILES`] in the root.
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load the discovered file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file exists in the root.
    pub fn load(&self) -> Result<MenuConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            root: self.root.clone(),
        })?;
        load_file(&path)
    }

    /// Load the discovered file, or defaults plus environment if there is none.
    pub fn load_or_default(&self) -> Result<MenuConfig> {
        match self.find() {
            Some(path) => load_file(&path),
            None => {
                tracing::debug!(root = %self.root.display(), "no config file, using defaults");
                extract(layered_figment(None)?)
            }
        }
    }
}

/// Load a specific file with defaults underneath and environment on top.
pub fn load_file(path: &Path) -> Result<MenuConfig> {
    if !path.is_file() {
        return Err(ConfigError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), "loading menu config");
    extract(layered_figment(Some(path))?)
}

/// The layered provider stack. Exposed for callers that add their own layers.
pub fn layered_figment(path: Option<&Path>) -> Result<Figment> {
    let mut figment = Figment::from(Serialized::defaults(MenuConfig::default()));

    if let Some(path) = path {
        figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };
    }

    Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
}

fn extract(figment: Figment) -> Result<MenuConfig> {
    figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: e.path.join("."),
        hint: Some(e.to_string()),
    })
}

/// Discover and load config from the current directory, falling back to defaults.
///
/// # Example
///
/// ```no_run
/// use kumpir_config::discover;
///
/// let config = discover().unwrap();
/// ```
pub fn discover() -> Result<MenuConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_or_default()
}
