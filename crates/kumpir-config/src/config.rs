//! Top-level menu configuration.
//!
//! For file discovery and layered loading, see the `discovery` module.

use std::sync::Arc;

use kumpir::{Catalog, MenuSession, NotificationPort, Pricing};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::menu::CatalogConfig;
use crate::settings::{BrowseConfig, GlobalSettings, NotificationConfig, PricingConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub browse: BrowseConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub settings: GlobalSettings,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl MenuConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use kumpir_config::MenuConfig;
    /// use serde_json::json;
    ///
    /// let config = MenuConfig::from_value(json!({
    ///     "pricing": { "base_price": 249 }
    /// }))
    /// .unwrap();
    /// assert_eq!(config.pricing.base_price, 249);
    /// assert_eq!(config.pricing.base_calories, 250);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Defaults with the launch menu spelled out, as written by `kumpir init`.
    pub fn with_builtin_catalog() -> Self {
        Self {
            catalog: CatalogConfig::builtin(),
            ..Self::default()
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(format!("TOML serialization failed: {}", e)),
        })
    }

    pub fn build_catalog(&self) -> Result<Catalog> {
        let catalog = self.catalog.build()?;
        tracing::info!(
            categories = catalog.categories().len(),
            items = catalog.item_count(),
            builtin = self.catalog.is_builtin(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn pricing(&self) -> Pricing {
        Pricing::from(&self.pricing)
    }

    pub fn default_expanded(&self) -> Option<&str> {
        self.browse.default_expanded()
    }

    /// Build the catalog and start a session with the configured defaults.
    pub fn start_session<P: NotificationPort>(&self, port: P) -> Result<MenuSession<P>> {
        let catalog = Arc::new(self.build_catalog()?);
        let session = MenuSession::new(catalog, self.pricing(), self.default_expanded(), port)?;
        Ok(session)
    }
}
