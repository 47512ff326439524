//! Pluggable config validation strategies.

use kumpir::Catalog;

use crate::config::MenuConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &MenuConfig) -> Result<()>;
}

/// Checks the whole config without starting a session.
///
/// Builds the catalog (so every catalog rule applies) and checks the
/// presentation settings against it.
///
/// # Example
///
/// ```
/// use kumpir_config::{ConfigValidator, MenuConfig, SchemaValidator};
///
/// SchemaValidator.validate(&MenuConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validate `config` and hand back the catalog built along the way.
    pub fn validated_catalog(&self, config: &MenuConfig) -> Result<Catalog> {
        if config.pricing.currency.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "pricing.currency cannot be empty".to_string(),
                hint: Some("Use a display symbol such as \"₹\"".to_string()),
            });
        }

        if config.notifications.enabled && config.notifications.duration_ms == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "notifications.duration_ms must be greater than 0".to_string(),
                hint: Some("Set enabled = false to turn notifications off".to_string()),
            });
        }

        let catalog = config.build_catalog()?;

        if let Some(name) = config.default_expanded() {
            if !catalog.has_category(name) {
                let known: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
                return Err(ConfigError::SchemaValidation {
                    message: format!("browse.default_expanded names unknown category '{}'", name),
                    hint: Some(format!("Known categories: {}", known.join(", "))),
                });
            }
        }

        Ok(catalog)
    }
}

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &MenuConfig) -> Result<()> {
        self.validated_catalog(config).map(|_| ())
    }
}

/// Convenience function for schema validation. Returns the built catalog.
pub fn validate_schema(config: &MenuConfig) -> Result<Catalog> {
    SchemaValidator.validated_catalog(config)
}
