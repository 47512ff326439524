//! Pricing, browse, notification and logging sections of the menu config.

use kumpir::{BASE_CALORIES, BASE_PRICE, Pricing, builtin};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price of the plain potato, in minor units
    pub base_price: u32,

    /// Calories of the plain potato
    pub base_calories: u32,

    /// Display symbol, never used in arithmetic
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: BASE_PRICE,
            base_calories: BASE_CALORIES,
            currency: "₹".to_string(),
        }
    }
}

impl From<&PricingConfig> for Pricing {
    fn from(config: &PricingConfig) -> Self {
        Pricing::new(config.base_price, config.base_calories)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Category open on first render. Empty string or absent means all collapsed.
    pub default_expanded: Option<String>,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_expanded: Some(builtin::DEFAULT_EXPANDED.to_string()),
        }
    }
}

impl BrowseConfig {
    pub fn default_expanded(&self) -> Option<&str> {
        self.default_expanded
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enabled: bool,

    /// How long a toast stays on screen
    pub duration_ms: u64,

    pub icon: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: 1500,
            icon: "🥔".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_defaults_match_engine_constants() {
        let pricing: Pricing = (&PricingConfig::default()).into();
        assert_eq!(pricing, Pricing::default());
    }

    #[test]
    fn blank_default_expanded_means_collapsed() {
        let browse = BrowseConfig {
            default_expanded: Some("  ".to_string()),
        };
        assert_eq!(browse.default_expanded(), None);
        assert_eq!(BrowseConfig::default().default_expanded(), Some("Base"));
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let pricing: PricingConfig = toml::from_str("base_price = 249").unwrap();
        assert_eq!(pricing.base_price, 249);
        assert_eq!(pricing.base_calories, 250);
        assert_eq!(pricing.currency, "₹");
    }
}
