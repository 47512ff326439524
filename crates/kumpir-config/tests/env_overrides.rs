//! Environment variables layer on top of the config file.

use kumpir_config::ConfigDiscovery;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

const VARS: &[&str] = &[
    "KUMPIR_PRICING__BASE_PRICE",
    "KUMPIR_BROWSE__DEFAULT_EXPANDED",
    "KUMPIR_NOTIFICATIONS__ENABLED",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            std::env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn env_overrides_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("kumpir.toml"), "[pricing]\nbase_price = 100\n").unwrap();

    unsafe {
        std::env::set_var("KUMPIR_PRICING__BASE_PRICE", "249");
    }
    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    clear_env();

    assert_eq!(config.pricing.base_price, 249);
}

#[test]
#[serial]
fn env_applies_without_a_file() {
    clear_env();
    let dir = TempDir::new().unwrap();

    unsafe {
        std::env::set_var("KUMPIR_BROWSE__DEFAULT_EXPANDED", "Sauces");
        std::env::set_var("KUMPIR_NOTIFICATIONS__ENABLED", "false");
    }
    let config = ConfigDiscovery::new(dir.path()).load_or_default().unwrap();
    clear_env();

    assert_eq!(config.default_expanded(), Some("Sauces"));
    assert!(!config.notifications.enabled);
    assert_eq!(config.pricing.base_price, 199);
}

#[test]
#[serial]
fn file_values_survive_without_env() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("kumpir.toml"),
        "[notifications]\nduration_ms = 3000\n",
    )
    .unwrap();

    let config = ConfigDiscovery::new(dir.path()).load().unwrap();
    assert_eq!(config.notifications.duration_ms, 3000);
    assert!(config.notifications.enabled);
}
