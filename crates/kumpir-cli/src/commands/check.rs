//! Check command implementation.
//!
//! Validates the menu configuration without starting a session.

use std::path::Path;

use kumpir::SelectionSet;
use kumpir_config::{MenuConfig, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Report which file the config came from
/// 2. Run schema validation, which builds the catalog once
/// 3. Report catalog size, pricing and presentation defaults
///
/// # Errors
///
/// Returns the first validation failure.
pub fn execute(args: CheckArgs, config: &MenuConfig, explicit: Option<&Path>) -> Result<()> {
    ui::info("Checking configuration...");

    match utils::config_source(explicit)? {
        Some(path) => ui::info(&format!("Using {}", path.display())),
        None => ui::warning("No kumpir.toml found, using the launch menu"),
    }

    let catalog = validate_schema(config)?;
    ui::success("Configuration is valid!");

    let currency = config.pricing.currency.as_str();
    ui::info(&format!(
        "{} categories, {} items{}",
        catalog.categories().len(),
        catalog.item_count(),
        if config.catalog.is_builtin() { " (launch menu)" } else { "" }
    ));
    ui::info(&format!(
        "Base potato {} / {}",
        ui::format_price(u64::from(config.pricing.base_price), currency),
        ui::format_calories(u64::from(config.pricing.base_calories)),
    ));
    ui::info(&format!(
        "Opens with {}",
        config.default_expanded().unwrap_or("every category collapsed")
    ));
    if config.notifications.enabled {
        ui::info(&format!(
            "Toasts on ({}ms)",
            config.notifications.duration_ms
        ));
    } else {
        ui::info("Toasts off");
    }

    if args.categories {
        let included: SelectionSet = catalog.included_ids().cloned().collect();
        ui::print_progress(&kumpir::category_progress(&catalog, &included));
    }

    Ok(())
}
