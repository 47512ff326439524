//! Miette report conversion for CLI errors.

use crate::error::CliError;
use kumpir_config::ConfigError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a config error, lifting its hint onto its own line
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::SchemaValidation { message, hint: Some(hint) } => {
            miette::miette!("Configuration error: {}\n\nHint: {}", message, hint)
        }
        ConfigError::InvalidValue { field, hint: Some(hint) } => {
            miette::miette!("Invalid value for '{}'\n\n{}", field, hint)
        }
        ConfigError::Catalog(e) => {
            miette::miette!("Invalid catalog: {}\n\nHint: Run 'kumpir check' for details", e)
        }
        ConfigError::NotFound { root } => miette::miette!(
            "No kumpir.toml or kumpir.json in {}\n\nHint: Run 'kumpir init' to create one",
            root.display()
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}
