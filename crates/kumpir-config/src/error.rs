//! Error types for menu configuration loading and validation.

use std::path::PathBuf;

use kumpir::CatalogError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Discovery errors
    #[error("no kumpir.toml or kumpir.json found in {}", .root.display())]
    NotFound { root: PathBuf },

    #[error("config file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    // Parsing and extraction errors
    #[error("invalid config value in '{field}'{}", hint_suffix(.hint))]
    InvalidValue { field: String, hint: Option<String> },

    // Schema validation errors
    #[error("schema validation failed: {message}{}", hint_suffix(.hint))]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Menu(#[from] kumpir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(": {}", hint),
        None => String::new(),
    }
}
