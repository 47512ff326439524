//! Error handling for the kumpir CLI.
//!
//! `CliError` is the single error type returned by commands. Config and menu
//! failures convert into it automatically; `ResultExt` attaches paths and
//! context on the way up. `main` turns the final error into a `miette`
//! report (see [`cli_error_to_miette`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use kumpir_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_menu(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .context("Failed to read menu")
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file loading, extraction and validation failures
    #[error("Configuration error: {0}")]
    Config(#[from] kumpir_config::ConfigError),

    /// Rejected selection or browse operations
    #[error("{0}\n\nHint: Run 'kumpir menu --all' to list item ids and categories")]
    Menu(#[from] kumpir::Error),

    /// Arguments that parse but contradict each other
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Refused to overwrite an existing file
    #[error("{} already exists\n\nHint: Pass --force to overwrite it", .0.display())]
    AlreadyExists(PathBuf),

    /// I/O errors from file system and terminal operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An inner error prefixed with what was being done
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `CliError::FileNotFound` for `path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use kumpir_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("kumpir.toml");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use kumpir_cli::error::{Result, ResultExt, CliError};
    /// # fn run() -> Result<()> {
    /// fn operation() -> Result<()> {
    ///     Err(CliError::Custom("stdin closed".into()))
    /// }
    /// operation().context("Failed to read session command")?;
    /// # Ok(())
    /// # }
    /// ```
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
