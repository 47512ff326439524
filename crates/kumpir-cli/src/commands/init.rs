//! Init command implementation.
//!
//! Writes a config file containing the defaults and the launch menu, ready
//! to be edited.

use std::fs;
use std::path::Path;

use kumpir_config::{ConfigError, MenuConfig};

use crate::cli::InitArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Execute the init command.
///
/// Writes to `explicit` if given, otherwise `./kumpir.toml`. A `.json`
/// target gets JSON, anything ending in `.toml` gets TOML.
///
/// # Errors
///
/// Refuses to overwrite an existing file unless `--force` is set.
pub fn execute(args: InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => utils::get_cwd()?.join("kumpir.toml"),
    };

    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    let contents = render(&path)?;
    fs::write(&path, contents).with_path(&path)?;
    tracing::debug!(path = %path.display(), "wrote config");

    ui::success(&format!("Created {}", display_name(&path)));
    ui::info("Edit prices and toppings there, then run 'kumpir check'");
    Ok(())
}

fn render(path: &Path) -> Result<String> {
    let config = MenuConfig::with_builtin_catalog();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(config.to_toml_string()?),
        Some("json") => {
            let mut text = serde_json::to_string_pretty(&config)?;
            text.push('\n');
            Ok(text)
        }
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("<none>").to_string()).into()),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kumpir.toml");

        execute(InitArgs { force: false }, Some(&path)).unwrap();

        let config = kumpir_config::load_file(&path).unwrap();
        assert_eq!(config.build_catalog().unwrap().item_count(), 18);
    }

    #[test]
    fn test_writes_json_for_json_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kumpir.json");

        execute(InitArgs::default(), Some(&path)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["pricing"]["base_price"], 199);
    }

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kumpir.toml");
        fs::write(&path, "# mine").unwrap();

        let err = execute(InitArgs { force: false }, Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine");

        execute(InitArgs { force: true }, Some(&path)).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[pricing]"));
    }

    #[test]
    fn test_display_name_is_the_file_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(display_name(&dir.path().join("kumpir.toml")), "kumpir.toml");
        assert_eq!(display_name(Path::new("/")), "/");
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let err = execute(InitArgs::default(), Some(&dir.path().join("kumpir.yaml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::UnsupportedFormat(_))));
    }
}
