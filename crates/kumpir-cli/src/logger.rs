//! Logging setup for the kumpir CLI.
//!
//! Logs go to stderr so that `--json` output on stdout stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumpir_cli::logger::{LogOptions, init_logger};
//!
//! init_logger(&LogOptions::default());
//! tracing::info!("menu ready");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events the default filters enable.
const CRATES: &[&str] = &["kumpir", "kumpir_config", "kumpir_cli"];

/// Output layout of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Full,
}

impl LogFormat {
    /// Parse the `settings.log_format` config value. Unknown values fall back to compact.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("full") => LogFormat::Full,
            _ => LogFormat::Compact,
        }
    }
}

/// Flags and config settings that shape the subscriber.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,
    /// `settings.log_level` from the menu config, used when `RUST_LOG` is unset
    pub level: Option<String>,
    pub format: LogFormat,
}

/// Filter directive enabling `level` for every kumpir crate.
///
/// ```
/// use kumpir_cli::logger::crate_directive;
///
/// assert_eq!(crate_directive("debug"), "kumpir=debug,kumpir_config=debug,kumpir_cli=debug");
/// ```
pub fn crate_directive(level: &str) -> String {
    CRATES
        .iter()
        .map(|name| format!("{}={}", name, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Pick the filter. `--verbose` wins, then `--quiet`, then `RUST_LOG`,
/// then the configured level, then info.
pub fn build_filter(options: &LogOptions) -> EnvFilter {
    if options.verbose {
        return EnvFilter::new(crate_directive("debug"));
    }
    if options.quiet {
        return EnvFilter::new(crate_directive("error"));
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = options.level.as_deref().map(str::trim).unwrap_or("info");
        EnvFilter::try_new(crate_directive(level))
            .unwrap_or_else(|_| EnvFilter::new(crate_directive("info")))
    })
}

/// Install the global subscriber. Call once, before any logging.
pub fn init_logger(options: &LogOptions) {
    let filter = build_filter(options);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!options.no_color);

    match options.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
        LogFormat::Full => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The subscriber is global and can only be installed once per process,
    // so these tests only exercise filter and format selection.

    #[test]
    fn test_log_format_from_setting() {
        assert_eq!(LogFormat::from_setting(None), LogFormat::Compact);
        assert_eq!(LogFormat::from_setting(Some("FULL")), LogFormat::Full);
        assert_eq!(LogFormat::from_setting(Some("json")), LogFormat::Compact);
    }

    #[test]
    fn test_verbose_filter_is_debug() {
        let options = LogOptions {
            verbose: true,
            ..LogOptions::default()
        };
        let filter = build_filter(&options).to_string();
        assert!(filter.contains("kumpir=debug"));
        assert!(filter.contains("kumpir_cli=debug"));
    }

    #[test]
    fn test_quiet_filter_is_error() {
        let options = LogOptions {
            quiet: true,
            level: Some("trace".to_string()),
            ..LogOptions::default()
        };
        assert!(build_filter(&options).to_string().contains("kumpir=error"));
    }

    #[test]
    fn test_bad_level_falls_back_to_info() {
        // Only meaningful when RUST_LOG is not set by the test runner
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let options = LogOptions {
            level: Some("loud".to_string()),
            ..LogOptions::default()
        };
        assert!(build_filter(&options).to_string().contains("kumpir=info"));
    }
}
