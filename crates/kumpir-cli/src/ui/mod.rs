//! Terminal output: status messages, menu and summary rendering, toasts.
//!
//! Status messages and toasts go to stderr. Menus and summaries go to stdout.
//!
//! # Examples
//!
//! ```no_run
//! use kumpir_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Configuration is valid!");
//! ui::warning("No kumpir.toml found, using the launch menu");
//! ```

mod format;
mod messages;
mod render;
mod toast;

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::{OwoColorize, Style};

pub use format::{format_calories, format_item_price, format_price, progress_badge};
pub use messages::{error, info, success, warning};
pub use render::{
    print_menu, print_progress, print_summary, render_menu, render_progress, render_summary,
};
pub use toast::ToastPort;

static COLORS: AtomicBool = AtomicBool::new(false);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr() && !is_ci()
}

/// Decide once whether output is colored. `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Apply `style` when colors are on, plain text otherwise.
pub(crate) fn paint(text: impl Display, style: Style) -> String {
    if colors_enabled() {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_color_env() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_is_ci_with_ci_var() {
        unsafe { std::env::set_var("CI", "true") };
        assert!(is_ci());
        unsafe { std::env::remove_var("CI") };
    }

    #[test]
    #[serial]
    fn test_should_use_color_no_color() {
        clear_color_env();
        unsafe { std::env::set_var("NO_COLOR", "1") };
        assert!(!should_use_color());
        clear_color_env();
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        clear_color_env();
        unsafe { std::env::set_var("FORCE_COLOR", "1") };
        assert!(should_use_color());
        clear_color_env();
    }

    #[test]
    #[serial]
    fn test_no_color_flag_wins_over_force_color() {
        clear_color_env();
        unsafe { std::env::set_var("FORCE_COLOR", "1") };
        init_colors(true);
        assert!(!colors_enabled());
        assert_eq!(paint("₹289", Style::new().green()), "₹289");
        clear_color_env();
    }

    #[test]
    #[serial]
    fn test_paint_applies_style_when_enabled() {
        clear_color_env();
        unsafe { std::env::set_var("FORCE_COLOR", "1") };
        init_colors(false);
        let painted = paint("Free", Style::new().green());
        assert!(painted.contains("Free"));
        assert_ne!(painted, "Free");
        init_colors(true);
        clear_color_env();
    }
}
