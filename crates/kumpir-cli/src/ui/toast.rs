//! Terminal toasts for selection changes.

use std::time::Duration;

use kumpir::{BrowseState, EventLog, NotificationPort, SelectionChanged};
use kumpir_config::NotificationConfig;
use owo_colors::Style;

use super::paint;

/// Prints each selection change as a toast on stderr and keeps a log of
/// every event for later inspection.
///
/// A terminal toast stays in the scrollback, so the configured duration is
/// only reported, never waited on.
#[derive(Debug, Clone)]
pub struct ToastPort {
    enabled: bool,
    icon: String,
    duration: Duration,
    log: EventLog,
}

impl ToastPort {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            enabled: config.enabled,
            icon: config.icon.clone(),
            duration: Duration::from_millis(config.duration_ms),
            log: EventLog::new(),
        }
    }

    /// Record events without printing anything.
    pub fn silent() -> Self {
        Self {
            enabled: false,
            icon: String::new(),
            duration: Duration::ZERO,
            log: EventLog::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn into_log(self) -> EventLog {
        self.log
    }

    /// The toast line for `event`, e.g. `🥔 Added Kasar Cheese!`.
    pub fn render(&self, event: &SelectionChanged) -> String {
        let style = if event.added() {
            Style::new().green()
        } else {
            Style::new().blue()
        };
        let message = paint(event.message(), style);
        if self.icon.is_empty() {
            message
        } else {
            format!("{} {}", self.icon, message)
        }
    }
}

impl NotificationPort for ToastPort {
    fn selection_changed(&mut self, event: &SelectionChanged) {
        if self.enabled {
            eprintln!("{}", self.render(event));
        }
        self.log.selection_changed(event);
    }

    fn browse_changed(&mut self, state: &BrowseState) {
        self.log.browse_changed(state);
    }
}
