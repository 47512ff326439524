//! Session command implementation.
//!
//! A line-oriented builder: each input line is one command. Rejected ids
//! and categories are reported and the session carries on.

use std::io::{BufRead, Write};

use kumpir::{MenuSession, NotificationPort};
use kumpir_config::MenuConfig;

use crate::cli::SessionArgs;
use crate::error::{Result, ResultExt};
use crate::ui::{self, ToastPort};

const HELP: &str = "\
Commands:
  toggle <id>        add the item if absent, remove it if present
  add <id>           make sure the item is selected
  remove <id>        make sure the item is not selected
  open <category>    expand a category (closes the open one)
  close [category]   collapse the open category
  menu               show the menu
  progress           show selected/total per category
  summary            show the order summary
  reset              go back to the included items
  help               show this help
  quit               print the summary and leave
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Toggle(String),
    Add(String),
    Remove(String),
    Open(String),
    Close(Option<String>),
    Menu,
    Progress,
    Summary,
    Reset,
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a line. Blank lines and `#` comments yield `Ok(None)`.
    ///
    /// Category names are the rest of the line, so they may contain spaces.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let argument = |what: &str| -> std::result::Result<String, String> {
            if rest.is_empty() {
                Err(format!("'{}' needs {}", word, what))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "toggle" | "t" => SessionCommand::Toggle(argument("an item id")?),
            "add" | "a" => SessionCommand::Add(argument("an item id")?),
            "remove" | "rm" => SessionCommand::Remove(argument("an item id")?),
            "open" | "o" => SessionCommand::Open(argument("a category name")?),
            "close" | "c" => SessionCommand::Close((!rest.is_empty()).then(|| rest.to_string())),
            "menu" | "m" => SessionCommand::Menu,
            "progress" | "p" => SessionCommand::Progress,
            "summary" | "s" => SessionCommand::Summary,
            "reset" => SessionCommand::Reset,
            "help" | "h" | "?" => SessionCommand::Help,
            "quit" | "q" | "exit" => SessionCommand::Quit,
            other => return Err(format!("unknown command '{}', type 'help'", other)),
        };
        Ok(Some(command))
    }
}

/// Execute the session command on stdin/stdout.
pub fn execute(args: SessionArgs, config: &MenuConfig) -> Result<()> {
    let port = if args.no_toasts {
        ToastPort::silent()
    } else {
        ToastPort::new(&config.notifications)
    };
    let mut session = config.start_session(port)?;

    ui::info("Type 'help' for commands, 'quit' to finish your order");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(
        &mut session,
        stdin.lock(),
        &mut stdout.lock(),
        &config.pricing.currency,
        console::user_attended(),
    )
}

/// Drive `session` from `input` until `quit` or end of input, then print
/// the final summary.
pub fn run<P, R, W>(
    session: &mut MenuSession<P>,
    input: R,
    out: &mut W,
    currency: &str,
    prompt: bool,
) -> Result<()>
where
    P: NotificationPort,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read session input")?;

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                ui::warning(&message);
                continue;
            }
        };
        tracing::debug!(?command, "session command");

        if command == SessionCommand::Quit {
            break;
        }
        if let Err(err) = apply(session, command, out, currency) {
            match err {
                crate::error::CliError::Menu(e) => ui::error(&e.to_string()),
                other => return Err(other),
            }
        }
    }

    write!(out, "{}", ui::render_summary(&session.summary(), currency))?;
    Ok(())
}

fn apply<P, W>(
    session: &mut MenuSession<P>,
    command: SessionCommand,
    out: &mut W,
    currency: &str,
) -> Result<()>
where
    P: NotificationPort,
    W: Write,
{
    match command {
        SessionCommand::Toggle(id) => {
            session.toggle(&id)?;
            write_total(session, out, currency)?;
        }
        SessionCommand::Add(id) => {
            if session.select(&id)? {
                write_total(session, out, currency)?;
            } else {
                ui::info(&format!("'{}' is already on your kumpir", id));
            }
        }
        SessionCommand::Remove(id) => {
            if session.deselect(&id)? {
                write_total(session, out, currency)?;
            } else {
                ui::info(&format!("'{}' is not on your kumpir", id));
            }
        }
        SessionCommand::Open(name) => {
            session.expand(&name)?;
            write_menu(session, out, currency)?;
        }
        SessionCommand::Close(None) => {
            session.collapse_all();
        }
        SessionCommand::Close(Some(name)) => {
            if !session.catalog().has_category(&name) {
                return Err(kumpir::Error::UnknownCategory { name }.into());
            }
            if session.browse_state().is_expanded(&name) {
                session.collapse_all();
            }
        }
        SessionCommand::Menu => write_menu(session, out, currency)?,
        SessionCommand::Progress => {
            write!(out, "{}", ui::render_progress(&session.category_progress()))?;
        }
        SessionCommand::Summary => {
            write!(out, "{}", ui::render_summary(&session.summary(), currency))?;
        }
        SessionCommand::Reset => {
            let changes = session.reset();
            writeln!(out, "Back to the included items ({} changes)", changes)?;
            write_total(session, out, currency)?;
        }
        SessionCommand::Help => write!(out, "{}", HELP)?,
        SessionCommand::Quit => {}
    }
    Ok(())
}

fn write_menu<P: NotificationPort, W: Write>(
    session: &MenuSession<P>,
    out: &mut W,
    currency: &str,
) -> Result<()> {
    let state = session.browse_state();
    let menu = ui::render_menu(
        session.catalog(),
        &session.current_selection(),
        |name| state.is_expanded(name),
        currency,
    );
    write!(out, "{}", menu)?;
    Ok(())
}

fn write_total<P: NotificationPort, W: Write>(
    session: &MenuSession<P>,
    out: &mut W,
    currency: &str,
) -> Result<()> {
    let summary = session.summary();
    writeln!(
        out,
        "Total {} · {} · {} items",
        ui::format_price(summary.total_price, currency),
        ui::format_calories(summary.total_calories),
        summary.item_count()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kumpir::EventLog;
    use serial_test::serial;

    fn run_script(script: &str) -> (String, MenuSession<EventLog>) {
        crate::ui::init_colors(true);
        let mut session = MenuConfig::default().start_session(EventLog::new()).unwrap();
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out, "₹", false).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            SessionCommand::parse("toggle cheese"),
            Ok(Some(SessionCommand::Toggle("cheese".to_string())))
        );
        assert_eq!(
            SessionCommand::parse("  open Fusion Indian "),
            Ok(Some(SessionCommand::Open("Fusion Indian".to_string())))
        );
        assert_eq!(SessionCommand::parse("close"), Ok(Some(SessionCommand::Close(None))));
        assert_eq!(SessionCommand::parse("Q"), Ok(Some(SessionCommand::Quit)));
        assert_eq!(SessionCommand::parse(""), Ok(None));
        assert_eq!(SessionCommand::parse("# comment"), Ok(None));
    }

    #[test]
    fn test_parse_rejects_missing_argument_and_unknown_words() {
        assert_eq!(
            SessionCommand::parse("add"),
            Err("'add' needs an item id".to_string())
        );
        assert!(SessionCommand::parse("dance").unwrap_err().contains("unknown command"));
    }

    #[test]
    #[serial]
    fn test_script_builds_the_289_order() {
        let (out, session) = run_script("toggle cheese\ntoggle paneer\nquit\ntoggle corn\n");

        assert!(out.contains("Total ₹229"));
        assert!(out.contains("Total ₹289"));
        assert!(!session.is_selected("corn"));
        assert_eq!(session.port().len(), 2);
    }

    #[test]
    #[serial]
    fn test_unknown_item_does_not_end_the_session() {
        let (out, session) = run_script("toggle truffle\nadd cheese\n");

        assert!(session.is_selected("cheese"));
        assert!(out.contains("₹229"));
    }

    #[test]
    #[serial]
    fn test_open_and_close_categories() {
        let (out, session) = run_script("open Crunch\nclose Base\nclose Crunch\n");

        assert!(out.contains("▾ Crunch  0/3"));
        assert!(out.contains("▸ Base  1/3"));
        assert_eq!(session.browse_state().expanded_category, None);
        // open Crunch and close Crunch
        assert_eq!(session.port().len(), 2);
    }

    #[test]
    #[serial]
    fn test_unreadable_input_ends_with_context() {
        crate::ui::init_colors(true);
        let mut session = MenuConfig::default().start_session(EventLog::new()).unwrap();
        let mut out = Vec::new();
        let input: &[u8] = b"toggle cheese\n\xff\xfe\n";

        let err = run(&mut session, input, &mut out, "₹", false).unwrap_err();

        assert!(matches!(err, crate::error::CliError::Custom(_)));
        assert!(err.to_string().starts_with("Failed to read session input: "));
        assert!(session.is_selected("cheese"));
    }

    #[test]
    #[serial]
    fn test_reset_restores_included_items() {
        let (out, session) = run_script("remove butter\nadd cheese\nreset\n");

        assert!(out.contains("Back to the included items (2 changes)"));
        assert!(session.is_selected("butter"));
        assert!(!session.is_selected("cheese"));
    }
}
