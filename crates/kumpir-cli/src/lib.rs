//! Kumpir CLI - browse the menu, build an order, see the total.
//!
//! This crate is the terminal front end for the `kumpir` core. It loads the
//! menu through `kumpir-config`, drives a `MenuSession` and renders menus,
//! toasts and summaries.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`error`] - `CliError`, `ResultExt` and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Colors, status messages, menu and summary rendering, toasts
//!
//! # Example
//!
//! ```rust
//! use kumpir_cli::{commands, ui};
//! use kumpir_config::MenuConfig;
//!
//! let config = MenuConfig::default();
//! let mut session = config.start_session(ui::ToastPort::silent()).unwrap();
//! commands::order::apply(&mut session, &["cheese".into(), "paneer".into()], &[]).unwrap();
//! assert_eq!(session.summary().total_price, 289);
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
