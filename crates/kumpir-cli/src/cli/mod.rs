//! Command-line interface definition for the kumpir builder.
//!
//! # Command Structure
//!
//! - `kumpir menu` - Show the menu as an accordion
//! - `kumpir order` - Build an order from item ids and print the summary
//! - `kumpir session` - Interactive builder reading commands from stdin
//! - `kumpir check` - Validate the menu configuration
//! - `kumpir init` - Write a `kumpir.toml` with the launch menu

mod commands;
mod tests;
mod validation;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{CheckArgs, Command, InitArgs, MenuArgs, OrderArgs, SessionArgs};
pub use validation::{parse_category, parse_item_id};

/// Kumpir - build your own baked potato
#[derive(Parser, Debug)]
#[command(
    name = "kumpir",
    version,
    about = "Build your own kumpir from the terminal",
    long_about = "Browse the kumpir menu, pick toppings and see the running total,\n\
                  estimated calories and allergens of your order.\n\
                  The menu, base price and defaults come from kumpir.toml when present."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Menu config file (defaults to kumpir.toml or kumpir.json in the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
