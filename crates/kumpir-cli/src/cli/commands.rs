use clap::{Args, Subcommand};

use crate::cli::validation::{parse_category, parse_item_id};

/// Available kumpir subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the menu
    ///
    /// Every category header shows how many of its items are selected.
    /// The default category (or the one given with --open) lists its items.
    Menu(MenuArgs),

    /// Build an order and print its summary
    ///
    /// Starts from the included items, adds each ITEM and removes each
    /// --without item, printing a toast per change.
    ///
    /// Examples:
    ///   kumpir order cheese paneer
    ///   kumpir order --without butter corn --json
    Order(OrderArgs),

    /// Start an interactive session on stdin
    ///
    /// Type `help` inside the session for the list of commands.
    Session(SessionArgs),

    /// Validate the menu configuration
    Check(CheckArgs),

    /// Write a kumpir.toml with the launch menu
    Init(InitArgs),
}

/// Arguments for the menu command
#[derive(Args, Debug, Default)]
pub struct MenuArgs {
    /// Expand every category
    #[arg(short, long)]
    pub all: bool,

    /// Category to expand instead of the configured default
    #[arg(short, long, value_name = "CATEGORY", value_parser = parse_category, conflicts_with = "all")]
    pub open: Option<String>,
}

/// Arguments for the order command
#[derive(Args, Debug, Default)]
pub struct OrderArgs {
    /// Item ids to add
    #[arg(value_name = "ITEM", value_parser = parse_item_id)]
    pub items: Vec<String>,

    /// Item ids to remove (e.g. an included item)
    #[arg(short = 'w', long = "without", value_name = "ITEM", value_parser = parse_item_id)]
    pub without: Vec<String>,

    /// Print the summary and event log as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the session command
#[derive(Args, Debug, Default)]
pub struct SessionArgs {
    /// Do not print toasts for selection changes
    #[arg(long)]
    pub no_toasts: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Also print the per-category item counts
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the init command
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Overwrite an existing kumpir.toml
    #[arg(short, long)]
    pub force: bool,
}
