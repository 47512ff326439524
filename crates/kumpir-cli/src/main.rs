//! Kumpir CLI - build your own baked potato from the terminal.
//!
//! Parses arguments, loads the menu config, sets up logging and colors and
//! dispatches to the command.

use clap::Parser;
use kumpir_cli::logger::{LogFormat, LogOptions};
use kumpir_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // The config may carry log settings, so load it before the subscriber
    // exists. `init` runs even when it fails to load.
    let config = commands::load_config(args.config.as_deref());
    let settings = config
        .as_ref()
        .map(|config| config.settings.clone())
        .unwrap_or_default();

    // Log lines go to stderr, so they follow the same color decision
    ui::init_colors(args.no_color);
    logger::init_logger(&LogOptions {
        verbose: args.verbose,
        quiet: args.quiet,
        no_color: !ui::colors_enabled(),
        format: LogFormat::from_setting(settings.log_format.as_deref()),
        level: settings.log_level,
    });

    let explicit = args.config.as_deref();
    let result = match args.command {
        cli::Command::Init(init_args) => commands::init_execute(init_args, explicit),
        cli::Command::Menu(menu_args) => {
            config.and_then(|config| commands::menu_execute(menu_args, &config))
        }
        cli::Command::Order(order_args) => {
            config.and_then(|config| commands::order_execute(order_args, &config))
        }
        cli::Command::Session(session_args) => {
            config.and_then(|config| commands::session_execute(session_args, &config))
        }
        cli::Command::Check(check_args) => {
            config.and_then(|config| commands::check_execute(check_args, &config, explicit))
        }
    };

    // Convert CLI errors to miette diagnostics
    result.map_err(error::cli_error_to_miette)
}
