//! Command implementations for the kumpir CLI.
//!
//! - [`menu`] - Print the accordion menu
//! - [`order`] - One-shot order from arguments
//! - [`session`] - Interactive builder on stdin
//! - [`check`] - Configuration validation
//! - [`init`] - Write a starter kumpir.toml
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments (and, except for `init`, the loaded config).

pub mod check;
pub mod init;
pub mod menu;
pub mod order;
pub mod session;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use init::execute as init_execute;
pub use menu::execute as menu_execute;
pub use order::execute as order_execute;
pub use session::execute as session_execute;
pub use utils::load_config;
