//! Menu command implementation.

use kumpir::NoopPort;
use kumpir_config::MenuConfig;

use crate::cli::MenuArgs;
use crate::error::Result;
use crate::ui;

/// Print the menu with the included items checked.
///
/// # Errors
///
/// Returns an error if the catalog is invalid or `--open` names an unknown
/// category.
pub fn execute(args: MenuArgs, config: &MenuConfig) -> Result<()> {
    let mut session = config.start_session(NoopPort)?;
    if let Some(name) = args.open.as_deref() {
        session.expand(name)?;
    }

    let currency = config.pricing.currency.as_str();
    let selection = session.current_selection();
    if args.all {
        ui::print_menu(session.catalog(), &selection, |_| true, currency);
    } else {
        let state = session.browse_state();
        ui::print_menu(
            session.catalog(),
            &selection,
            |name| state.is_expanded(name),
            currency,
        );
    }

    ui::info(&format!(
        "Base potato {} includes {}",
        ui::format_price(u64::from(config.pricing.base_price), currency),
        included_names(&session),
    ));
    Ok(())
}

fn included_names<P>(session: &kumpir::MenuSession<P>) -> String
where
    P: kumpir::NotificationPort,
{
    let names: Vec<&str> = session
        .catalog()
        .included_ids()
        .filter_map(|id| session.catalog().item(id.as_str()))
        .map(|item| item.name.as_str())
        .collect();
    if names.is_empty() {
        "no toppings".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_open_category_is_an_error() {
        let args = MenuArgs {
            all: false,
            open: Some("Desserts".to_string()),
        };
        let err = execute(args, &MenuConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::CliError::Menu(kumpir::Error::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_included_names_on_launch_menu() {
        let session = MenuConfig::default().start_session(NoopPort).unwrap();
        assert_eq!(included_names(&session), "Whipped Butter");
    }
}
