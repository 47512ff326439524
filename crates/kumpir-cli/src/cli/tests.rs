#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_category, parse_item_id};
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_item_id_valid() {
        assert_eq!(parse_item_id("cheese"), Ok("cheese".to_string()));
        assert_eq!(parse_item_id(" sour-cream "), Ok("sour-cream".to_string()));
    }

    #[test]
    fn test_parse_item_id_invalid() {
        assert_eq!(parse_item_id(""), Err("Item id cannot be empty".to_string()));
        assert!(parse_item_id("   ").is_err());
        assert!(parse_item_id("sour cream").is_err());
    }

    #[test]
    fn test_parse_category_keeps_inner_spaces() {
        assert_eq!(parse_category(" Fusion Indian "), Ok("Fusion Indian".to_string()));
        assert!(parse_category("").is_err());
    }

    #[test]
    fn test_order_command_parses_items_and_without() {
        let cli = Cli::try_parse_from([
            "kumpir", "order", "cheese", "paneer", "--without", "butter", "--json",
        ])
        .unwrap();

        match cli.command {
            Command::Order(args) => {
                assert_eq!(args.items, ["cheese", "paneer"]);
                assert_eq!(args.without, ["butter"]);
                assert!(args.json);
            }
            _ => panic!("expected order command"),
        }
    }

    #[test]
    fn test_menu_open_conflicts_with_all() {
        assert!(Cli::try_parse_from(["kumpir", "menu", "--all", "--open", "Base"]).is_err());

        let cli = Cli::try_parse_from(["kumpir", "menu", "--open", "Fusion Indian"]).unwrap();
        match cli.command {
            Command::Menu(args) => assert_eq!(args.open.as_deref(), Some("Fusion Indian")),
            _ => panic!("expected menu command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "kumpir",
            "check",
            "--no-color",
            "--config",
            "menus/kumpir.toml",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("menus/kumpir.toml")));
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["kumpir", "-v", "-q", "menu"]).is_err());
    }

    #[test]
    fn test_empty_item_is_rejected() {
        assert!(Cli::try_parse_from(["kumpir", "order", ""]).is_err());
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["kumpir", "init", "--force"]).unwrap();
        match cli.command {
            Command::Init(args) => assert!(args.force),
            _ => panic!("expected init command"),
        }
    }
}
