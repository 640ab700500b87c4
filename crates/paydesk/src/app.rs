use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("paydesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Administer companies and their payment-block status")
        .long_about("paydesk talks to the companies API: it lists companies with their paid status, creates new companies, and blocks or unblocks a company by toggling whether it is marked as paid.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Companies API base URL (overrides config and PAYDESK_BASE_URL)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List all companies with their paid status")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("create")
                .about("Create a new company")
                .arg(
                    Arg::new("name")
                        .help("Name of the company")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("toggle")
                .about("Block or unblock a company by flipping its paid status")
                .arg(
                    Arg::new("id")
                        .help("Company id as shown by 'paydesk list'")
                        .required(true)
                        .index(1)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "paydesk");
    }

    #[test]
    fn test_cli_list_json_flag() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["paydesk", "list", "--json"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let list_matches = matches.subcommand_matches("list").unwrap();
        assert!(list_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_create_command() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["paydesk", "create", "Acme Corp"])
            .unwrap();

        let create_matches = matches.subcommand_matches("create").unwrap();
        assert_eq!(create_matches.get_one::<String>("name").unwrap(), "Acme Corp");
    }

    #[test]
    fn test_cli_create_requires_name() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["paydesk", "create"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_toggle_command() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec!["paydesk", "toggle", "42"])
            .unwrap();

        let toggle_matches = matches.subcommand_matches("toggle").unwrap();
        assert_eq!(toggle_matches.get_one::<String>("id").unwrap(), "42");
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let app = build_cli();
        let matches = app
            .try_get_matches_from(vec![
                "paydesk",
                "list",
                "-v",
                "--base-url",
                "http://localhost:8080",
            ])
            .unwrap();

        assert!(matches.get_flag("verbose"));
        assert_eq!(
            matches.get_one::<String>("base-url").unwrap(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["paydesk"]);
        assert!(matches.is_err());
    }
}
