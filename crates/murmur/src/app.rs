use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("murmur")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and inspect murmur agent configuration")
        .long_about("Loads agent configuration from JSON files and directories, merges them in the order given, and prints the effective configuration or the values derived from it. Later sources override earlier ones; list settings accumulate.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            with_config_paths(
                Command::new("resolve")
                    .about("Print the effective configuration as JSON")
            )
        )
        .subcommand(
            with_config_paths(
                Command::new("views")
                    .about("Print the bind address, encryption key and event handlers derived from the configuration")
            )
        )
}

/// Config path flags shared by every subcommand that resolves configuration.
fn with_config_paths(command: Command) -> Command {
    command
        .arg(
            Arg::new("config-file")
                .long("config-file")
                .short('c')
                .help("JSON config file to load, read whatever its extension (repeatable)")
                .action(ArgAction::Append)
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .short('d')
                .help("Directory whose *.json files are loaded in name order (repeatable)")
                .action(ArgAction::Append)
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_cli_resolve_paths() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "murmur",
                "resolve",
                "--config-file",
                "a.json",
                "--config-dir",
                "conf.d",
                "-c",
                "b.json",
            ])
            .unwrap();

        let sub = matches.subcommand_matches("resolve").unwrap();
        let files: Vec<&String> = sub.get_many::<String>("config-file").unwrap().collect();
        assert_eq!(files, vec!["a.json", "b.json"]);
        assert_eq!(sub.get_one::<String>("config-dir").unwrap(), "conf.d");
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["murmur", "views", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(build_cli().try_get_matches_from(vec!["murmur"]).is_err());
    }
}
