use super::*;

#[test]
fn parses_slice_command_with_defaults() {
    let cli = Cli::try_parse_from(["logoaudit", "slice"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Slice {
            input: None,
            output: None,
            rows: None,
            cols: None
        }
    ));
}

#[test]
fn parses_slice_command_with_grid_override() {
    let cli = Cli::try_parse_from(["logoaudit", "slice", "--rows", "4", "--cols", "5"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Slice {
            rows: Some(4),
            cols: Some(5),
            ..
        }
    ));
}

#[test]
fn audit_defaults_to_product_contract() {
    let cli = Cli::try_parse_from(["logoaudit", "audit"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Audit {
            contract: ContractArg::Product,
            dry_run: false,
            ..
        }
    ));
}

#[test]
fn audit_accepts_bug_hunt_contract() {
    let cli = Cli::try_parse_from(["logoaudit", "audit", "--contract", "bug-hunt"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Audit {
            contract: ContractArg::BugHunt,
            ..
        }
    ));
}

#[test]
fn audit_accepts_limit_and_seed() {
    let cli =
        Cli::try_parse_from(["logoaudit", "audit", "--limit", "5", "--seed", "42", "--dry-run"])
            .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Audit {
            limit: Some(5),
            seed: Some(42),
            dry_run: true,
            ..
        }
    ));
}

#[test]
fn vote_requires_all_participants() {
    let result = Cli::try_parse_from(["logoaudit", "vote", "--user", "alex"]);
    assert!(result.is_err());
}

#[test]
fn parses_full_vote_command() {
    let cli = Cli::try_parse_from([
        "logoaudit",
        "vote",
        "--user",
        "alex",
        "--winner-source",
        "hue",
        "--loser-source",
        "looka",
        "--industry",
        "coffee",
        "--winner-file",
        "hue_coffee_01.png",
        "--loser-file",
        "looka_coffee_02.png",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::Vote { .. }));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["logoaudit"]).is_err());
}

#[test]
fn help_is_resolved_entirely_by_the_parser() {
    // No config or env access involved; help must render even when the
    // environment holds unparseable settings.
    let err = Cli::try_parse_from(["logoaudit", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
