use super::*;

#[test]
fn test_cli_parses_run_command() {
    let cli = Cli::try_parse_from([
        "lollipop-engine",
        "run",
        "--input",
        "mutations.json",
        "--out",
        "out",
    ])
    .unwrap();
    let Command::Run(args) = cli.command;
    assert_eq!(args.input, PathBuf::from("mutations.json"));
    assert_eq!(args.out, PathBuf::from("out"));
    assert!(args.config.is_none());
    assert!(args.sequence_length.is_none());
    assert!(args.filter_gene.is_none());
}

#[test]
fn test_cli_requires_input_and_out() {
    assert!(Cli::try_parse_from(["lollipop-engine", "run", "--out", "out"]).is_err());
    assert!(Cli::try_parse_from(["lollipop-engine", "run", "--input", "m.json"]).is_err());
}

#[test]
fn test_cli_optional_flags() {
    let cli = Cli::try_parse_from([
        "lollipop-engine",
        "run",
        "--input",
        "m.json",
        "--out",
        "out",
        "--sequence-length",
        "766",
        "--filter-gene",
        "BRAF",
    ])
    .unwrap();
    let Command::Run(args) = cli.command;
    assert_eq!(args.sequence_length, Some(766));
    assert_eq!(args.filter_gene.as_deref(), Some("BRAF"));
}

#[test]
fn test_derived_sequence_length() {
    let mutations = vec![
        MutationRecord {
            protein_pos_start: Some(600),
            ..MutationRecord::default()
        },
        MutationRecord {
            protein_pos_start: None,
            protein_change: "K601E".to_string(),
            ..MutationRecord::default()
        },
    ];
    assert_eq!(derived_sequence_length(&mutations), 601.0);
    assert_eq!(derived_sequence_length(&[]), 0.0);
}
