// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use blush::cli::{Cli, Commands, OutputFormat, SettingsCommands};
use clap::Parser;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["blush"]).expect("Valid command parsing");
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_browse_with_query() {
    let cli = Cli::try_parse_from(["blush", "browse", "-q", "gloss"]).expect("Valid command parsing");
    if let Some(Commands::Browse(args)) = cli.command {
        assert_eq!(args.query, Some("gloss".to_string()));
    } else {
        panic!("Expected Browse command");
    }
}

#[test]
fn test_parse_list_with_options() {
    let cli = Cli::try_parse_from([
        "blush", "list", "--query", "Red", "--format", "json", "-n", "5",
    ])
    .expect("Valid command parsing");
    if let Some(Commands::List(args)) = cli.command {
        assert_eq!(args.query, "Red");
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.limit, Some(5));
    } else {
        panic!("Expected List command");
    }
}

#[test]
fn test_parse_settings_show_and_alias() {
    let cli = Cli::try_parse_from(["blush", "config", "show"]).expect("Valid command parsing");
    if let Some(Commands::Settings(args)) = cli.command {
        assert_eq!(args.command, SettingsCommands::Show);
    } else {
        panic!("Expected Settings command");
    }
}

#[test]
fn test_parse_settings_requires_subcommand() {
    assert!(Cli::try_parse_from(["blush", "settings"]).is_err());
}

#[test]
fn test_parse_global_config_and_base_url() {
    let cli = Cli::try_parse_from([
        "blush",
        "--config",
        "/tmp/blush.json",
        "--base-url",
        "http://localhost:3000/api",
    ])
    .expect("Valid command parsing");
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/blush.json"))
    );
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000/api"));
}

#[test]
fn test_parse_unknown_command_fails() {
    assert!(Cli::try_parse_from(["blush", "checkout"]).is_err());
}
