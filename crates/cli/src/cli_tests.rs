// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use clap::CommandFactory;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn input_only() {
    let cli = Cli::try_parse_from(["pre-commit-msg", ".git/COMMIT_EDITMSG"]).unwrap();
    assert!(cli.types.is_empty());
    assert_eq!(cli.input, PathBuf::from(".git/COMMIT_EDITMSG"));
}

#[test]
fn types_precede_input() {
    let cli = Cli::try_parse_from(["pre-commit-msg", "feat", "fix", "msg.txt"]).unwrap();
    assert_eq!(cli.types, vec!["feat".to_string(), "fix".to_string()]);
    assert_eq!(cli.input, PathBuf::from("msg.txt"));
}

#[test]
fn missing_input_is_an_error() {
    assert!(Cli::try_parse_from(["pre-commit-msg"]).is_err());
}

#[test]
fn config_and_color_flags() {
    let cli = Cli::try_parse_from([
        "pre-commit-msg",
        "--config",
        "hook.toml",
        "--no-color",
        "msg.txt",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("hook.toml")));
    assert!(cli.no_color);
    assert!(!cli.color);
}
