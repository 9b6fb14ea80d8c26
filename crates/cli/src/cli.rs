// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Check a git commit message for Conventional Commits formatting
#[derive(Parser, Debug)]
#[command(name = "pre-commit-msg")]
#[command(version, about, long_about = None)]
#[command(allow_missing_positional = true)]
pub struct Cli {
    /// Accepted commit types (default: build chore ci docs feat fix perf refactor revert style test)
    #[arg(value_name = "TYPE")]
    pub types: Vec<String>,

    /// File containing the commit message (e.g. .git/COMMIT_EDITMSG)
    #[arg(value_name = "INPUT", required = true)]
    pub input: PathBuf,

    /// Read accepted types from a TOML config file
    #[arg(short = 'C', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
