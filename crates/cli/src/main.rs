// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! pre-commit-msg CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use pre_commit_msg::cli::Cli;
use pre_commit_msg::error::ExitCode;

mod cmd_check;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PRE_COMMIT_MSG_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pre-commit-msg: {}", e);
            match e.downcast_ref::<pre_commit_msg::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Failed,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            e.print()?;
            return Ok(if e.use_stderr() {
                ExitCode::Failed
            } else {
                ExitCode::Success
            });
        }
    };

    cmd_check::run(&cli)
}
