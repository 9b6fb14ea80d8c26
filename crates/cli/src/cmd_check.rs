// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validate the commit message file named on the command line.

use anyhow::Result;
use termcolor::StandardStream;

use pre_commit_msg::cli::Cli;
use pre_commit_msg::color::resolve_color;
use pre_commit_msg::config::{self, Config};
use pre_commit_msg::error::{Error, ExitCode};
use pre_commit_msg::report::write_diagnostic;
use pre_commit_msg::validate::validate;

/// Run the hook. Silent on success.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    let types = config.effective_types(&cli.types);
    tracing::debug!("accepted types: {}", types.join(" "));

    let raw = std::fs::read_to_string(&cli.input).map_err(|e| Error::Io {
        path: cli.input.clone(),
        source: e,
    })?;

    let result = validate(&raw, &types);
    if result.is_ok() {
        return Ok(ExitCode::Success);
    }

    let mut stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
    write_diagnostic(&mut stdout, &raw, &result, &types)?;
    Ok(ExitCode::Failed)
}
