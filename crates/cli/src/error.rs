// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// pre-commit-msg error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type using pre-commit-msg Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Hooks only distinguish pass from fail, so every error is a failure.
/// Argument errors never reach [`Error`]; clap reports them and `main`
/// maps them to [`ExitCode::Failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Commit message accepted
    Success = 0,
    /// Commit message rejected, or the hook could not run
    Failed = 1,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Io { .. } => ExitCode::Failed,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
