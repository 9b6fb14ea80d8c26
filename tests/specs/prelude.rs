//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the hook against a message file.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the hook binary with color disabled
pub fn hook_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pre-commit-msg"));
    cmd.env_remove("COLOR").env("NO_COLOR", "1");
    cmd.env_remove("PRE_COMMIT_MSG_LOG");
    cmd
}

/// Temporary directory holding a commit message file and optional config.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the workspace and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write `COMMIT_EDITMSG` and return its path.
    pub fn message(&self, content: &str) -> PathBuf {
        self.file("COMMIT_EDITMSG", content)
    }
}

/// Run the hook on `message` with the given leading arguments.
pub fn hook(args: &[&str], message: &str) -> assert_cmd::assert::Assert {
    let ws = Workspace::new();
    let path = ws.message(message);
    hook_cmd().args(args).arg(&path).assert()
}
