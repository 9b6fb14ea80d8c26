// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing.
//!
//! An optional TOML file can replace the built-in type list:
//!
//! ```toml
//! types = ["feat", "fix", "chore"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::validate::DEFAULT_TYPES;

/// Top-level keys this version understands.
const KNOWN_KEYS: &[&str] = &["types"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    types: Option<Vec<String>>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Hook configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Accepted commit types. `None` means use the defaults.
    pub types: Option<Vec<String>>,
}

impl Config {
    /// Types to validate against.
    ///
    /// Explicit command-line types win, then the config list, then
    /// [`DEFAULT_TYPES`].
    pub fn effective_types(&self, cli_types: &[String]) -> Vec<String> {
        if !cli_types.is_empty() {
            return cli_types.to_vec();
        }
        match &self.types {
            Some(types) => types.clone(),
            None => DEFAULT_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Load config, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    tracing::debug!("loaded config from {}", path.display());
    Ok(Config {
        types: flexible.types,
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "pre-commit-msg: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
