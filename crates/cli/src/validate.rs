// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message validation.
//!
//! Checks a message against the layout:
//!
//! ```text
//! <type>[!]: <title>
//!
//! <description>
//!
//! Refs: <PROJECT>-<NUMBER>
//! ```
//!
//! Every rule runs; violations accumulate so the author sees all of them
//! at once.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::message::CommitMessage;

/// Default accepted commit types, in display order.
pub const DEFAULT_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Pattern for the footer line.
///
/// Captures:
/// - Group 1: ticket, non-digits then `-` then digits (e.g. `ABCD-123`)
#[allow(clippy::expect_used)]
static FOOTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Refs:\s(\D+-\d+)$").expect("valid regex"));

/// A single rule violation, rendered as the hook's error line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Nothing left after normalization.
    EmptyMessage,
    /// Line 1 is not `<type>[!]: <title>` with an accepted type.
    Header,
    /// Line 2 must separate the header from the rest.
    SeparatorAfterHeader,
    /// The line above the footer must be blank. `line` is 1-based.
    SeparatorBeforeFooter { line: usize },
    /// The last line is not a `Refs: <ticket>` footer. `line` is 1-based.
    Footer { line: usize },
}

impl Violation {
    /// 1-based line the violation points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Violation::EmptyMessage => None,
            Violation::Header => Some(1),
            Violation::SeparatorAfterHeader => Some(2),
            Violation::SeparatorBeforeFooter { line } | Violation::Footer { line } => Some(*line),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyMessage => write!(f, "Commit message is empty"),
            Violation::Header => write!(f, "Error on line 1 of commit message"),
            Violation::SeparatorAfterHeader => {
                write!(f, "Error on line 2 of commit message: should be empty")
            }
            Violation::SeparatorBeforeFooter { line } => {
                write!(f, "Error on line {line} of commit message: should be empty")
            }
            Violation::Footer { line } => write!(
                f,
                "Error on line {line} of commit message: footer should include references \
                 like other commits or jira tickets. For example: 'Refs: #ABCD-123'"
            ),
        }
    }
}

/// Outcome of validating one message.
///
/// Extracted fields are empty when their rule did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Matched type tag (e.g. "feat").
    pub commit_type: String,
    /// Header text after `: `.
    pub title: String,
    /// Whether the header carried the `!` marker.
    pub breaking: bool,
    /// Lines between the two separators; `None` for messages of three
    /// lines or fewer.
    pub description: Option<String>,
    /// Ticket from the footer (e.g. "JIRA-42").
    pub ticket: String,
    /// Violations in rule order.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// True when no rule fired and every extracted field is non-empty.
    ///
    /// A well-formed header and footer with no description still fails,
    /// without any violation to point at.
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty() && self.fields_complete()
    }

    fn fields_complete(&self) -> bool {
        !self.commit_type.is_empty()
            && !self.title.is_empty()
            && !self.ticket.is_empty()
            && self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Rendered error lines, in rule order.
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Build the header pattern for a set of accepted types.
///
/// Captures:
/// - Group 1: type
/// - Group 2: `!` marker (optional)
/// - Group 3: title
///
/// Returns `None` when no type is accepted.
fn header_pattern<S: AsRef<str>>(types: &[S]) -> Option<Regex> {
    if types.is_empty() {
        return None;
    }
    let alternation = types
        .iter()
        .map(|t| regex::escape(t.as_ref()))
        .collect::<Vec<_>>()
        .join("|");

    match Regex::new(&format!(r"^({alternation})(!)?:\s(.*)")) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("cannot build header pattern: {}", e);
            None
        }
    }
}

/// Validate a raw commit message against the accepted types.
///
/// # Examples
///
/// ```
/// use pre_commit_msg::validate::{validate, DEFAULT_TYPES};
///
/// let result = validate("feat: add x\n\nWhy.\n\nRefs: ABC-1\n", DEFAULT_TYPES);
/// assert!(result.is_ok());
///
/// let result = validate("add x", DEFAULT_TYPES);
/// assert!(!result.is_ok());
/// ```
pub fn validate<S: AsRef<str>>(raw: &str, types: &[S]) -> ValidationResult {
    let message = CommitMessage::parse(raw);
    let mut result = ValidationResult::default();

    let (Some(first), Some(last)) = (message.first(), message.last()) else {
        result.violations.push(Violation::EmptyMessage);
        return result;
    };
    let n = message.len();
    tracing::debug!("validating commit message with {} lines", n);

    let header = header_pattern(types).and_then(|re| {
        re.captures(first).map(|caps| {
            (
                caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
                caps.get(2).is_some(),
                caps.get(3).map_or("", |m| m.as_str()).trim().to_string(),
            )
        })
    });
    match header {
        Some((commit_type, breaking, title)) => {
            result.commit_type = commit_type;
            result.breaking = breaking;
            result.title = title;
        }
        None => result.violations.push(Violation::Header),
    }

    if n > 1 && message.line(1).is_some_and(|l| !l.is_empty()) {
        result.violations.push(Violation::SeparatorAfterHeader);
    }

    if n > 1 && message.second_to_last().is_some_and(|l| !l.is_empty()) {
        result
            .violations
            .push(Violation::SeparatorBeforeFooter { line: n - 1 });
    }

    match FOOTER.captures(last).and_then(|caps| caps.get(1)) {
        Some(ticket) => result.ticket = ticket.as_str().trim().to_string(),
        None => result.violations.push(Violation::Footer { line: n }),
    }

    result.description = message.description();

    for violation in &result.violations {
        tracing::debug!(line = ?violation.line(), "violation: {}", violation);
    }
    result
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
