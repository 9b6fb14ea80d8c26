// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Commit message line normalization.
//!
//! A raw message is split into lines, each line is trimmed, and a single
//! trailing empty line is dropped so a final newline in the hook file is
//! tolerated.

/// Characters that end a line, besides the `\r\n` pair.
pub const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// A commit message as an ordered list of trimmed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    lines: Vec<String>,
}

impl CommitMessage {
    /// Normalize a raw commit message.
    ///
    /// `\r\n` and every character in [`LINE_BREAKS`] end a line. A
    /// terminator at the very end does not open a new empty line.
    pub fn parse(raw: &str) -> Self {
        let unified = raw.replace("\r\n", "\n");
        let mut lines: Vec<String> = unified
            .split(LINE_BREAKS)
            .map(|l| l.trim().to_string())
            .collect();

        // split yields one piece past a final terminator
        if unified.is_empty() || unified.ends_with(LINE_BREAKS) {
            lines.pop();
        }

        // Only once: "x\n\n\n" keeps one blank line after normalization
        if lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at a 0-based index.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.line(0)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// The line just above the footer.
    ///
    /// For a two-line message this is the header.
    pub fn second_to_last(&self) -> Option<&str> {
        self.len().checked_sub(2).and_then(|i| self.line(i))
    }

    /// Lines strictly between the header separator and the footer separator.
    ///
    /// Returns `None` for messages of three lines or fewer.
    pub fn description(&self) -> Option<String> {
        let n = self.len();
        if n <= 3 {
            return None;
        }
        Some(self.lines[2..n - 2].join("\n"))
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
