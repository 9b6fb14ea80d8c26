// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure diagnostic.
//!
//! Format:
//! ```text
//! [Bad Commit message] >> <raw message>
//!
//! > <error>
//! > <error>
//!
//! Your commit message does not follow Conventional Commits formatting
//! https://www.conventionalcommits.org/
//! ...accepted types and two examples
//! ```

use std::io::Write;
use termcolor::WriteColor;

use crate::color::scheme;
use crate::validate::ValidationResult;

/// Conventional Commits reference.
pub const CONVENTIONAL_COMMITS_URL: &str = "https://www.conventionalcommits.org/";

const FEATURE_EXAMPLE: &str = "feat: implement new API";
const FIX_EXAMPLE: &str = "fix: remove infinite loop";

/// Write the failure diagnostic for a rejected message.
pub fn write_diagnostic<W, S>(
    out: &mut W,
    raw: &str,
    result: &ValidationResult,
    types: &[S],
) -> std::io::Result<()>
where
    W: WriteColor,
    S: AsRef<str>,
{
    writeln!(out)?;
    out.set_color(&scheme::alert())?;
    write!(out, "[Bad Commit message] >>")?;
    out.reset()?;
    writeln!(out, " {}", raw.trim_end())?;

    if !result.violations.is_empty() {
        writeln!(out)?;
        out.set_color(&scheme::alert())?;
        for error in result.errors() {
            writeln!(out, "> {}", error)?;
        }
        out.reset()?;
    }

    writeln!(out)?;
    out.set_color(&scheme::prose())?;
    writeln!(
        out,
        "Your commit message does not follow Conventional Commits formatting"
    )?;
    out.set_color(&scheme::link())?;
    writeln!(out, "{}", CONVENTIONAL_COMMITS_URL)?;
    writeln!(out)?;
    out.set_color(&scheme::prose())?;
    writeln!(
        out,
        "Conventional Commits start with one of the below types, followed by a colon,"
    )?;
    writeln!(out, "followed by the commit message:")?;
    out.reset()?;

    let types: Vec<&str> = types.iter().map(AsRef::as_ref).collect();
    writeln!(out)?;
    writeln!(out, "    {}", types.join(" "))?;

    write_example(out, "Example commit message adding a feature:", FEATURE_EXAMPLE)?;
    write_example(out, "Example commit message fixing an issue:", FIX_EXAMPLE)?;
    Ok(())
}

fn write_example<W: WriteColor>(out: &mut W, label: &str, example: &str) -> std::io::Result<()> {
    writeln!(out)?;
    out.set_color(&scheme::prose())?;
    writeln!(out, "{}", label)?;
    out.set_color(&scheme::plain())?;
    writeln!(out)?;
    writeln!(out, "    {}", example)?;
    out.reset()
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
