// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use termcolor::Color;

// NOTE: NO_COLOR and COLOR are exercised in tests/specs.rs because env var
// manipulation is not safe in parallel unit tests.

#[test]
fn no_color_flag_wins() {
    assert_eq!(resolve_color(true, true), ColorChoice::Never);
}

#[test]
fn color_flag_forces_color() {
    assert_eq!(resolve_color(true, false), ColorChoice::Always);
}

#[test]
fn scheme_alert_is_red_bold() {
    let spec = scheme::alert();
    assert_eq!(spec.fg(), Some(&Color::Red));
    assert!(spec.bold());
}

#[test]
fn scheme_prose_is_yellow() {
    let spec = scheme::prose();
    assert_eq!(spec.fg(), Some(&Color::Yellow));
    assert!(!spec.bold());
}

#[test]
fn scheme_link_is_blue() {
    assert_eq!(scheme::link().fg(), Some(&Color::Blue));
}

#[test]
fn scheme_plain_has_no_color() {
    let spec = scheme::plain();
    assert!(spec.fg().is_none());
    assert!(!spec.bold());
}
