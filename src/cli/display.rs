// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the waymark CLI.
//!
//! Color only when it will be seen: `NO_COLOR` wins, then TTY detection for
//! pipelines. Nothing here buffers - each helper formats one line and the
//! command loop prints it.

use std::sync::OnceLock;

use waymark::{Category, CategoryIcon, Link};

/// Cached color-support decision.
static COLOR: OnceLock<bool> = OnceLock::new();

/// Should output carry ANSI color?
///
/// `NO_COLOR` (any value) disables it; otherwise color is on exactly when
/// stdout is a TTY.
pub fn color_enabled() -> bool {
    *COLOR.get_or_init(|| {
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        atty::is(atty::Stream::Stdout)
    })
}

fn paint(text: &str, code: &str) -> String {
    if color_enabled() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint(text, "1")
}

pub fn dim(text: &str) -> String {
    paint(text, "2")
}

pub fn cyan(text: &str) -> String {
    paint(text, "36")
}

pub fn green(text: &str) -> String {
    paint(text, "32")
}

pub fn yellow(text: &str) -> String {
    paint(text, "33")
}

/// One ranked search result: `1. GitHub  https://github.com  (code hosting)`.
pub fn result_line(rank: usize, link: &Link) -> String {
    let mut line = format!("{:>3}. {}  {}", rank, bold(&link.title), cyan(&link.url));
    if !link.description.is_empty() {
        line.push_str(&format!("  {}", dim(&link.description)));
    }
    if !link.tags.is_empty() {
        line.push_str(&format!("  {}", yellow(&format!("[{}]", link.tags.join(", ")))));
    }
    line
}

/// Category header with its registry glyph.
pub fn category_line(category: &Category) -> String {
    let icon = CategoryIcon::from_name(&category.icon);
    let mut line = format!("{} {}", icon.glyph(), bold(&category.name));
    if let Some(description) = &category.description {
        line.push_str(&format!("  {}", dim(description)));
    }
    line
}

/// Indented link row under a category header.
pub fn link_line(link: &Link) -> String {
    let marker = if link.featured { green("★") } else { " ".to_string() };
    format!("  {} {}  {}", marker, link.title, dim(&link.url))
}

/// A labelled count for `inspect` output.
pub fn stat_line(label: &str, value: usize) -> String {
    format!("{:<22} {}", dim(label), bold(&value.to_string()))
}
