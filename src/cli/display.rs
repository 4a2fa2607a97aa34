// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the docmatch CLI.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `DOCMATCH_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR` and
//! non-TTY stdout turn color off entirely, so piping into `less` or a file gives
//! plain text.
//!
//! # Theme detection order
//!
//! 1. `DOCMATCH_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use serde_json::Value;

use docmatch::{Auxiliary, Scored};

/// Width between the box borders.
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCMATCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
}

/// One Light
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme color plus modifiers, or plain text when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as the terminal shows it (ANSI escapes don't count).
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut to `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Scores: 0 is gray, partial matches yellow/green, boosted (> 1) bright green.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.4}", score);
    if !use_colors() {
        return text;
    }
    let color = if score > 1.0 {
        BRIGHT_GREEN()
    } else if score >= 0.5 {
        GREEN()
    } else if score > 0.0 {
        YELLOW()
    } else {
        GRAY()
    };
    format!("{}{}{}", color, text, RESET)
}

/// A short human label for a document: its title, name or id, or compact JSON.
pub fn document_label(document: &Value) -> String {
    let named = ["title", "name", "id", "key"]
        .iter()
        .find_map(|key| document.get(key))
        .and_then(|value| match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
    named.unwrap_or_else(|| document.to_string())
}

/// Auxiliary data as `key=value` pairs. Distances read better in km.
pub fn auxiliary_summary(auxiliary: &Auxiliary) -> String {
    auxiliary
        .iter()
        .map(|(key, value)| match (key.as_str(), value.as_f64()) {
            ("distance", Some(meters)) if meters >= 1_000.0 => format!("distance={:.1}km", meters / 1_000.0),
            ("distance", Some(meters)) => format!("distance={:.0}m", meters),
            (_, _) => match value {
                Value::String(s) => format!("{}={}", key, s),
                other => format!("{}={}", key, other),
            },
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The results table.
pub fn print_results(title: &str, results: &[Scored<'_>], total: usize) {
    section_top(title);
    row(&format!(
        " {}  {}  {}",
        themed(GRAY, &[BOLD], "   #"),
        themed(GRAY, &[BOLD], &pad_left("score", 8)),
        themed(GRAY, &[BOLD], "document"),
    ));
    for (rank, scored) in results.iter().enumerate() {
        let label = truncate(&document_label(scored.document), 30);
        let extra = truncate(&auxiliary_summary(&scored.result.auxiliary), 32);
        row(&format!(
            " {}  {}  {} {}",
            themed(GRAY, &[DIM], &format!("{:>4}", rank + 1)),
            score_value(scored.score()),
            pad_right(&themed(BLUE, &[], &label), 30),
            themed(GRAY, &[], &extra),
        ));
    }
    if results.is_empty() {
        row(&format!(" {}", themed(RED, &[], "no documents")));
    }
    section_bot();
    println!(
        "{}",
        themed(GRAY, &[DIM], &format!("{} of {} documents shown", results.len(), total))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
