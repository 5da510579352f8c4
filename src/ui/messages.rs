//! User-facing status lines. Diagnostics go through `tracing` instead.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (BLUE, "ℹ️"),
            Level::Success => (GREEN, "✅"),
            Level::Warning => (YELLOW, "⚠️"),
            Level::Error => (RED, "❌"),
        }
    }
}

fn line<T: fmt::Display>(level: Level, msg: T) -> String {
    let (color, icon) = level.style();
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Level::Warning, msg));
}

/// Printed on stderr so that piped stdout (e.g. `chart --json`) stays clean.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Level::Error, msg));
}

/// Section header underlined to its display width.
pub fn header<T: fmt::Display>(msg: T) {
    let text = msg.to_string();
    let rule = "─".repeat(UnicodeWidthStr::width(text.as_str()));
    println!("{BLUE}{BOLD}{text}\n{rule}{RESET}");
}
