//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{BOLD, RESET};

pub fn bold(s: &str) -> String {
    format!("{BOLD}{s}{RESET}")
}

/// Actual production cell: a gap renders as "--".
pub fn format_actual(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "--".to_string(),
    }
}

pub fn format_percent(value: u32) -> String {
    format!("{}%", value)
}
