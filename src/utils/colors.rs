/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Efficiency color:
/// \>=100 → green
/// \>=80 → yellow
/// else → red
pub fn color_for_efficiency(value: u32) -> &'static str {
    if value >= 100 {
        GREEN
    } else if value >= 80 {
        YELLOW
    } else {
        RED
    }
}

/// Actual vs target color for a single chart row. Gaps are grey.
pub fn color_for_progress(actual: Option<u32>, target: u32) -> &'static str {
    match actual {
        None => GREY,
        Some(a) if a >= target => GREEN,
        Some(_) => RED,
    }
}

