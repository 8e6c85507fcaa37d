//! ANSI color helper utilities for terminal output.

use crate::models::day_status::DayStatus;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Missing → red, right → green, extra → yellow.
pub fn color_for_status(status: DayStatus) -> &'static str {
    match status {
        DayStatus::MissingHours => RED,
        DayStatus::RightHours => GREEN,
        DayStatus::ExtraHours => YELLOW,
    }
}

/// Color used by `log --print` for each audited operation.
pub fn color_for_operation(op: &str) -> &'static str {
    match op {
        "add" => GREEN,
        "del" => RED,
        "export" => BLUE,
        "init" => CYAN,
        "migration_applied" => MAGENTA,
        _ => RESET,
    }
}

pub fn colorize_status(status: DayStatus) -> String {
    format!("{}{}{}", color_for_status(status), status, RESET)
}
