//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// `8` → `"8h"`.
pub fn hours2readable(hours: i64) -> String {
    format!("{}h", hours)
}

/// Horizontal rule built from the configured separator.
pub fn separator_line(sep: &str, width: usize) -> String {
    let sep = if sep.is_empty() { "-" } else { sep };
    sep.repeat(width).chars().take(width).collect()
}
