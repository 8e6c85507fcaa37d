//! Table rendering utilities for CLI outputs.
//!
//! Cells may carry ANSI color codes, so widths are computed on the
//! visible text only.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: visible_len(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Terminal columns taken by `s` once ANSI escapes are stripped.
pub fn visible_len(s: &str) -> usize {
    UnicodeWidthStr::width(ANSI_RE.replace_all(s, "").as_ref())
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            columns: headers.iter().map(|h| Column::new(h)).collect(),
            rows: Vec::new(),
        }
    }

    /// Missing trailing cells render empty; extra cells are ignored.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_len(cell));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let push_cell = |out: &mut String, text: &str, width: usize| {
            out.push_str(text);
            out.push_str(&" ".repeat(width.saturating_sub(visible_len(text)) + 1));
        };

        for col in &self.columns {
            push_cell(&mut out, &col.header, col.width);
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                push_cell(&mut out, cell, col.width);
            }
            out.push('\n');
        }

        out
    }
}
