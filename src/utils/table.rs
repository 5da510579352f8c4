//! Table rendering utilities for CLI outputs.

use crate::utils::colors::RESET;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right_align: false,
        }
    }

    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            right_align: true,
        }
    }
}

struct Row {
    cells: Vec<String>,
    color: Option<&'static str>,
}

pub struct Table {
    pub columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(Row {
            cells: row,
            color: None,
        });
    }

    /// Add a row printed entirely in one ANSI color.
    pub fn add_colored_row(&mut self, row: Vec<String>, color: &'static str) {
        self.rows.push(Row {
            cells: row,
            color: Some(color),
        });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width, col.right_align));
            out.push(' ');
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = String::new();
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.cells.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&pad(cell, col.width, col.right_align));
                line.push(' ');
            }

            match row.color {
                Some(c) => out.push_str(&format!("{c}{}{RESET}", line.trim_end())),
                None => out.push_str(line.trim_end()),
            }
            out.push('\n');
        }

        out
    }
}

/// Pad using display width so that wide characters keep columns aligned.
fn pad(s: &str, width: usize, right_align: bool) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let fill = " ".repeat(width - w);
    if right_align {
        format!("{fill}{s}")
    } else {
        format!("{s}{fill}")
    }
}
