//! Writer for the .tbl file format

use crate::error::Result;
use std::fs;
use std::path::Path;
use tabula_engine::engine::{Cell, Sheet};

/// Write a sheet to a .tbl file
pub fn write_tbl(path: &Path, sheet: &Sheet) -> Result<()> {
    let content = write_tbl_content(sheet);
    fs::write(path, content)?;
    Ok(())
}

/// Write a sheet to a .tbl format string.
///
/// Cells are emitted in row-major order: numbers bare, text quoted with
/// backslash escapes, dates prefixed `@`, formulas prefixed `=`.
pub fn write_tbl_content(sheet: &Sheet) -> String {
    let mut lines = vec![
        "# Tabula Spreadsheet".to_string(),
        format!("size: {}x{}", sheet.rows(), sheet.cols()),
    ];

    for (cell_ref, cell) in sheet.iter() {
        let value_str = match cell {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => format!("\"{}\"", escape_tbl_text(s)),
            Cell::Date(_) => format!("@{}", cell.to_input_string()),
            Cell::Formula(expr) => format!("={}", expr),
        };
        lines.push(format!("{}: {}", cell_ref, value_str));
    }

    lines.join("\n") + "\n"
}

fn escape_tbl_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(ch),
        }
    }
    out
}
