//! Parser for the .tbl file format

use crate::document::state::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::{Result, TabulaError};
use std::fs;
use std::path::Path;
use tabula_engine::engine::{Cell, CellRef, Sheet};

/// Parse a .tbl file and return a Sheet
pub fn parse_tbl(path: &Path) -> Result<Sheet> {
    let content = fs::read_to_string(path)?;
    parse_tbl_content(&content)
}

/// Parse .tbl content from a string
pub fn parse_tbl_content(content: &str) -> Result<Sheet> {
    let mut sheet: Option<Sheet> = None;
    let mut pending: Vec<(CellRef, Cell)> = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(size) = line.strip_prefix("size:") {
            sheet = Some(parse_size(size, line_num + 1)?);
            continue;
        }

        // Parse "ADDR: value" lines
        let Some((addr, value_str)) = line.split_once(':') else {
            return Err(TabulaError::Parse {
                line: line_num + 1,
                message: "Expected 'ADDR: value' format".to_string(),
            });
        };

        let addr = addr.trim();
        let cell_ref = CellRef::from_str(addr).ok_or_else(|| TabulaError::Parse {
            line: line_num + 1,
            message: format!("Invalid cell reference: {}", addr),
        })?;

        let cell = parse_cell_value(value_str.trim(), line_num + 1)?;
        pending.push((cell_ref, cell));
    }

    let mut sheet = sheet.unwrap_or_else(|| Sheet::new(DEFAULT_ROWS, DEFAULT_COLS));
    for (cell_ref, cell) in pending {
        sheet.set(cell_ref.row, cell_ref.col, cell);
    }
    Ok(sheet)
}

fn parse_size(value: &str, line_num: usize) -> Result<Sheet> {
    let bad_size = || TabulaError::Parse {
        line: line_num,
        message: format!("Invalid size '{}', expected ROWSxCOLS", value.trim()),
    };
    let (rows, cols) = value.trim().split_once('x').ok_or_else(bad_size)?;
    let rows = rows.trim().parse::<usize>().map_err(|_| bad_size())?;
    let cols = cols.trim().parse::<usize>().map_err(|_| bad_size())?;
    if rows == 0 || cols == 0 {
        return Err(bad_size());
    }
    Ok(Sheet::new(rows, cols))
}

/// Parse a cell value string into a Cell
fn parse_cell_value(value: &str, line_num: usize) -> Result<Cell> {
    // Formula: starts with '='
    if let Some(expr) = value.strip_prefix('=') {
        return Ok(Cell::formula(expr));
    }

    // Date: starts with '@'
    if let Some(date) = value.strip_prefix('@') {
        return Cell::date_from_str(date).map_err(|e| TabulaError::Parse {
            line: line_num,
            message: e.to_string(),
        });
    }

    // Quoted text
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        return Ok(Cell::text(&unescape_tbl_text(&value[1..value.len() - 1])));
    }

    // Bare value must be a number
    Cell::number_from_str(value).map_err(|e| TabulaError::Parse {
        line: line_num,
        message: e.to_string(),
    })
}

fn unescape_tbl_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
