//! Plain-text table rendering.

use tabula_engine::engine::{CellRef, Sheet};

/// Render the sheet as an aligned text table: a header row of column
/// letters, a 4-character row-number gutter, and a dash rule above every
/// data row. Column widths track the widest rendered value, with a
/// minimum of 2.
pub fn render_text(sheet: &Sheet) -> String {
    let mut widths = Vec::with_capacity(sheet.cols());
    for col in 0..sheet.cols() {
        let mut width = 2usize.max(CellRef::col_to_letters(col).len());
        for row in 0..sheet.rows() {
            width = width.max(sheet.text_at(row, col).len());
        }
        widths.push(width);
    }

    let mut out = String::new();
    out.push_str("    ");
    let mut total_width = 4;
    for (col, width) in widths.iter().enumerate() {
        let letters = CellRef::col_to_letters(col);
        out.push_str(" | ");
        out.push_str(&letters);
        out.push_str(&" ".repeat(width - letters.len()));
        total_width += width + 3;
    }
    out.push('\n');

    for row in 0..sheet.rows() {
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        let label = (row + 1).to_string();
        out.push_str(&label);
        out.push_str(&" ".repeat(4usize.saturating_sub(label.len())));

        for (col, width) in widths.iter().enumerate() {
            let value = sheet.text_at(row, col);
            out.push_str(" | ");
            out.push_str(&value);
            out.push_str(&" ".repeat(width.saturating_sub(value.len())));
        }
        out.push('\n');
    }

    out
}
