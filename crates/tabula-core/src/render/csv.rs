//! CSV table rendering.

use tabula_engine::engine::Sheet;

/// Render the sheet as CSV. Every field is double-quoted with embedded
/// quotes doubled, so values containing commas or quotes survive.
pub fn render_csv(sheet: &Sheet) -> String {
    let mut out = String::new();
    for row in 0..sheet.rows() {
        for col in 0..sheet.cols() {
            if col >= 1 {
                out.push(',');
            }
            out.push('"');
            out.push_str(&sheet.text_at(row, col).replace('"', "\"\""));
            out.push('"');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_engine::engine::Cell;

    #[test]
    fn test_every_field_is_quoted() {
        let mut sheet = Sheet::new(2, 2);
        sheet.set(0, 0, Cell::number(1));
        sheet.set(0, 1, Cell::text("a,b"));
        sheet.set(1, 0, Cell::formula("A1*3"));
        assert_eq!(render_csv(&sheet), "\"1\",\"a,b\"\n\"3\",\"\"\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut sheet = Sheet::new(1, 1);
        sheet.set(0, 0, Cell::text("say \"hi\""));
        assert_eq!(render_csv(&sheet), "\"say \"\"hi\"\"\"\n");
    }
}
