//! HTML table rendering.

use tabula_engine::engine::Sheet;

/// Render the sheet as a bordered HTML table, one `<td>` per slot.
pub fn render_html(sheet: &Sheet) -> String {
    let mut out = String::from("<table border='1' cellpadding='10'>\n");
    for row in 0..sheet.rows() {
        out.push_str("<tr>");
        for col in 0..sheet.cols() {
            out.push_str("<td>");
            out.push_str(&escape_html(&sheet.text_at(row, col)));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
