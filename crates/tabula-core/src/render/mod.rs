//! Full-table rendering formats.
//!
//! Pure formatting over already-computed cell strings: every renderer
//! consumes the sheet only through `text_at`.

mod csv;
mod html;
mod txt;

pub use csv::render_csv;
pub use html::render_html;
pub use txt::render_text;
