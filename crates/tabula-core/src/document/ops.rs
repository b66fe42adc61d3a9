use super::Document;
use crate::error::{Result, TabulaError};
use crate::render;
use tabula_engine::engine::{Cell, CellRef};

/// Variant tag for cell construction. The payload text is validated by the
/// cell constructors; tag selection belongs to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Number,
    Date,
    Formula,
}

impl Document {
    /// Validate a payload for the given kind and store the resulting cell
    /// at an A1-notation address, replacing any prior occupant.
    ///
    /// A malformed address is rejected so the caller can report it; an
    /// in-grammar but out-of-bounds address is a silent no-op, matching the
    /// sheet's write semantics.
    pub fn set_cell(&mut self, addr: &str, kind: CellKind, payload: &str) -> Result<()> {
        let at = CellRef::from_str(addr)
            .ok_or_else(|| TabulaError::InvalidAddress(addr.to_string()))?;

        let cell = match kind {
            CellKind::Text => Cell::text(payload),
            CellKind::Number => Cell::number_from_str(payload)?,
            CellKind::Date => Cell::date_from_str(payload)?,
            CellKind::Formula => Cell::formula(payload),
        };

        if self.sheet.set(at.row, at.col, cell) {
            self.modified = true;
        }
        Ok(())
    }

    /// Render the full table in the document's output format.
    pub fn render(&self) -> String {
        match self.format {
            super::RenderFormat::Text => render::render_text(&self.sheet),
            super::RenderFormat::Csv => render::render_csv(&self.sheet),
            super::RenderFormat::Html => render::render_html(&self.sheet),
        }
    }
}
