use std::path::{Path, PathBuf};

use super::Document;
use crate::error::{Result, TabulaError};
use crate::storage::{parse_tbl, write_tbl};

impl Document {
    /// Load a .tbl file, replacing the current sheet and file path.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        self.sheet = parse_tbl(path)?;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save the sheet to the current file path.
    pub fn save_file(&mut self) -> Result<()> {
        let path = self.file_path.clone().ok_or(TabulaError::NoFilePath)?;
        self.save_file_as(&path).map(|_| ())
    }

    /// Save the sheet to a specific path and make it the current file path.
    pub fn save_file_as(&mut self, path: &Path) -> Result<PathBuf> {
        write_tbl(path, &self.sheet)?;
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(path.to_path_buf())
    }

    /// Write the rendered full-table view (in the document's output format)
    /// to a file. Does not affect the file path or modified state.
    pub fn write_rendered(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{CellKind, RenderFormat};
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.tbl");

        let mut doc = Document::new(4, 4, RenderFormat::Text);
        doc.set_cell("A1", CellKind::Number, "3").unwrap();
        doc.set_cell("B2", CellKind::Number, "4").unwrap();
        doc.set_cell("C1", CellKind::Formula, "A1+B2").unwrap();
        doc.save_file_as(&path).unwrap();
        assert!(!doc.modified);

        let mut loaded = Document::default();
        loaded.load_file(&path).unwrap();
        assert_eq!(loaded.sheet.rows(), 4);
        assert_eq!(loaded.sheet.numeric_at_addr("C1"), 7);
        assert!(!loaded.modified);
    }

    #[test]
    fn test_save_file_uses_current_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.tbl");

        let mut doc = Document::new(2, 2, RenderFormat::Text);
        doc.file_path = Some(path.clone());
        doc.set_cell("A1", CellKind::Number, "5").unwrap();
        doc.save_file().unwrap();
        assert!(!doc.modified);

        let mut loaded = Document::default();
        loaded.load_file(&path).unwrap();
        assert_eq!(loaded.sheet.numeric_at_addr("A1"), 5);
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut doc = Document::new(2, 2, RenderFormat::Text);
        assert!(matches!(doc.save_file(), Err(TabulaError::NoFilePath)));
    }

    #[test]
    fn test_write_rendered_uses_selected_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut doc = Document::new(1, 2, RenderFormat::Csv);
        doc.set_cell("A1", CellKind::Number, "1").unwrap();
        doc.set_cell("B1", CellKind::Formula, "A1+1").unwrap();
        doc.write_rendered(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "\"1\",\"2\"\n");
    }
}
