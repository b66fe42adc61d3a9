use std::path::PathBuf;

use crate::error::Result;
use tabula_engine::engine::Sheet;

/// Default grid dimensions when none are given on the command line.
pub(crate) const DEFAULT_ROWS: usize = 26;
pub(crate) const DEFAULT_COLS: usize = 26;

/// Output format for the full-table view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderFormat {
    Text,
    Csv,
    Html,
}

impl RenderFormat {
    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Option<RenderFormat> {
        match name.to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(RenderFormat::Text),
            "csv" => Some(RenderFormat::Csv),
            "html" => Some(RenderFormat::Html),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RenderFormat::Text => "txt",
            RenderFormat::Csv => "csv",
            RenderFormat::Html => "html",
        }
    }
}

/// UI-agnostic document state for the spreadsheet.
pub struct Document {
    /// The fixed-size grid of cells.
    pub sheet: Sheet,
    /// Output format used by [`Document::render`].
    pub format: RenderFormat,
    /// Current file path (the `.tbl` save target).
    pub file_path: Option<PathBuf>,
    /// Whether the grid has been modified since the last save.
    pub modified: bool,
}

impl Document {
    /// Create a new document with an empty grid.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new(rows: usize, cols: usize, format: RenderFormat) -> Self {
        Document {
            sheet: Sheet::new(rows, cols),
            format,
            file_path: None,
            modified: false,
        }
    }

    /// Create a new document and load a file if provided.
    pub fn with_file(
        path: Option<PathBuf>,
        rows: usize,
        cols: usize,
        format: RenderFormat,
    ) -> Result<Self> {
        let mut doc = Self::new(rows, cols, format);
        if let Some(ref p) = path {
            if p.exists() {
                doc.load_file(p)?;
            } else {
                doc.file_path = Some(p.clone());
            }
        }
        Ok(doc)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, RenderFormat::Text)
    }
}
