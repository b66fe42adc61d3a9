//! tabula-core - UI-agnostic document model + rendering + storage.

pub mod document;
pub mod error;
pub mod render;
pub mod storage;

pub use document::{CellKind, Document, RenderFormat};
pub use error::{Result, TabulaError};

pub use tabula_engine::engine::{Cell, CellRef, EngineError, Sheet};
