//! tabula-engine - grid data model and formula evaluation.

pub mod engine;

pub use engine::{Cell, CellRef, EngineError, Sheet, Stack};
