//! Grid engine API.
//!
//! This module provides the core computation engine for the spreadsheet:
//!
//! - [`Cell`] - Tagged cell values (text, number, date, formula)
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ row/col indices)
//! - [`Sheet`] - Fixed-size owned grid of cells
//! - [`Stack`] - Generic LIFO used by the expression engine
//! - [`evaluate`] - Formula evaluation with cross-cell reference resolution

mod cell;
mod cell_ref;
mod error;
mod eval;
mod sheet;
mod stack;

pub use cell::Cell;
pub use cell_ref::CellRef;
pub use error::EngineError;
pub use eval::evaluate;
pub use sheet::Sheet;
pub use stack::Stack;
