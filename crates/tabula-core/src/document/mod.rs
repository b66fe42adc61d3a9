//! Document state and logic (UI-agnostic).

mod io;
mod ops;
pub(crate) mod state;

pub use ops::CellKind;
pub use state::{Document, RenderFormat};
