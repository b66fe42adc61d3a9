//! Error types for the grid engine.

use thiserror::Error;

use super::CellRef;

/// Errors produced while constructing cells or evaluating formulas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("formula parse error: {0}")]
    Parse(String),

    #[error("formula evaluation error: {0}")]
    Eval(String),

    #[error("circular reference involving {0}")]
    CircularReference(CellRef),

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    DateParse(String),

    #[error("invalid number '{0}'")]
    NumberParse(String),
}

impl EngineError {
    /// Display marker shown in place of a formula value that failed to
    /// compute. The numeric rendering of such a cell is always 0.
    pub fn marker(&self) -> &'static str {
        match self {
            EngineError::DivisionByZero => "#DIV/0!",
            EngineError::CircularReference(_) => "#CYCLE!",
            _ => "#ERROR!",
        }
    }
}
