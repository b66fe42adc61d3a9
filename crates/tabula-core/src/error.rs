//! Error types for Tabula core.

use thiserror::Error;

use tabula_engine::engine::EngineError;

/// Errors that can occur in the Tabula application
#[derive(Error, Debug)]
pub enum TabulaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("No file path set")]
    NoFilePath,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, TabulaError>;
