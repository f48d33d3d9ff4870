//! Structured error types for symmap
//!
//! Using thiserror for automatic Display implementation and error chaining.
//! Parsing itself never fails; these cover the I/O around it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymbolMapError {
    #[error("Failed to read symbol map {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{count} malformed line(s) in {}", path.display())]
    MalformedLines { path: PathBuf, count: usize },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
