//! Domain model for symmap
//!
//! Structured error types for the layers around the parser. The symbol
//! types themselves live in [`crate::symbolization`].

pub mod errors;

pub use errors::{ExportError, SymbolMapError};
