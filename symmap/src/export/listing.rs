use clap::ValueEnum;
use std::io::Write;

use crate::domain::ExportError;
use crate::symbolization::{write_symbol_map, SymbolEntry};

/// Output format for a symbol listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListingFormat {
    /// `0x<addr> 0x<len> <name>` per line, readable by the parser again
    #[default]
    Text,
    /// JSON array of `{ "addr", "len", "name" }` objects
    Json,
}

/// Write `entries` to `writer` in the requested format
///
/// # Errors
/// Returns an error if writing or JSON serialization fails
pub fn write_listing<W: Write>(
    writer: &mut W,
    entries: &[SymbolEntry],
    format: ListingFormat,
) -> Result<(), ExportError> {
    match format {
        ListingFormat::Text => write_symbol_map(writer, entries)?,
        ListingFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, entries)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
