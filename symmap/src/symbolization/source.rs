//! Loading symbol maps from disk or standard input
//!
//! The parser itself only sees text; this module owns the I/O around it.

use crate::domain::SymbolMapError;
use log::{info, warn};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use super::symbol_map::{parse_symbol_map_with_summary, ParsedSymbolMap};

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Read and parse a symbol map.
///
/// `path` may be [`STDIN_PATH`] to read from standard input. Invalid UTF-8 is
/// replaced rather than rejected; lines it lands in usually still parse
/// because only the name is free-form.
///
/// # Errors
/// Returns [`SymbolMapError::ReadFailed`] if the input cannot be read
pub fn load_symbol_map(path: &Path) -> Result<ParsedSymbolMap, SymbolMapError> {
    let bytes = read_input(path)
        .map_err(|source| SymbolMapError::ReadFailed { path: path.to_path_buf(), source })?;
    let text = String::from_utf8_lossy(&bytes);
    // Editors on Windows may prepend a byte order mark
    let content = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let parsed = parse_symbol_map_with_summary(content);

    if parsed.entries.is_empty() {
        warn!("No symbols found in {} ({} lines)", path.display(), parsed.lines_total);
    } else {
        info!(
            "Loaded {} symbols from {} ({} lines skipped)",
            parsed.entries.len(),
            path.display(),
            parsed.lines_skipped()
        );
    }

    Ok(parsed)
}

fn read_input(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == STDIN_PATH {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        fs::read(path)
    }
}
