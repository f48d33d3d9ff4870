//! # Symbol Maps for JIT-Generated Code
//!
//! Native code is symbolized from DWARF or ELF symbol tables embedded in the
//! binary. Code produced at runtime by a JIT compiler has neither: it lives
//! in anonymous memory, and its addresses are only known to the runtime that
//! generated it. Runtimes therefore report that code through a side channel,
//! a **symbol map**: a text file that lists each generated region.
//!
//! ## File Format
//!
//! One region per line, three whitespace-separated fields:
//!
//! ```text
//! <address> <length> <name>
//! 0x300019b02e 0x77 Script:~ cli.js:1:1
//! 0x5df00e05a0 0x324 JS:*runRichards (d8):1101:21
//! 0x7a4ddedae0 0x600 JS:wasm-function[74]-74-liftoff
//! ```
//!
//! - **address**: hexadecimal, `0x`/`0X` prefix required
//! - **length**: hexadecimal with `0x`/`0X` prefix, or decimal
//! - **name**: the rest of the line. V8 emits names with spaces, such as
//!   `my_function (./path/to/file.js:42:0)` or `get property_name`, so only
//!   the whitespace around the name is dropped
//!
//! ## Leniency
//!
//! The generators are third-party runtimes, and their output can contain
//! partial writes or comment lines. Any line that does not match the format
//! is skipped; parsing never fails. [`parse_symbol_map_with_summary`] reports
//! how many lines were skipped and why, for callers that want to know.
//!
//! ## Ordering
//!
//! Entries come back sorted by address so that a consumer can binary-search
//! them. Equal addresses keep their file order and are not deduplicated;
//! deciding which one wins is up to the consumer.
//!
//! ## Module Structure
//!
//! - **`symbol_map`**: the parser, a pure function from text to entries
//! - **`source`**: reading a map from a file or standard input
//!
//! ## Example
//!
//! ```rust
//! use symmap::symbolization::parse_symbol_map;
//!
//! let entries = parse_symbol_map("0x2000 0x20 two\n0x1000 16 one one\nnoise\n");
//!
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].addr(), 0x1000);
//! assert_eq!(entries[0].len(), 0x10);
//! assert_eq!(entries[0].name(), "one one");
//! ```

pub mod source;
pub mod symbol_map;

pub use source::{load_symbol_map, STDIN_PATH};
pub use symbol_map::{
    parse_line, parse_symbol_map, parse_symbol_map_with_summary, write_symbol_map, LineOutcome,
    ParsedSymbolMap, SkipCounts, SkipReason, SymbolEntry,
};
