//! # symmap - Symbol Maps for JIT Code
//!
//! Profilers resolve sampled instruction pointers to function names. For
//! ahead-of-time compiled code the names come from the binary's symbol table
//! or DWARF data. JIT runtimes (V8, the JVM with perf-map-agent, .NET, LuaJIT)
//! generate code at runtime that has neither, so they publish a **symbol
//! map** instead: a text file such as `/tmp/perf-<pid>.map` with one
//! `<address> <length> <name>` line per generated code region.
//!
//! This crate turns that text into an ordered list of symbol entries.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │  JIT runtime │────▶│   symbol map text │────▶│  symbol_map      │
//! │  (V8, ...)   │     │  perf-<pid>.map   │     │  parser (pure)   │
//! └──────────────┘     └───────────────────┘     └────────┬─────────┘
//!                                                         │ Vec<SymbolEntry>
//!                                                         ▼ sorted by addr
//!                                   ┌──────────────────────────────────┐
//!                                   │ profiler lookup / listing export │
//!                                   └──────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`symbolization`]: the symbol map parser and the loader around it
//!   - `symbol_map`: text in, sorted [`SymbolEntry`](symbolization::SymbolEntry) values out
//!   - `source`: reads a map from a file or stdin
//!
//! - [`export`]: writes entries back out as normalised text or JSON
//!
//! - [`cli`]: command-line argument parsing
//!
//! - [`domain`]: error types
//!
//! ## Typical Usage
//!
//! ```bash
//! # Normalise and sort a V8 map
//! symmap /tmp/perf-1234.map
//!
//! # Check a generator's output, with line statistics
//! RUST_LOG=trace symmap --strict --summary /tmp/perf-1234.map
//! ```

pub mod cli;
pub mod domain;
pub mod export;
pub mod symbolization;
