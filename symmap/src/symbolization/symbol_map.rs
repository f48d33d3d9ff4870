//! Symbol map parsing for JIT-generated code
//!
//! JIT runtimes such as V8 (`--perf-prof`) describe the code they generate in
//! a line-oriented text file, one region per line:
//!
//! ```text
//! 0x58f00097e0 0x4c8 JS:~initialize ./JetStreamDriver.js:373:21
//! <address>    <len> <name, may contain spaces>
//! ```
//!
//! The files come from third-party generators and routinely contain noise,
//! so parsing is lenient: a line that does not have a `0x` address, a length
//! and a non-empty name is skipped, never reported as an error.

use log::{debug, trace};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// A single address range described by a symbol map line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolEntry {
    addr: u64,
    len: u64,
    name: String,
}

impl SymbolEntry {
    /// Create an entry. `name` is stored as given.
    #[must_use]
    pub fn new(addr: u64, len: u64, name: impl Into<String>) -> Self {
        Self { addr, len, name: name.into() }
    }

    /// Start address of the range
    #[must_use]
    pub fn addr(&self) -> u64 {
        self.addr
    }

    /// Length of the range in bytes (may be zero)
    #[must_use]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the range covers zero bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Symbol name, with surrounding whitespace removed
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Formats the entry back into symbol map syntax: `0x<addr> 0x<len> <name>`
impl fmt::Display for SymbolEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x} 0x{:x} {}", self.addr, self.len, self.name)
    }
}

/// Why a line did not produce an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing but whitespace
    Blank,
    /// First token is not a `0x`-prefixed hex number
    BadAddress,
    /// Second token is missing or is not a hex/decimal number
    BadLength,
    /// Nothing left after the length
    MissingName,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::Blank => "blank line",
            SkipReason::BadAddress => "bad address",
            SkipReason::BadLength => "bad length",
            SkipReason::MissingName => "missing name",
        };
        f.write_str(reason)
    }
}

/// Result of parsing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line described a symbol
    Entry(SymbolEntry),
    /// The line was ignored
    Skipped(SkipReason),
}

/// Per-reason counters of skipped lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub blank: usize,
    pub bad_address: usize,
    pub bad_length: usize,
    pub missing_name: usize,
}

impl SkipCounts {
    fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Blank => self.blank += 1,
            SkipReason::BadAddress => self.bad_address += 1,
            SkipReason::BadLength => self.bad_length += 1,
            SkipReason::MissingName => self.missing_name += 1,
        }
    }

    /// Skipped lines that had content (everything except blank lines)
    #[must_use]
    pub fn malformed(&self) -> usize {
        self.bad_address + self.bad_length + self.missing_name
    }

    /// All skipped lines, blank ones included
    #[must_use]
    pub fn total(&self) -> usize {
        self.blank + self.malformed()
    }
}

impl fmt::Display for SkipCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} blank, {} bad address, {} bad length, {} missing name",
            self.blank, self.bad_address, self.bad_length, self.missing_name
        )
    }
}

/// Entries of a parsed symbol map together with line statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSymbolMap {
    /// Entries sorted by address (stable for equal addresses)
    pub entries: Vec<SymbolEntry>,
    /// Number of lines seen
    pub lines_total: usize,
    pub skipped: SkipCounts,
}

impl ParsedSymbolMap {
    #[must_use]
    pub fn lines_skipped(&self) -> usize {
        self.skipped.total()
    }
}

/// Parse the full text of a symbol map.
///
/// Returns the valid entries sorted ascending by address. The sort is stable:
/// entries sharing an address keep the order in which they appeared, and
/// duplicates are never removed. Malformed lines are skipped silently, so the
/// result may be empty but parsing never fails.
#[must_use]
pub fn parse_symbol_map(content: &str) -> Vec<SymbolEntry> {
    parse_symbol_map_with_summary(content).entries
}

/// Same as [`parse_symbol_map`], additionally counting skipped lines by reason
#[must_use]
pub fn parse_symbol_map_with_summary(content: &str) -> ParsedSymbolMap {
    let mut parsed = ParsedSymbolMap::default();

    for (idx, line) in content.lines().enumerate() {
        parsed.lines_total += 1;
        match parse_line(line) {
            LineOutcome::Entry(entry) => parsed.entries.push(entry),
            LineOutcome::Skipped(reason) => {
                trace!("symbol map line {}: skipped ({reason})", idx + 1);
                parsed.skipped.record(reason);
            }
        }
    }

    parsed.entries.sort_by_key(SymbolEntry::addr);

    debug!(
        "Parsed symbol map: {} entries from {} lines ({} skipped)",
        parsed.entries.len(),
        parsed.lines_total,
        parsed.lines_skipped()
    );

    parsed
}

/// Parse a single line of a symbol map (without its line terminator).
#[must_use]
pub fn parse_line(line: &str) -> LineOutcome {
    let Some((addr_token, rest)) = next_token(line) else {
        return LineOutcome::Skipped(SkipReason::Blank);
    };
    let Some(addr) = parse_hex(addr_token) else {
        return LineOutcome::Skipped(SkipReason::BadAddress);
    };

    let Some((len_token, rest)) = next_token(rest) else {
        return LineOutcome::Skipped(SkipReason::BadLength);
    };
    // A length glued to the name ("0x50five") is one token and fails here
    let Some(len) = parse_length(len_token) else {
        return LineOutcome::Skipped(SkipReason::BadLength);
    };

    let name = rest.trim();
    if name.is_empty() {
        return LineOutcome::Skipped(SkipReason::MissingName);
    }

    LineOutcome::Entry(SymbolEntry::new(addr, len, name))
}

/// Write entries in symbol map syntax, one per line.
///
/// Feeding the output back through [`parse_symbol_map`] yields the same
/// entries, provided they were sorted by address.
///
/// # Errors
/// Returns any error reported by `writer`
pub fn write_symbol_map<W: Write>(writer: &mut W, entries: &[SymbolEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(writer, "{entry}")?;
    }
    Ok(())
}

/// Split off the next whitespace-delimited token, returning it and the text
/// following its terminating whitespace character.
fn next_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(text.split_once(char::is_whitespace).unwrap_or((text, "")))
}

fn parse_hex(token: &str) -> Option<u64> {
    let digits = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X"))?;
    // from_str_radix would accept a leading '+'
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

fn parse_length(token: &str) -> Option<u64> {
    if token.starts_with("0x") || token.starts_with("0X") {
        return parse_hex(token);
    }
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(addr: u64, len: u64, name: &str) -> LineOutcome {
        LineOutcome::Entry(SymbolEntry::new(addr, len, name))
    }

    #[test]
    fn test_parse_line_basic() {
        assert_eq!(parse_line("0x1000 0x10 one"), entry(0x1000, 0x10, "one"));
        assert_eq!(parse_line("0X1000 0X10 one"), entry(0x1000, 0x10, "one"));
    }

    #[test]
    fn test_parse_line_decimal_length() {
        assert_eq!(parse_line("0x3000 48   three   "), entry(0x3000, 0x30, "three"));
        assert_eq!(parse_line("0x3000 0x30 three"), entry(0x3000, 48, "three"));
    }

    #[test]
    fn test_parse_line_keeps_inner_whitespace() {
        assert_eq!(parse_line("0x6000 0x60 six six"), entry(0x6000, 0x60, "six six"));
        assert_eq!(parse_line("0x6000\t0x60\tsix \t six\t"), entry(0x6000, 0x60, "six \t six"));
    }

    #[test]
    fn test_parse_line_strips_carriage_return() {
        assert_eq!(parse_line("   0x2000 0x20 two \r"), entry(0x2000, 0x20, "two"));
    }

    #[test]
    fn test_parse_line_zero_length_is_kept() {
        let outcome = parse_line("0x10 0 empty_range");
        assert_eq!(outcome, entry(0x10, 0, "empty_range"));
        if let LineOutcome::Entry(e) = outcome {
            assert!(e.is_empty());
        }
    }

    #[test]
    fn test_parse_line_skip_reasons() {
        let cases = [
            ("", SkipReason::Blank),
            ("   \t ", SkipReason::Blank),
            (" skip this line", SkipReason::BadAddress),
            ("1000 0x10 decimal_address", SkipReason::BadAddress),
            ("0x 0x10 no_digits", SkipReason::BadAddress),
            ("0x+10 0x10 signed", SkipReason::BadAddress),
            ("0xzz 0x10 not_hex", SkipReason::BadAddress),
            ("0x4000", SkipReason::BadLength),
            ("0x4000   ", SkipReason::BadLength),
            ("       0x40 four", SkipReason::BadLength),
            ("0x5000 0x50five", SkipReason::BadLength),
            ("0x5000 +5 signed", SkipReason::BadLength),
            ("0x5000 -5 negative", SkipReason::BadLength),
            ("0x7000 0x70", SkipReason::MissingName),
            ("0x7000 0x70 \t \r", SkipReason::MissingName),
        ];

        for (line, reason) in cases {
            assert_eq!(parse_line(line), LineOutcome::Skipped(reason), "line {line:?}");
        }
    }

    #[test]
    fn test_parse_line_rejects_overflow() {
        assert_eq!(
            parse_line("0x10000000000000000 0x10 too_big"),
            LineOutcome::Skipped(SkipReason::BadAddress)
        );
        assert_eq!(
            parse_line("0x1000 18446744073709551616 too_long"),
            LineOutcome::Skipped(SkipReason::BadLength)
        );
        assert_eq!(
            parse_line("0xffffffffffffffff 18446744073709551615 max"),
            entry(u64::MAX, u64::MAX, "max")
        );
    }

    #[test]
    fn test_parse_symbol_map_sorts_stably() {
        let content = "0x2000 1 b\n0x1000 1 a\n0x2000 2 b_again\n0x1000 2 a_again\n";
        let entries = parse_symbol_map(content);

        let names: Vec<&str> = entries.iter().map(SymbolEntry::name).collect();
        assert_eq!(names, ["a", "a_again", "b", "b_again"]);
    }

    #[test]
    fn test_parse_symbol_map_empty_input() {
        assert!(parse_symbol_map("").is_empty());
        assert!(parse_symbol_map("\n\n   \n").is_empty());
        assert!(parse_symbol_map("garbage\nmore garbage").is_empty());
    }

    #[test]
    fn test_summary_counts_reasons() {
        let content = "\n0x1000 0x10 one\r\n0x4000\nbogus\n0x7000 0x70 \n";
        let parsed = parse_symbol_map_with_summary(content);

        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.lines_total, 5);
        assert_eq!(
            parsed.skipped,
            SkipCounts { blank: 1, bad_address: 1, bad_length: 1, missing_name: 1 }
        );
        assert_eq!(parsed.skipped.malformed(), 3);
        assert_eq!(parsed.lines_skipped(), 4);
    }

    #[test]
    fn test_display_uses_symbol_map_syntax() {
        let entry = SymbolEntry::new(0x58f0_0097_e0, 0x4c8, "JS:~ (d8):246158:16");
        assert_eq!(entry.to_string(), "0x58f00097e0 0x4c8 JS:~ (d8):246158:16");
    }

    #[test]
    fn test_write_symbol_map() {
        let entries =
            vec![SymbolEntry::new(0x1000, 0x10, "one"), SymbolEntry::new(0x2000, 0, "two two")];
        let mut out = Vec::new();
        write_symbol_map(&mut out, &entries).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0x1000 0x10 one\n0x2000 0x0 two two\n");
    }
}
