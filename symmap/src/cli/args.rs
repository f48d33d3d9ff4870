//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

use crate::export::ListingFormat;

#[derive(Parser, Debug)]
#[command(
    name = "symmap",
    about = "Parse and normalise JIT symbol maps (perf-<pid>.map style)",
    after_help = "\
EXAMPLES:
    symmap /tmp/perf-1234.map                      List symbols sorted by address
    symmap --format json /tmp/perf-1234.map        Emit JSON
    cat /tmp/perf-1234.map | symmap --strict -   Validate a map read from stdin"
)]
pub struct Args {
    /// Symbol map to read ('-' for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ListingFormat::Text)]
    pub format: ListingFormat,

    /// Write the listing to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print line statistics to stderr
    #[arg(long)]
    pub summary: bool,

    /// Fail if any non-blank line had to be skipped
    #[arg(long)]
    pub strict: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
