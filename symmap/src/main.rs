//! # symmap - Main Entry Point
//!
//! Reads one symbol map, parses it and writes the sorted listing.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use symmap::cli::Args;
use symmap::domain::SymbolMapError;
use symmap::export::write_listing;
use symmap::symbolization::load_symbol_map;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_DATAERR: i32 = 65;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SymbolMapError>() {
        Some(SymbolMapError::MalformedLines { .. }) => EXIT_DATAERR,
        _ => EXIT_ERROR,
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let parsed = load_symbol_map(&args.input)?;

    if args.summary {
        eprintln!(
            "{}: {} symbols, {} lines, {} skipped ({})",
            args.input.display(),
            parsed.entries.len(),
            parsed.lines_total,
            parsed.lines_skipped(),
            parsed.skipped
        );
    }

    if args.strict && parsed.skipped.malformed() > 0 {
        return Err(SymbolMapError::MalformedLines {
            path: args.input.clone(),
            count: parsed.skipped.malformed(),
        }
        .into());
    }

    let mut writer: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    write_listing(&mut writer, &parsed.entries, args.format)
        .context("Failed to write symbol listing")?;
    writer.flush().context("Failed to flush symbol listing")?;

    if let Some(path) = args.output.as_ref().filter(|_| !args.quiet) {
        println!("✓ Wrote {} symbols to {}", parsed.entries.len(), path.display());
    }

    Ok(())
}
