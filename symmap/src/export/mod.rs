//! Listing export
//!
//! Writes parsed symbol maps back out, either normalised into symbol map
//! syntax or as JSON for other tools.

pub mod listing;

pub use listing::{write_listing, ListingFormat};
