//! `poimatch-io` — enriched match serialization.
//!
//! Writes the scored rows as delimited UTF-8 text under an explicit
//! dialect (no global format registry) and produces the gzip artifact
//! beside it.

pub mod dialect;
pub mod gzip;
pub mod writer;

pub use dialect::Dialect;
pub use gzip::compress_file;
pub use writer::{format_confidence, write_scored};
