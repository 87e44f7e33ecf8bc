pub mod columns;
pub mod reader;

pub use columns::{RawColumns, StandardsColumn};
pub use reader::StandardsReader;

/// Scoring standards bundled with the crate.
pub const EMBEDDED_STANDARDS: &str = include_str!("../../data/acft_scoring_standards.csv");

/// Reader over the bundled standards table (comma-delimited, with header).
pub fn embedded_reader() -> StandardsReader {
    StandardsReader::parse("embedded scoring standards", EMBEDDED_STANDARDS, ',', true)
}
