use thiserror::Error;

/// Errors raised while building a `ScoringEngine` from raw standards data.
///
/// Every variant is fatal to construction. `score()` itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The standards data could not be located or read.
    #[error("scoring standards unavailable ({source_name}): {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A column did not contain exactly 101 cells (100 points down to 0).
    #[error("column '{column}' has {actual} cells, expected {expected}")]
    TableSize {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A non-blank cell could not be converted into the column's value type.
    #[error(
        "column '{column}' cell {index} ({points} points): cannot convert '{raw}' to {target}"
    )]
    ValueConversion {
        column: String,
        index: usize,
        points: u8,
        raw: String,
        target: &'static str,
    },

    /// A source row had fewer cells than the requested column index.
    #[error("column index {index} out of bounds on data row {row}")]
    ColumnIndexOutOfBounds { index: usize, row: usize },

    /// Every cell in a column was blank, leaving nothing to score against.
    #[error("column '{column}' has no populated cells")]
    EmptyTable { column: String },

    /// Loader configuration rejected before reading any data.
    #[error("invalid loader configuration: {0}")]
    InvalidConfig(String),
}
