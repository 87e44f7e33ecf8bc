use super::table::{Direction, Points, ScoringTable, TableEntry};
use super::time::RecordedTime;
use crate::error::ScoringError;

/// Number of cells in every standards column: 100 points down to 0.
pub const COLUMN_LEN: usize = 101;

/// A raw value type that can be read from a standards cell.
pub trait ColumnValue: PartialOrd + Sized {
    /// Human-readable target type, used in conversion errors.
    const TYPE_NAME: &'static str;

    fn parse_cell(cell: &str) -> Option<Self>;
}

impl ColumnValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn parse_cell(cell: &str) -> Option<Self> {
        cell.parse().ok()
    }
}

impl ColumnValue for f64 {
    const TYPE_NAME: &'static str = "decimal";

    fn parse_cell(cell: &str) -> Option<Self> {
        // "inf" and "NaN" parse as f64 but are not distances
        cell.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl ColumnValue for RecordedTime {
    const TYPE_NAME: &'static str = "time (M:SS)";

    fn parse_cell(cell: &str) -> Option<Self> {
        cell.parse().ok()
    }
}

/// Convert one raw column into a typed scoring table.
///
/// Index 0 is worth 100 points and index 100 is worth 0. Blank cells are
/// dropped. Threshold monotonicity is not checked; the source is trusted.
///
/// # Errors
///
/// - `TableSize` if the column is not exactly 101 cells
/// - `ValueConversion` for the first non-blank cell that fails to parse
/// - `EmptyTable` if every cell is blank
pub fn parse_column<T, S>(
    column: &str,
    cells: &[S],
    direction: Direction,
) -> Result<ScoringTable<T>, ScoringError>
where
    T: ColumnValue,
    S: AsRef<str>,
{
    if cells.len() != COLUMN_LEN {
        return Err(ScoringError::TableSize {
            column: column.to_string(),
            expected: COLUMN_LEN,
            actual: cells.len(),
        });
    }

    let mut entries = Vec::with_capacity(COLUMN_LEN);
    for (index, cell) in cells.iter().enumerate() {
        let raw = cell.as_ref().trim();
        if raw.is_empty() {
            continue;
        }

        let points = (100 - index) as Points;
        let threshold = T::parse_cell(raw).ok_or_else(|| ScoringError::ValueConversion {
            column: column.to_string(),
            index,
            points,
            raw: raw.to_string(),
            target: T::TYPE_NAME,
        })?;
        entries.push(TableEntry { points, threshold });
    }

    if entries.is_empty() {
        log::warn!("column '{}' contains only blank cells", column);
        return Err(ScoringError::EmptyTable {
            column: column.to_string(),
        });
    }

    log::debug!(
        "built '{}' table: {} entries, {} (points {}..={})",
        column,
        entries.len(),
        direction,
        entries.last().map(|e| e.points).unwrap_or(0),
        entries.first().map(|e| e.points).unwrap_or(0),
    );

    Ok(ScoringTable::new(entries, direction))
}
