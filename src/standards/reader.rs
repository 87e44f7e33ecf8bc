use crate::error::ScoringError;
use std::fs;
use std::path::Path;

/// Delimited-text reader for a scoring-standards table.
///
/// No quoting or escaping: the delimiter never appears inside a cell.
#[derive(Debug, Clone)]
pub struct StandardsReader {
    source_name: String,
    rows: Vec<Vec<String>>,
}

impl StandardsReader {
    /// Split `contents` into rows and cells.
    ///
    /// `\r\n` line endings are accepted and trailing blank lines are ignored.
    /// When `header` is set the first row is discarded.
    pub fn parse(source_name: &str, contents: &str, delimiter: char, header: bool) -> Self {
        let mut lines: Vec<&str> = contents
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let skip = if header && !lines.is_empty() { 1 } else { 0 };
        let rows = lines
            .into_iter()
            .skip(skip)
            .map(|line| line.split(delimiter).map(str::to_string).collect())
            .collect();

        Self {
            source_name: source_name.to_string(),
            rows,
        }
    }

    /// Read and split a standards file.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the file cannot be read.
    pub fn from_path(path: &Path, delimiter: char, header: bool) -> Result<Self, ScoringError> {
        let source_name = path.display().to_string();
        let contents =
            fs::read_to_string(path).map_err(|e| ScoringError::SourceUnavailable {
                source_name: source_name.clone(),
                reason: e.to_string(),
            })?;

        log::debug!("read scoring standards from {}", source_name);
        Ok(Self::parse(&source_name, &contents, delimiter, header))
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Data rows (header already removed).
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Collect the cell at `index` from every data row.
    ///
    /// # Errors
    ///
    /// Returns `ColumnIndexOutOfBounds` naming the first row too short to
    /// contain `index` (rows are numbered from 1, after the header).
    pub fn read_column(&self, index: usize) -> Result<Vec<String>, ScoringError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .get(index)
                    .cloned()
                    .ok_or(ScoringError::ColumnIndexOutOfBounds {
                        index,
                        row: row + 1,
                    })
            })
            .collect()
    }
}
