use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how to read the scoring-standards table.
///
/// Example YAML:
/// ```yaml
/// source: /etc/acft/standards.csv
/// delimiter: ";"
/// header: true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Standards file. When absent the embedded table is used.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Cell delimiter (default: ',')
    #[serde(default)]
    pub delimiter: Option<char>,

    /// Whether the first row is a header to discard (default: true)
    #[serde(default)]
    pub header: Option<bool>,
}

impl LoaderConfig {
    pub fn delimiter(&self) -> char {
        self.delimiter.unwrap_or(',')
    }

    pub fn header(&self) -> bool {
        self.header.unwrap_or(true)
    }
}
