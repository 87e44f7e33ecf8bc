pub mod column;
pub mod engine;
pub mod event;
pub mod table;
pub mod time;

pub use column::{parse_column, ColumnValue, COLUMN_LEN};
pub use engine::ScoringEngine;
pub use event::{EventKind, Meters, Pounds, Repetitions, ScoreEvent};
pub use table::{Direction, Points, ScoringTable, TableEntry};
pub use time::{ParseTimeError, RecordedTime};
