//! Convert raw ACFT event results into points using the published scoring
//! standards table.
//!
//! ```no_run
//! use acft_calc::{RecordedTime, ScoreEvent, ScoringEngine};
//!
//! let engine = ScoringEngine::from_embedded()?;
//! let points = engine.score(&ScoreEvent::TwoMileRun(RecordedTime::new(21, 0)?));
//! assert_eq!(points, 60);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod scoring;
pub mod standards;

pub use error::ScoringError;
pub use scoring::{Direction, EventKind, ParseTimeError, RecordedTime, ScoreEvent, ScoringEngine};
