use super::column::{parse_column, ColumnValue};
use super::event::{EventKind, Meters, Pounds, Repetitions, ScoreEvent};
use super::table::{Points, ScoringTable};
use super::time::RecordedTime;
use crate::config::{validate_config, LoaderConfig};
use crate::error::ScoringError;
use crate::standards::{embedded_reader, RawColumns, StandardsReader};

/// Scoring tables for all seven events.
///
/// Immutable once built, so a shared reference can score from any thread.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    deadlift: ScoringTable<Pounds>,
    standing_power_throw: ScoringTable<Meters>,
    push_up: ScoringTable<Repetitions>,
    sprint_drag_carry: ScoringTable<RecordedTime>,
    leg_tuck: ScoringTable<Repetitions>,
    plank: ScoringTable<RecordedTime>,
    two_mile_run: ScoringTable<RecordedTime>,
}

fn build<T: ColumnValue>(
    columns: &RawColumns,
    kind: EventKind,
) -> Result<ScoringTable<T>, ScoringError> {
    parse_column(kind.name(), columns.column(kind), kind.direction())
}

impl ScoringEngine {
    /// Build every event table. The first failing column aborts construction.
    pub fn new(columns: &RawColumns) -> Result<Self, ScoringError> {
        Ok(Self {
            deadlift: build(columns, EventKind::Deadlift)?,
            standing_power_throw: build(columns, EventKind::StandingPowerThrow)?,
            push_up: build(columns, EventKind::PushUp)?,
            sprint_drag_carry: build(columns, EventKind::SprintDragCarry)?,
            leg_tuck: build(columns, EventKind::LegTuck)?,
            plank: build(columns, EventKind::Plank)?,
            two_mile_run: build(columns, EventKind::TwoMileRun)?,
        })
    }

    pub fn from_reader(reader: &StandardsReader) -> Result<Self, ScoringError> {
        let columns = RawColumns::read(reader)?;
        let engine = Self::new(&columns)?;
        log::debug!("scoring engine built from {}", reader.source_name());
        Ok(engine)
    }

    /// Engine over the scoring standards bundled with the crate.
    pub fn from_embedded() -> Result<Self, ScoringError> {
        Self::from_reader(&embedded_reader())
    }

    /// Engine over the configured standards source, or the embedded table
    /// when no source is set.
    pub fn from_config(config: &LoaderConfig) -> Result<Self, ScoringError> {
        validate_config(config).map_err(|errors| ScoringError::InvalidConfig(errors.join("; ")))?;

        match config.source {
            Some(ref path) => {
                let reader = StandardsReader::from_path(path, config.delimiter(), config.header())?;
                Self::from_reader(&reader)
            }
            None => Self::from_embedded(),
        }
    }

    /// Points (0-100) earned by a reading. Never fails.
    pub fn score(&self, event: &ScoreEvent) -> Points {
        match event {
            ScoreEvent::Deadlift(pounds) => self.deadlift.lookup(pounds),
            ScoreEvent::StandingPowerThrow(meters) => self.standing_power_throw.lookup(meters),
            ScoreEvent::PushUp(reps) => self.push_up.lookup(reps),
            ScoreEvent::SprintDragCarry(time) => self.sprint_drag_carry.lookup(time),
            ScoreEvent::LegTuck(reps) => self.leg_tuck.lookup(reps),
            ScoreEvent::Plank(time) => self.plank.lookup(time),
            ScoreEvent::TwoMileRun(time) => self.two_mile_run.lookup(time),
        }
    }

    /// Best listed points for an event's table.
    pub fn max_points(&self, kind: EventKind) -> Points {
        self.summary(kind).0
    }

    /// Points of the worst listed threshold for an event's table.
    pub fn min_listed_points(&self, kind: EventKind) -> Points {
        self.summary(kind).1
    }

    /// Number of populated (non-blank) entries in an event's table.
    pub fn entry_count(&self, kind: EventKind) -> usize {
        self.summary(kind).2
    }

    fn summary(&self, kind: EventKind) -> (Points, Points, usize) {
        fn of<T: PartialOrd>(table: &ScoringTable<T>) -> (Points, Points, usize) {
            (table.max_points(), table.min_listed_points(), table.len())
        }
        match kind {
            EventKind::Deadlift => of(&self.deadlift),
            EventKind::StandingPowerThrow => of(&self.standing_power_throw),
            EventKind::PushUp => of(&self.push_up),
            EventKind::SprintDragCarry => of(&self.sprint_drag_carry),
            EventKind::LegTuck => of(&self.leg_tuck),
            EventKind::Plank => of(&self.plank),
            EventKind::TwoMileRun => of(&self.two_mile_run),
        }
    }
}
