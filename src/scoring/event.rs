use super::table::Direction;
use super::time::RecordedTime;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Pounds = i64;
pub type Repetitions = i64;
pub type Meters = f64;

/// The seven scored events, without a reading attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Deadlift,
    StandingPowerThrow,
    PushUp,
    SprintDragCarry,
    LegTuck,
    Plank,
    TwoMileRun,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::Deadlift,
        EventKind::StandingPowerThrow,
        EventKind::PushUp,
        EventKind::SprintDragCarry,
        EventKind::LegTuck,
        EventKind::Plank,
        EventKind::TwoMileRun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Deadlift => "deadlift",
            EventKind::StandingPowerThrow => "standing power throw",
            EventKind::PushUp => "hand-release push-up",
            EventKind::SprintDragCarry => "sprint-drag-carry",
            EventKind::LegTuck => "leg tuck",
            EventKind::Plank => "plank",
            EventKind::TwoMileRun => "two-mile run",
        }
    }

    /// Fixed comparison direction for the event's table.
    pub fn direction(&self) -> Direction {
        match self {
            EventKind::SprintDragCarry | EventKind::TwoMileRun => Direction::Ascending,
            _ => Direction::Descending,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A test-taker's raw reading for one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum ScoreEvent {
    Deadlift(Pounds),
    StandingPowerThrow(Meters),
    PushUp(Repetitions),
    SprintDragCarry(RecordedTime),
    LegTuck(Repetitions),
    Plank(RecordedTime),
    TwoMileRun(RecordedTime),
}

impl ScoreEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ScoreEvent::Deadlift(_) => EventKind::Deadlift,
            ScoreEvent::StandingPowerThrow(_) => EventKind::StandingPowerThrow,
            ScoreEvent::PushUp(_) => EventKind::PushUp,
            ScoreEvent::SprintDragCarry(_) => EventKind::SprintDragCarry,
            ScoreEvent::LegTuck(_) => EventKind::LegTuck,
            ScoreEvent::Plank(_) => EventKind::Plank,
            ScoreEvent::TwoMileRun(_) => EventKind::TwoMileRun,
        }
    }

    /// Reading with its unit, e.g. "140 lbs" or "3:00".
    pub fn raw_display(&self) -> String {
        match self {
            ScoreEvent::Deadlift(pounds) => format!("{} lbs", pounds),
            ScoreEvent::StandingPowerThrow(meters) => format!("{:.1} m", meters),
            ScoreEvent::PushUp(reps) | ScoreEvent::LegTuck(reps) => format!("{} reps", reps),
            ScoreEvent::SprintDragCarry(time)
            | ScoreEvent::Plank(time)
            | ScoreEvent::TwoMileRun(time) => time.to_string(),
        }
    }
}
