use super::reader::StandardsReader;
use crate::error::ScoringError;
use crate::scoring::EventKind;

/// Fixed column layout of the scoring-standards table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardsColumn {
    Points,
    Deadlift,
    StandingPowerThrow,
    PushUp,
    SprintDragCarry,
    LegTuck,
    Plank,
    TwoMileRun,
}

impl StandardsColumn {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn for_event(kind: EventKind) -> Self {
        match kind {
            EventKind::Deadlift => StandardsColumn::Deadlift,
            EventKind::StandingPowerThrow => StandardsColumn::StandingPowerThrow,
            EventKind::PushUp => StandardsColumn::PushUp,
            EventKind::SprintDragCarry => StandardsColumn::SprintDragCarry,
            EventKind::LegTuck => StandardsColumn::LegTuck,
            EventKind::Plank => StandardsColumn::Plank,
            EventKind::TwoMileRun => StandardsColumn::TwoMileRun,
        }
    }
}

/// The seven event columns as raw text, one cell per points level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawColumns {
    pub deadlift: Vec<String>,
    pub standing_power_throw: Vec<String>,
    pub push_up: Vec<String>,
    pub sprint_drag_carry: Vec<String>,
    pub leg_tuck: Vec<String>,
    pub plank: Vec<String>,
    pub two_mile_run: Vec<String>,
}

impl RawColumns {
    /// Pull every event column out of a reader. The points column is ignored;
    /// points come from row position.
    pub fn read(reader: &StandardsReader) -> Result<Self, ScoringError> {
        let read = |kind| reader.read_column(StandardsColumn::for_event(kind).index());
        Ok(Self {
            deadlift: read(EventKind::Deadlift)?,
            standing_power_throw: read(EventKind::StandingPowerThrow)?,
            push_up: read(EventKind::PushUp)?,
            sprint_drag_carry: read(EventKind::SprintDragCarry)?,
            leg_tuck: read(EventKind::LegTuck)?,
            plank: read(EventKind::Plank)?,
            two_mile_run: read(EventKind::TwoMileRun)?,
        })
    }

    pub fn column(&self, kind: EventKind) -> &[String] {
        match kind {
            EventKind::Deadlift => &self.deadlift,
            EventKind::StandingPowerThrow => &self.standing_power_throw,
            EventKind::PushUp => &self.push_up,
            EventKind::SprintDragCarry => &self.sprint_drag_carry,
            EventKind::LegTuck => &self.leg_tuck,
            EventKind::Plank => &self.plank,
            EventKind::TwoMileRun => &self.two_mile_run,
        }
    }

    pub fn column_mut(&mut self, kind: EventKind) -> &mut Vec<String> {
        match kind {
            EventKind::Deadlift => &mut self.deadlift,
            EventKind::StandingPowerThrow => &mut self.standing_power_throw,
            EventKind::PushUp => &mut self.push_up,
            EventKind::SprintDragCarry => &mut self.sprint_drag_carry,
            EventKind::LegTuck => &mut self.leg_tuck,
            EventKind::Plank => &mut self.plank,
            EventKind::TwoMileRun => &mut self.two_mile_run,
        }
    }
}
