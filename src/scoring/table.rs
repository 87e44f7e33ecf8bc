use std::fmt;

pub type Points = u8;

/// Which way raw values run for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower raw values score higher (timed runs).
    Ascending,
    /// Higher raw values score higher (weight, reps, distance, hold time).
    Descending,
}

impl Direction {
    /// Whether `value` meets or beats `threshold` for this direction.
    pub fn qualifies<T: PartialOrd>(&self, value: &T, threshold: &T) -> bool {
        match self {
            Direction::Ascending => value <= threshold,
            Direction::Descending => value >= threshold,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry<T> {
    pub points: Points,
    pub threshold: T,
}

/// One event's points mapping, best points first.
///
/// Built once from a parsed column and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTable<T> {
    entries: Vec<TableEntry<T>>,
    direction: Direction,
}

impl<T: PartialOrd> ScoringTable<T> {
    pub(crate) fn new(entries: Vec<TableEntry<T>>, direction: Direction) -> Self {
        Self { entries, direction }
    }

    /// Points for the first entry (highest points down) the value qualifies for,
    /// or 0 when it is worse than every listed threshold.
    pub fn lookup(&self, value: &T) -> Points {
        for entry in &self.entries {
            if self.direction.qualifies(value, &entry.threshold) {
                return entry.points;
            }
        }
        0
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best listed points (not necessarily 100 when the top cells were blank).
    pub fn max_points(&self) -> Points {
        self.entries.first().map(|e| e.points).unwrap_or(0)
    }

    /// Points of the worst listed threshold.
    pub fn min_listed_points(&self) -> Points {
        self.entries.last().map(|e| e.points).unwrap_or(0)
    }

    pub fn entries(&self) -> &[TableEntry<T>] {
        &self.entries
    }
}
