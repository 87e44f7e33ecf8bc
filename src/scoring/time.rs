use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    #[error("expected M:SS, got '{0}'")]
    Format(String),
    #[error("'{0}' is not a non-negative whole number")]
    Component(String),
    #[error("seconds must be 0-59, got {0}")]
    SecondsOutOfRange(u32),
}

/// A minutes + seconds duration as recorded on a score card.
///
/// Ordered by minutes, then seconds. Seconds never exceed 59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordedTime {
    minutes: u32,
    seconds: u8,
}

impl RecordedTime {
    /// Build from a minutes/seconds pair. Fails when seconds > 59.
    pub fn new(minutes: u32, seconds: u32) -> Result<Self, ParseTimeError> {
        if seconds > 59 {
            return Err(ParseTimeError::SecondsOutOfRange(seconds));
        }
        Ok(Self {
            minutes,
            seconds: seconds as u8,
        })
    }

    /// Normalize a total-seconds count into minutes and seconds.
    pub fn from_total_seconds(total: u32) -> Self {
        Self {
            minutes: total / 60,
            seconds: (total % 60) as u8,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds as u32
    }

    pub fn total_seconds(&self) -> u64 {
        self.minutes as u64 * 60 + self.seconds as u64
    }
}

fn parse_component(s: &str) -> Result<u32, ParseTimeError> {
    // u32::from_str accepts a leading '+', which is not valid here
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseTimeError::Component(s.to_string()));
    }
    s.parse()
        .map_err(|_| ParseTimeError::Component(s.to_string()))
}

impl FromStr for RecordedTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return Err(ParseTimeError::Format(s.to_string()));
        }
        let minutes = parse_component(parts[0])?;
        let seconds = parse_component(parts[1])?;
        Self::new(minutes, seconds)
    }
}

impl fmt::Display for RecordedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

impl TryFrom<String> for RecordedTime {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordedTime> for String {
    fn from(time: RecordedTime) -> Self {
        time.to_string()
    }
}
