use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Minutes since midnight, local wall-clock.
/// 0 = 00:00, 1439 = 23:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockMinutes(u16);

/// Errors produced while parsing stored time-range strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeRangeError {
    /// The stored range string has no `" - "` between start and end.
    #[error("time range {0:?} is missing the \" - \" separator")]
    MissingSeparator(String),
    /// One side of the range is not a recognizable clock time.
    #[error("unrecognized clock time {0:?}")]
    InvalidClock(String),
}

impl ClockMinutes {
    /// Create a new value from raw minutes since midnight.
    pub const fn new(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Create from an hour/minute pair on the 24-hour clock.
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        Self(hour * 60 + minute)
    }

    /// Raw minutes since midnight.
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Parse a 12-hour clock string such as `"09:30 AM"` or `"12:00 PM"`.
    ///
    /// Hour 12 folds to 0 for AM and stays 12 for PM, so `"12:00 AM"` is
    /// midnight (0 minutes) and `"12:30 PM"` is 750 minutes.
    pub fn parse_12h(s: &str) -> Result<Self, TimeRangeError> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%I:%M %p")
            .map(Self::from_naive)
            .map_err(|_| TimeRangeError::InvalidClock(trimmed.to_string()))
    }

    /// Parse a 24-hour clock string such as `"14:30"` (the form's input format).
    pub fn parse_24h(s: &str) -> Result<Self, TimeRangeError> {
        let trimmed = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .map(Self::from_naive)
            .map_err(|_| TimeRangeError::InvalidClock(trimmed.to_string()))
    }

    /// Convert to a chrono `NaiveTime` (seconds are always zero).
    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.0) / 60 % 24, u32::from(self.0) % 60, 0)
            .unwrap_or(NaiveTime::MIN)
    }

    fn from_naive(t: NaiveTime) -> Self {
        Self((t.hour() * 60 + t.minute()) as u16)
    }
}

impl fmt::Display for ClockMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_naive().format("%I:%M %p"))
    }
}

/// A half-open `[start, end)` window within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: ClockMinutes,
    pub end: ClockMinutes,
}

impl TimeSlot {
    pub const fn new(start: ClockMinutes, end: ClockMinutes) -> Self {
        Self { start, end }
    }

    /// Whether two half-open windows overlap. Touching endpoints
    /// (`self.end == other.start`) do not count.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slot length in minutes. Zero for inverted or empty windows.
    pub fn duration_minutes(&self) -> u16 {
        self.end.value().saturating_sub(self.start.value())
    }

    /// Candidate invariant: start strictly before end.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Parse a stored time-range string of the form `"<start> - <end>"`, each
/// side a 12-hour clock string (`"09:00 AM - 10:30 AM"`).
pub fn parse_time_range(raw: &str) -> Result<TimeSlot, TimeRangeError> {
    let (start_raw, end_raw) = raw
        .split_once(" - ")
        .ok_or_else(|| TimeRangeError::MissingSeparator(raw.to_string()))?;

    let start = ClockMinutes::parse_12h(start_raw)?;
    let end = ClockMinutes::parse_12h(end_raw)?;
    Ok(TimeSlot::new(start, end))
}
