//! Shift model.
//!
//! A shift is a half-open interval `[start, end)` inside one working day,
//! identified by the interval itself and written `HH:MM-HH:MM`.
//!
//! # Time Model
//! Boundaries are minutes since midnight. Every shift lies within
//! opening hours, `[OPENING_MINUTE, CLOSING_MINUTE]`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{format_minute, ConfigError};

/// Earliest shift start (08:00).
pub const OPENING_MINUTE: u32 = 8 * 60;

/// Latest shift end (22:00).
pub const CLOSING_MINUTE: u32 = 22 * 60;

/// Separator used when several shifts of one day are shown together.
pub const SHIFT_SEPARATOR: &str = "/";

/// A shift interval `[start, end)` within a day.
///
/// Ordered by start, then end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShiftKey {
    start_min: u32,
    end_min: u32,
}

/// A catalog entry: a shift and how many people it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// The shift interval.
    pub key: ShiftKey,
    /// Required headcount (at least 1).
    pub required_count: u32,
}

impl ShiftKey {
    /// Creates a shift from minute offsets.
    ///
    /// # Errors
    /// `EmptyShift` if `start_min >= end_min`, `ShiftOutOfBounds` if either
    /// boundary falls outside opening hours.
    pub fn new(start_min: u32, end_min: u32) -> Result<Self, ConfigError> {
        if start_min >= end_min {
            return Err(ConfigError::EmptyShift { start_min, end_min });
        }
        if start_min < OPENING_MINUTE || end_min > CLOSING_MINUTE {
            return Err(ConfigError::ShiftOutOfBounds { start_min, end_min });
        }
        Ok(Self { start_min, end_min })
    }

    /// Creates a shift from bounds fixed at compile time.
    ///
    /// # Panics
    /// If the bounds are empty or outside opening hours; in a `const`
    /// context this is a compile error.
    pub(crate) const fn from_const(start_min: u32, end_min: u32) -> Self {
        assert!(start_min < end_min, "shift must end after it starts");
        assert!(
            start_min >= OPENING_MINUTE && end_min <= CLOSING_MINUTE,
            "shift must lie within opening hours"
        );
        Self { start_min, end_min }
    }

    /// Creates a shift from clock times.
    pub fn from_times(start: NaiveTime, end: NaiveTime) -> Result<Self, ConfigError> {
        Self::new(minute_of_day(start), minute_of_day(end))
    }

    /// Start (minutes since midnight, inclusive).
    #[inline]
    pub fn start_min(&self) -> u32 {
        self.start_min
    }

    /// End (minutes since midnight, exclusive).
    #[inline]
    pub fn end_min(&self) -> u32 {
        self.end_min
    }

    /// Length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_min - self.start_min
    }

    /// Length in hours.
    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / 60.0
    }

    /// Minutes shared with `other` (0 when disjoint or merely touching).
    pub fn overlap_minutes(&self, other: &Self) -> u32 {
        let start = self.start_min.max(other.start_min);
        let end = self.end_min.min(other.end_min);
        end.saturating_sub(start)
    }

    /// Whether the two intervals intersect.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn parse_clock(text: &str, whole: &str) -> Result<u32, ConfigError> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M")
        .map(minute_of_day)
        .map_err(|_| ConfigError::MalformedShift(whole.to_string()))
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minute(self.start_min),
            format_minute(self.end_min)
        )
    }
}

impl FromStr for ShiftKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| ConfigError::MalformedShift(s.to_string()))?;
        Self::new(parse_clock(start, s)?, parse_clock(end, s)?)
    }
}

impl TryFrom<String> for ShiftKey {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShiftKey> for String {
    fn from(key: ShiftKey) -> Self {
        key.to_string()
    }
}

impl ShiftDefinition {
    /// Creates a catalog entry.
    pub fn new(key: ShiftKey, required_count: u32) -> Self {
        Self {
            key,
            required_count,
        }
    }
}

/// Joins a day's shifts into one display value, in the given order.
pub fn join_shifts(shifts: &[ShiftKey]) -> String {
    shifts
        .iter()
        .map(ShiftKey::to_string)
        .collect::<Vec<_>>()
        .join(SHIFT_SEPARATOR)
}

/// Splits a joined display value back into its shifts.
pub fn split_shifts(display: &str) -> Result<Vec<ShiftKey>, ConfigError> {
    display
        .split(SHIFT_SEPARATOR)
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> ShiftKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let k = key("11:00-16:30");
        assert_eq!(k.start_min(), 660);
        assert_eq!(k.end_min(), 990);
        assert_eq!(k.to_string(), "11:00-16:30");
        assert!((k.duration_hours() - 5.5).abs() < 1e-10);
    }

    #[test]
    fn test_parse_tolerates_spaces() {
        assert_eq!(key(" 08:00 - 11:00 "), key("08:00-11:00"));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            "0800".parse::<ShiftKey>(),
            Err(ConfigError::MalformedShift(_))
        ));
        assert!(matches!(
            "08:00-lunch".parse::<ShiftKey>(),
            Err(ConfigError::MalformedShift(_))
        ));
    }

    #[test]
    fn test_bounds() {
        assert!(matches!(
            "07:30-11:00".parse::<ShiftKey>(),
            Err(ConfigError::ShiftOutOfBounds { .. })
        ));
        assert!(matches!(
            "18:00-22:30".parse::<ShiftKey>(),
            Err(ConfigError::ShiftOutOfBounds { .. })
        ));
        assert!(key("08:00-22:00").duration_minutes() == 14 * 60);
    }

    #[test]
    fn test_start_must_precede_end() {
        assert!(matches!(
            ShiftKey::new(600, 600),
            Err(ConfigError::EmptyShift { .. })
        ));
        assert!(matches!(
            "12:00-09:00".parse::<ShiftKey>(),
            Err(ConfigError::EmptyShift { .. })
        ));
    }

    #[test]
    fn test_overlap() {
        let a = key("08:00-11:00");
        let b = key("10:00-12:00");
        let c = key("11:00-16:30"); // touching a

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert_eq!(a.overlap_minutes(&b), 60);
        assert!(!a.overlaps(&c));
        assert_eq!(a.overlap_minutes(&c), 0);
    }

    #[test]
    fn test_from_const() {
        assert_eq!(ShiftKey::from_const(480, 660), key("08:00-11:00"));
    }

    #[test]
    #[should_panic(expected = "opening hours")]
    fn test_from_const_out_of_hours() {
        let _ = ShiftKey::from_const(7 * 60, 11 * 60);
    }

    #[test]
    fn test_from_times() {
        let k = ShiftKey::from_times(
            NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(k, key("16:30-18:30"));
    }

    #[test]
    fn test_join_and_split() {
        let shifts = vec![key("08:00-11:00"), key("16:30-18:30")];
        let joined = join_shifts(&shifts);
        assert_eq!(joined, "08:00-11:00/16:30-18:30");
        assert_eq!(split_shifts(&joined).unwrap(), shifts);
    }

    #[test]
    fn test_serde_as_string() {
        let k = key("18:30-22:00");
        let json = serde_json::to_string(&k).unwrap();
        assert_eq!(json, "\"18:30-22:00\"");
        let back: ShiftKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, k);
        assert!(serde_json::from_str::<ShiftKey>("\"06:00-09:00\"").is_err());
    }
}
