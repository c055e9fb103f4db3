//! Timecode intervals: rate-less durations in timecode fields.

use crate::error::{Result, TimeCodeError};
use crate::timecode::parse_fields;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A duration expressed in timecode fields.
///
/// An interval carries no frame rate and no drop-frame flag: its
/// meaning comes from the timecode it is added to. See
/// [`TimeCode::add_interval`].
///
/// [`TimeCode::add_interval`]: crate::TimeCode::add_interval
///
/// # Example
///
/// ```rust
/// use video_timecode::TimeCodeInterval;
///
/// let interval = TimeCodeInterval::new(0, 1, 30, 12);
/// assert_eq!(interval.to_string(), "00:01:30:12");
///
/// let parsed: TimeCodeInterval = "00:01:30:12".parse().unwrap();
/// assert_eq!(parsed, interval);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCodeInterval {
    /// Hours.
    pub hours: u32,
    /// Minutes.
    pub minutes: u32,
    /// Seconds.
    pub seconds: u32,
    /// Frames.
    pub frames: u32,
}

impl TimeCodeInterval {
    /// Create a new interval.
    ///
    /// Intervals are pure durations; no range validation applies.
    /// 90 seconds is as good as 1 minute 30; both normalize the same
    /// way on addition.
    #[must_use]
    pub fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Whether all fields are zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.frames == 0
    }
}

impl fmt::Display for TimeCodeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds, self.frames
        )
    }
}

impl FromStr for TimeCodeInterval {
    type Err = TimeCodeError;

    /// Strict parse of `HH:MM:SS:FF`.
    ///
    /// A `;` before the frame field is accepted (intervals have no
    /// drop-frame flag, so both separators parse identically).
    fn from_str(s: &str) -> Result<Self> {
        let (hours, minutes, seconds, frames, _drop) = parse_fields(s)?;
        Ok(Self {
            hours,
            minutes,
            seconds,
            frames,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        let interval = TimeCodeInterval::new(1, 2, 3, 4);
        assert_eq!(interval.to_string(), "01:02:03:04");
    }

    #[test]
    fn test_parse() {
        let interval: TimeCodeInterval = "01:02:03:04".parse().unwrap();
        assert_eq!(interval, TimeCodeInterval::new(1, 2, 3, 4));

        // Drop-frame separator is tolerated and means the same thing.
        let interval: TimeCodeInterval = "01:02:03;04".parse().unwrap();
        assert_eq!(interval, TimeCodeInterval::new(1, 2, 3, 4));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("1:02:03:04".parse::<TimeCodeInterval>().is_err());
        assert!("01:02:03:04 ".parse::<TimeCodeInterval>().is_err());
        assert!("01;02:03:04".parse::<TimeCodeInterval>().is_err());
        assert!("01:02:03".parse::<TimeCodeInterval>().is_err());
    }

    #[test]
    fn test_is_zero() {
        assert!(TimeCodeInterval::default().is_zero());
        assert!(!TimeCodeInterval::new(0, 0, 0, 1).is_zero());
    }

    #[test]
    fn test_serialization() {
        let interval = TimeCodeInterval::new(0, 10, 0, 5);
        let json = serde_json::to_string(&interval).unwrap();
        let decoded: TimeCodeInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(interval, decoded);
    }
}
