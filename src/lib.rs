//! SMPTE Timecode Arithmetic
//!
//! This crate provides exact SMPTE 12M timecode support:
//!
//! - **Timecode values**: `HH:MM:SS:FF` over any rational frame rate
//! - **Drop-frame counting**: accurate wall-clock tracking for the NTSC
//!   `.../1001` family (29.97, 59.94 and their clean multiples)
//! - **Interval arithmetic**: rate-less durations added onto timecodes
//!   with per-minute drop-frame correction
//! - **Wall-clock anchoring**: "daily jam" conversions to and from
//!   `chrono` datetimes, drift-free over a full day
//!
//! # Quick Start
//!
//! ```rust
//! use video_timecode::{FrameRate, TimeCode, TimeCodeFlags};
//!
//! // Create a timecode
//! let tc = TimeCode::new(
//!     FrameRate::FPS_25,
//!     TimeCodeFlags::empty(),
//!     None,
//!     1, 30, 45, 12,
//!     0,
//! )
//! .unwrap();
//! println!("Timecode: {}", tc); // Output: 01:30:45:12
//!
//! // Parse from string
//! let tc2: TimeCode = "01:30:45:12".parse().unwrap();
//!
//! // Convert to an ordinal frame count
//! let frame_number = tc.frames_since_daily_jam();
//!
//! // Timecode arithmetic
//! let tc3 = tc.add_frames(100);
//! assert_eq!(tc3.to_string(), "01:30:49:12");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! For 29.97 fps content, drop-frame timecode keeps the displayed count
//! in step with real wall-clock time by skipping frame numbers at the
//! start of most minutes (note the semicolon separator):
//!
//! ```rust
//! use video_timecode::{timecode_df, FrameRate};
//!
//! let mut tc = timecode_df(0, 0, 59, 29, FrameRate::FPS_29_97).unwrap();
//! tc.increment_frame();
//! // Frames 0 and 1 of minute 1 do not exist.
//! assert_eq!(tc.to_string(), "00:01:00;02");
//! ```
//!
//! # Wall-Clock Anchoring
//!
//! A timecode may carry a "daily jam": the wall-clock instant at which
//! `00:00:00:00` occurred. With an anchor set, timecodes convert to
//! absolute datetimes using exact rational arithmetic:
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use video_timecode::{FrameRate, TimeCode, TimeCodeFlags};
//!
//! let dt = Utc.with_ymd_and_hms(2024, 6, 1, 10, 30, 15).unwrap();
//! let tc = TimeCode::from_date_time(FrameRate::FPS_25, dt, TimeCodeFlags::empty(), 0).unwrap();
//! assert_eq!(tc.to_string(), "10:30:15:00");
//! assert_eq!(tc.to_date_time().unwrap(), dt);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod framerate;
pub mod interval;
pub mod timecode;

// Re-export main types
pub use error::{Result, TimeCodeError};
pub use framerate::FrameRate;
pub use interval::TimeCodeInterval;
pub use timecode::{parse_timecode, TimeCode, TimeCodeConfig, TimeCodeFlags};

// Re-export drop-frame utilities
pub use dropframe::{
    frames_dropped_until, is_dropped_frame, validate_not_dropped, DropFrameConfig,
};

/// Maximum hours value in timecode (23).
pub const MAX_HOURS: u32 = 23;

/// Maximum minutes value in timecode (59).
pub const MAX_MINUTES: u32 = 59;

/// Maximum seconds value in timecode (59).
pub const MAX_SECONDS: u32 = 59;

/// Maximum field count for interlaced timecodes (2).
pub const MAX_FIELD_COUNT: u32 = 2;

/// Create a non-drop-frame timecode from hours, minutes, seconds, and frames.
///
/// # Arguments
/// * `hours` - Hours (0-23)
/// * `minutes` - Minutes (0-59)
/// * `seconds` - Seconds (0-59)
/// * `frames` - Frames (0 to `nominal_fps - 1`)
/// * `frame_rate` - The frame rate
///
/// # Example
/// ```rust
/// use video_timecode::{timecode, FrameRate};
///
/// let tc = timecode(1, 30, 45, 12, FrameRate::FPS_24).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn timecode(
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
    frame_rate: FrameRate,
) -> Result<TimeCode> {
    TimeCode::new(
        frame_rate,
        TimeCodeFlags::empty(),
        None,
        hours,
        minutes,
        seconds,
        frames,
        0,
    )
}

/// Create a drop-frame timecode from hours, minutes, seconds, and frames.
///
/// # Arguments
/// * `hours` - Hours (0-23)
/// * `minutes` - Minutes (0-59)
/// * `seconds` - Seconds (0-59)
/// * `frames` - Frames (0 to `nominal_fps - 1`, excluding skipped numbers)
/// * `frame_rate` - The frame rate (must be drop-frame-eligible)
///
/// # Example
/// ```rust
/// use video_timecode::{timecode_df, FrameRate};
///
/// let tc = timecode_df(1, 0, 0, 2, FrameRate::FPS_29_97).unwrap();
/// assert_eq!(tc.to_string(), "01:00:00;02");
/// ```
pub fn timecode_df(
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
    frame_rate: FrameRate,
) -> Result<TimeCode> {
    TimeCode::new(
        frame_rate,
        TimeCodeFlags::DROP_FRAME,
        None,
        hours,
        minutes,
        seconds,
        frames,
        0,
    )
}

/// Signed frame count between two timecodes of the same configuration.
///
/// Positive when `end` is after `start`. Only meaningful when both
/// share a frame rate and drop-frame flag.
#[must_use]
pub fn frames_between(start: &TimeCode, end: &TimeCode) -> i64 {
    end.frames_since_daily_jam() as i64 - start.frames_since_daily_jam() as i64
}
