//! Drop-frame timecode support for the NTSC `.../1001` rate family.
//!
//! Drop-frame timecode compensates for the difference between the nominal
//! rate (30 or 60 fps) and the true rate (30000/1001 or 60000/1001) by
//! skipping frame *numbers* at specific points:
//!
//! - The first 2 frame numbers (4 for the 60 Hz family) of every minute
//!   are skipped,
//! - except for minutes 0, 10, 20, 30, 40, 50.
//!
//! No frames are dropped, only their labels, so the displayed timecode
//! tracks wall-clock time.

use crate::error::{Result, TimeCodeError};
use crate::framerate::FrameRate;
use crate::timecode::TimeCode;
use serde::{Deserialize, Serialize};

/// Drop-frame bookkeeping for one rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Frame numbers skipped per minute (except every 10th minute).
    pub drop_frames_per_minute: u32,
    /// Nominal frame rate (30, 60, ...).
    pub nominal_fps: u32,
    /// Real frames in a non-10th minute (`nominal * 60 - drop`).
    pub frames_per_minute: u64,
    /// Real frames in any 10-minute block (`nominal * 600 - 9 * drop`).
    pub frames_per_10_minutes: u64,
}

impl DropFrameConfig {
    /// The configuration for 29.97 fps (30000/1001).
    #[must_use]
    pub const fn for_29_97() -> Self {
        Self {
            drop_frames_per_minute: 2,
            nominal_fps: 30,
            // 30 * 60 - 2
            frames_per_minute: 1798,
            // 30 * 600 - 9 * 2
            frames_per_10_minutes: 17982,
        }
    }

    /// The configuration for 59.94 fps (60000/1001).
    #[must_use]
    pub const fn for_59_94() -> Self {
        Self {
            drop_frames_per_minute: 4,
            nominal_fps: 60,
            // 60 * 60 - 4
            frames_per_minute: 3596,
            // 60 * 600 - 9 * 4
            frames_per_10_minutes: 35964,
        }
    }

    /// Derive the configuration for a frame rate, if it is
    /// drop-frame-eligible.
    ///
    /// Computed from [`FrameRate::drop_frame_count`], so the whole NTSC
    /// family is covered, not just the two classic rates.
    #[must_use]
    pub fn for_frame_rate(frame_rate: FrameRate) -> Option<Self> {
        let drop = frame_rate.drop_frame_count()?;
        let nominal = frame_rate.nominal_fps();
        Some(Self {
            drop_frames_per_minute: drop,
            nominal_fps: nominal,
            frames_per_minute: nominal as u64 * 60 - drop as u64,
            frames_per_10_minutes: nominal as u64 * 600 - 9 * drop as u64,
        })
    }

    /// Real frames in a 24-hour day.
    #[must_use]
    pub fn frames_per_day(&self) -> u64 {
        self.frames_per_10_minutes * 144
    }
}

/// Whether `(minutes, seconds, frames)` names a skipped frame number.
///
/// Skipped numbers occur at the start of each minute except every 10th
/// minute; they can never legitimately appear in a drop-frame timecode.
#[must_use]
pub fn is_dropped_frame(minutes: u32, seconds: u32, frames: u32, frame_rate: FrameRate) -> bool {
    match frame_rate.drop_frame_count() {
        Some(drop) => minutes % 10 != 0 && seconds == 0 && frames < drop,
        None => false,
    }
}

/// Total frame numbers skipped before `hours:minutes:00:00`.
///
/// Every minute except the multiples of 10 skips the per-rate drop
/// count, so this is `drop * (total_minutes - total_minutes / 10)`.
#[must_use]
pub fn frames_dropped_until(hours: u32, minutes: u32, frame_rate: FrameRate) -> u64 {
    let drop = match frame_rate.drop_frame_count() {
        Some(d) => d as u64,
        None => return 0,
    };
    let total_minutes = hours as u64 * 60 + minutes as u64;
    drop * (total_minutes - total_minutes / 10)
}

/// Convert drop-frame timecode fields to an ordinal frame number.
///
/// Counts as if non-drop, then subtracts the skipped frame numbers for
/// every minute boundary crossed that is not a multiple of 10.
#[must_use]
pub fn frame_number_from_fields(
    hours: u32,
    minutes: u32,
    seconds: u32,
    frames: u32,
    config: &DropFrameConfig,
) -> u64 {
    let fps = config.nominal_fps as u64;
    let drop = config.drop_frames_per_minute as u64;
    let total_minutes = hours as u64 * 60 + minutes as u64;
    let skipped = drop * (total_minutes - total_minutes / 10);
    fps * (total_minutes * 60 + seconds as u64) + frames as u64 - skipped
}

/// Convert an ordinal frame number to drop-frame timecode fields
/// `(hours, minutes, seconds, frames)`.
///
/// Frame numbers beyond one day wrap around.
#[must_use]
pub fn fields_from_frame_number(frame_number: u64, config: &DropFrameConfig) -> (u32, u32, u32, u32) {
    let fps = config.nominal_fps as u64;
    let drop = config.drop_frames_per_minute as u64;

    let frame_number = frame_number % config.frames_per_day();
    let ten_minute_blocks = frame_number / config.frames_per_10_minutes;
    let into_block = frame_number % config.frames_per_10_minutes;

    // Re-insert the skipped numbers: 9 * drop per complete 10-minute
    // block, plus drop per complete non-leading minute within the block.
    let mut adjusted = frame_number + 9 * drop * ten_minute_blocks;
    if into_block > drop {
        adjusted += drop * ((into_block - drop) / config.frames_per_minute);
    }

    let frames = (adjusted % fps) as u32;
    let total_seconds = adjusted / fps;
    let seconds = (total_seconds % 60) as u32;
    let minutes = ((total_seconds / 60) % 60) as u32;
    let hours = ((total_seconds / 3600) % 24) as u32;
    (hours, minutes, seconds, frames)
}

/// Validate that a timecode does not name a skipped frame number.
pub fn validate_not_dropped(tc: &TimeCode) -> Result<()> {
    if !tc.is_drop_frame() {
        return Ok(());
    }
    if is_dropped_frame(tc.minutes, tc.seconds, tc.frames, tc.config.frame_rate) {
        return Err(TimeCodeError::drop_frame(format!(
            "Frame {:02}:{:02}:{:02};{:02} is a skipped frame number",
            tc.hours, tc.minutes, tc.seconds, tc.frames
        )));
    }
    Ok(())
}
