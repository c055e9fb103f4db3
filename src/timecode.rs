//! SMPTE 12M timecode representation and arithmetic.
//!
//! The [`TimeCode`] type carries `HH:MM:SS:FF` fields together with a
//! rational frame rate, drop-frame/interlace flags and an optional
//! "daily jam" wall-clock anchor (the instant at which `00:00:00:00`
//! occurred). All arithmetic is exact integer math; drop-frame
//! skip-correction is applied wherever a minute boundary is crossed, so
//! no operation can ever produce a skipped frame number.

use crate::dropframe::{self, DropFrameConfig};
use crate::error::{Result, TimeCodeError};
use crate::framerate::FrameRate;
use crate::interval::TimeCodeInterval;
use bitflags::bitflags;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Flags qualifying a timecode.
    ///
    /// Serialize/Deserialize come from the `serde` feature of
    /// `bitflags` (flag-name format).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct TimeCodeFlags: u32 {
        /// Drop-frame counting (NTSC `.../1001` family only).
        const DROP_FRAME = 0x0001;
        /// The signal is interlaced; `field_count` identifies the field.
        const INTERLACED = 0x0002;
    }
}

/// Static configuration shared by related timecodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCodeConfig {
    /// The frame rate.
    pub frame_rate: FrameRate,
    /// Drop-frame and interlacing flags.
    pub flags: TimeCodeFlags,
    /// The wall-clock instant at which `00:00:00:00` occurred, if known.
    pub latest_daily_jam: Option<DateTime<Utc>>,
}

/// An SMPTE timecode: `HH:MM:SS:FF` plus configuration.
///
/// Fields are public to support the init-then-mutate lifecycle; after
/// direct mutation, re-check with [`TimeCode::is_valid`]. The validating
/// constructor is [`TimeCode::new`].
///
/// # Example
///
/// ```rust
/// use video_timecode::{FrameRate, TimeCode, TimeCodeFlags};
///
/// let mut tc = TimeCode::new(
///     FrameRate::FPS_29_97,
///     TimeCodeFlags::DROP_FRAME,
///     None,
///     10, 10, 59, 29,
///     0,
/// )
/// .unwrap();
/// assert_eq!(tc.to_string(), "10:10:59;29");
///
/// // Minute 11 is not a multiple of 10, so frames 0 and 1 are skipped.
/// tc.increment_frame();
/// assert_eq!(tc.to_string(), "10:11:00;02");
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimeCode {
    /// Static configuration (rate, flags, daily jam).
    pub config: TimeCodeConfig,
    /// Hours (0-23).
    pub hours: u32,
    /// Minutes (0-59).
    pub minutes: u32,
    /// Seconds (0-59).
    pub seconds: u32,
    /// Frames (0 to `nominal_fps - 1`).
    pub frames: u32,
    /// 0 for progressive; 1 or 2 to identify the field when interlaced.
    pub field_count: u32,
}

impl TimeCode {
    /// Create a validated timecode.
    ///
    /// Fails if any field is out of range, if `DROP_FRAME` is requested
    /// for a rate outside the NTSC drop-frame family, if the fields name
    /// a skipped drop-frame number, or if `field_count` disagrees with
    /// the `INTERLACED` flag.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        frame_rate: FrameRate,
        flags: TimeCodeFlags,
        latest_daily_jam: Option<DateTime<Utc>>,
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        field_count: u32,
    ) -> Result<Self> {
        let tc = Self::new_unchecked(
            frame_rate,
            flags,
            latest_daily_jam,
            hours,
            minutes,
            seconds,
            frames,
            field_count,
        );
        tc.validate()?;
        Ok(tc)
    }

    /// Create a timecode without validation.
    ///
    /// For bulk initialization where fields are mutated afterwards.
    /// Callers must re-check with [`TimeCode::is_valid`] before handing
    /// the value to arithmetic, which assumes validated input.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new_unchecked(
        frame_rate: FrameRate,
        flags: TimeCodeFlags,
        latest_daily_jam: Option<DateTime<Utc>>,
        hours: u32,
        minutes: u32,
        seconds: u32,
        frames: u32,
        field_count: u32,
    ) -> Self {
        Self {
            config: TimeCodeConfig {
                frame_rate,
                flags,
                latest_daily_jam,
            },
            hours,
            minutes,
            seconds,
            frames,
            field_count,
        }
    }

    /// Create a timecode from a wall-clock instant.
    ///
    /// The elapsed time since the instant's own midnight is converted to
    /// a frame count (round-half-up, exact rational) and added onto the
    /// zero timecode, so drop-frame skip-insertion is honored. The daily
    /// jam is set to that midnight.
    pub fn from_date_time(
        frame_rate: FrameRate,
        dt: DateTime<Utc>,
        flags: TimeCodeFlags,
        field_count: u32,
    ) -> Result<Self> {
        let midnight = dt.date_naive().and_time(NaiveTime::MIN).and_utc();
        let zero = Self::new(
            frame_rate,
            flags,
            Some(midnight),
            0,
            0,
            0,
            0,
            field_count,
        )?;
        let nanos = (dt - midnight).num_nanoseconds().unwrap_or(0).max(0) as u128;
        let den_nanos = frame_rate.den as u128 * 1_000_000_000;
        let frames = ((nanos * frame_rate.num as u128 + den_nanos / 2) / den_nanos) as i64;
        Ok(zero.add_frames(frames))
    }

    /// Re-run all invariant checks against the current field values.
    ///
    /// Stateless; usable after direct field mutation.
    pub fn validate(&self) -> Result<()> {
        let rate = self.config.frame_rate;
        if rate.num == 0 || rate.den == 0 {
            return Err(TimeCodeError::invalid_frame_rate(rate.num, rate.den));
        }
        if self.is_drop_frame() && !rate.is_drop_frame_eligible() {
            return Err(TimeCodeError::unsupported_frame_rate(
                "drop-frame",
                rate.to_string(),
            ));
        }
        if self.hours > 23 {
            return Err(TimeCodeError::invalid_component("hours", self.hours, 23));
        }
        if self.minutes > 59 {
            return Err(TimeCodeError::invalid_component("minutes", self.minutes, 59));
        }
        if self.seconds > 59 {
            return Err(TimeCodeError::invalid_component("seconds", self.seconds, 59));
        }
        let max_frames = rate.nominal_fps();
        if self.frames >= max_frames {
            return Err(TimeCodeError::invalid_component(
                "frames",
                self.frames,
                max_frames - 1,
            ));
        }
        if self.is_drop_frame()
            && dropframe::is_dropped_frame(self.minutes, self.seconds, self.frames, rate)
        {
            return Err(TimeCodeError::drop_frame(format!(
                "Frame {} is skipped at minute {} (not a multiple of 10)",
                self.frames, self.minutes
            )));
        }
        let interlaced = self.is_interlaced();
        match (interlaced, self.field_count) {
            (false, 0) | (true, 1) | (true, 2) => {}
            _ => {
                return Err(TimeCodeError::invalid_field_count(
                    self.field_count,
                    interlaced,
                ))
            }
        }
        Ok(())
    }

    /// Whether all invariants hold for the current field values.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether this timecode counts drop-frame.
    #[must_use]
    pub fn is_drop_frame(&self) -> bool {
        self.config.flags.contains(TimeCodeFlags::DROP_FRAME)
    }

    /// Whether the signal is interlaced.
    #[must_use]
    pub fn is_interlaced(&self) -> bool {
        self.config.flags.contains(TimeCodeFlags::INTERLACED)
    }

    /// Advance by exactly one frame, in place.
    ///
    /// Wraps from `23:59:59:FF` to `00:00:00:00`. After a minute
    /// boundary the drop-frame correction applies, so the result is
    /// always a valid (non-skipped) timecode.
    pub fn increment_frame(&mut self) {
        *self = self.add_frames(1);
    }

    /// Add a signed number of frames, closed form.
    ///
    /// O(1) regardless of `frames`: converts to the ordinal frame count
    /// since `00:00:00:00`, adds, and converts back. Wraps modulo one
    /// day in either direction.
    #[must_use]
    pub fn add_frames(&self, frames: i64) -> Self {
        let mut tc = *self;
        let rate = self.config.frame_rate;

        if let Some(config) = self.drop_frame_config() {
            let day = config.frames_per_day() as i128;
            let current = dropframe::frame_number_from_fields(
                self.hours,
                self.minutes,
                self.seconds,
                self.frames,
                &config,
            ) as i128;
            let wrapped = (current + frames as i128).rem_euclid(day) as u64;
            let (hours, minutes, seconds, frame) =
                dropframe::fields_from_frame_number(wrapped, &config);
            tc.hours = hours;
            tc.minutes = minutes;
            tc.seconds = seconds;
            tc.frames = frame;
            return tc;
        }

        if rate.is_sub_second() {
            // One frame spans several whole seconds; the frames field
            // stays 0 and the seconds field carries the quantum.
            let quantum = rate.seconds_per_frame() as i128;
            let frames_per_day = (86_400 / quantum).max(1);
            let current = self.total_seconds() as i128 / quantum;
            let wrapped = (current + frames as i128).rem_euclid(frames_per_day);
            let total_seconds = (wrapped * quantum) as u64 % 86_400;
            tc.hours = (total_seconds / 3600) as u32;
            tc.minutes = ((total_seconds / 60) % 60) as u32;
            tc.seconds = (total_seconds % 60) as u32;
            tc.frames = 0;
            return tc;
        }

        let fps = rate.nominal_fps() as i128;
        if fps == 0 {
            return tc;
        }
        let day = fps * 86_400;
        let current = fps * self.total_seconds() as i128 + self.frames as i128;
        let wrapped = (current + frames as i128).rem_euclid(day);
        let total_seconds = (wrapped / fps) as u64;
        tc.frames = (wrapped % fps) as u32;
        tc.hours = (total_seconds / 3600) as u32;
        tc.minutes = ((total_seconds / 60) % 60) as u32;
        tc.seconds = (total_seconds % 60) as u32;
        tc
    }

    /// Add an interval, field by field, and re-normalize.
    ///
    /// Overflow folds upward (frames into seconds, seconds into minutes,
    /// minutes into hours, hours modulo 24). Whenever a carry crosses a
    /// minute boundary of a drop-frame timecode and lands in the skipped
    /// region, the frame number is pushed past the skipped range, the
    /// same correction [`TimeCode::increment_frame`] applies.
    #[must_use]
    pub fn add_interval(&self, interval: &TimeCodeInterval) -> Self {
        let mut tc = *self;
        let rate = self.config.frame_rate;
        let fps = rate.nominal_fps().max(1) as u64;
        let drop = if self.is_drop_frame() {
            rate.drop_frame_count().unwrap_or(0) as u64
        } else {
            0
        };

        let mut frames = self.frames as u64 + interval.frames as u64;
        let mut seconds = self.seconds as u64 + interval.seconds as u64;
        let mut minutes = self.minutes as u64 + interval.minutes as u64;
        let mut hours = self.hours as u64 + interval.hours as u64;

        seconds += frames / fps;
        frames %= fps;
        while seconds >= 60 {
            seconds -= 60;
            minutes += 1;
            if drop > 0 && seconds == 0 && minutes % 10 != 0 && frames < drop {
                frames += drop;
            }
        }
        while minutes >= 60 {
            minutes -= 60;
            hours += 1;
        }
        // The minutes of the interval itself may land on a skipped number.
        if drop > 0 && seconds == 0 && minutes % 10 != 0 && frames < drop {
            frames += drop;
        }
        hours %= 24;

        tc.hours = hours as u32;
        tc.minutes = minutes as u32;
        tc.seconds = seconds as u32;
        tc.frames = frames as u32;
        tc
    }

    /// Ordinal frame count since `00:00:00:00` of the daily jam.
    ///
    /// For drop-frame rates the skipped frame numbers are subtracted,
    /// so consecutive timecodes map to consecutive ordinals. Assumes a
    /// validated timecode.
    #[must_use]
    pub fn frames_since_daily_jam(&self) -> u64 {
        let rate = self.config.frame_rate;
        if let Some(config) = self.drop_frame_config() {
            return dropframe::frame_number_from_fields(
                self.hours,
                self.minutes,
                self.seconds,
                self.frames,
                &config,
            );
        }
        if rate.is_sub_second() {
            return self.total_seconds() / rate.seconds_per_frame() as u64;
        }
        rate.nominal_fps() as u64 * self.total_seconds() + self.frames as u64
    }

    /// Nanoseconds since `00:00:00:00` of the daily jam.
    ///
    /// Exact rational arithmetic (`frames * den * 1e9 / num`, floor);
    /// no floating point, no drift over long durations.
    #[must_use]
    pub fn nsec_since_daily_jam(&self) -> u64 {
        let rate = self.config.frame_rate;
        if rate.num == 0 {
            return 0;
        }
        let frames = self.frames_since_daily_jam() as u128;
        ((frames * rate.den as u128 * 1_000_000_000) / rate.num as u128) as u64
    }

    /// The wall-clock instant this timecode names.
    ///
    /// `latest_daily_jam + nsec_since_daily_jam`; fails with
    /// [`TimeCodeError::MissingDailyJam`] when no anchor is set.
    pub fn to_date_time(&self) -> Result<DateTime<Utc>> {
        let jam = self
            .config
            .latest_daily_jam
            .ok_or(TimeCodeError::MissingDailyJam)?;
        Ok(jam + Duration::nanoseconds(self.nsec_since_daily_jam() as i64))
    }

    /// Seconds named by the `hours:minutes:seconds` fields.
    fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    fn drop_frame_config(&self) -> Option<DropFrameConfig> {
        if self.is_drop_frame() {
            DropFrameConfig::for_frame_rate(self.config.frame_rate)
        } else {
            None
        }
    }

    /// The separator printed before the frame field.
    #[must_use]
    pub fn separator(&self) -> char {
        if self.is_drop_frame() {
            ';'
        } else {
            ':'
        }
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours,
            self.minutes,
            self.seconds,
            self.separator(),
            self.frames
        )
    }
}

impl FromStr for TimeCode {
    type Err = TimeCodeError;

    /// Strict parse with a defaulted frame rate.
    ///
    /// The wire format does not carry a rate. A `;` separator implies
    /// 30000/1001 drop-frame; otherwise the smallest standard integer
    /// rate admitting the frames digits is assumed (24, 30, then 60).
    /// Use [`parse_timecode`] to supply the rate explicitly.
    fn from_str(s: &str) -> Result<Self> {
        let (hours, minutes, seconds, frames, drop) = parse_fields(s)?;
        let frame_rate = if drop {
            FrameRate::FPS_29_97
        } else if frames >= 30 {
            FrameRate::FPS_60
        } else if frames >= 24 {
            FrameRate::FPS_30
        } else {
            FrameRate::FPS_24
        };
        let flags = if drop {
            TimeCodeFlags::DROP_FRAME
        } else {
            TimeCodeFlags::empty()
        };
        Self::new(frame_rate, flags, None, hours, minutes, seconds, frames, 0)
    }
}

impl PartialEq for TimeCode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimeCode {}

impl PartialOrd for TimeCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeCode {
    /// Structural, lexicographic order over
    /// `(fps_num, fps_den, hours, minutes, seconds, frames, field_count)`.
    ///
    /// Timecodes at different rates are never equal, even when their
    /// derived wall-clock instants coincide; flags and the daily jam do
    /// not participate. Callers wanting elapsed-time order must compare
    /// [`TimeCode::nsec_since_daily_jam`] values instead.
    fn cmp(&self, other: &Self) -> Ordering {
        self.config
            .frame_rate
            .num
            .cmp(&other.config.frame_rate.num)
            .then_with(|| self.config.frame_rate.den.cmp(&other.config.frame_rate.den))
            .then_with(|| self.hours.cmp(&other.hours))
            .then_with(|| self.minutes.cmp(&other.minutes))
            .then_with(|| self.seconds.cmp(&other.seconds))
            .then_with(|| self.frames.cmp(&other.frames))
            .then_with(|| self.field_count.cmp(&other.field_count))
    }
}

/// Parse the strict `HH:MM:SS:FF` / `HH:MM:SS;FF` grammar into
/// `(hours, minutes, seconds, frames, drop_frame)`.
///
/// Exactly two digits per field, `:` after hours and minutes, `:` or
/// `;` before frames, nothing else: no whitespace, no trailing input.
pub(crate) fn parse_fields(s: &str) -> Result<(u32, u32, u32, u32, bool)> {
    let bytes = s.as_bytes();
    if bytes.len() != 11 {
        return Err(TimeCodeError::invalid_format(format!(
            "Expected HH:MM:SS:FF or HH:MM:SS;FF, got {s:?}"
        )));
    }
    if bytes[2] != b':' || bytes[5] != b':' {
        return Err(TimeCodeError::invalid_format(format!(
            "Expected ':' separators after hours and minutes in {s:?}"
        )));
    }
    let drop = match bytes[8] {
        b':' => false,
        b';' => true,
        _ => {
            return Err(TimeCodeError::invalid_format(format!(
                "Expected ':' or ';' before frames in {s:?}"
            )))
        }
    };
    let digit_pair = |at: usize| -> Result<u32> {
        let (hi, lo) = (bytes[at], bytes[at + 1]);
        if !hi.is_ascii_digit() || !lo.is_ascii_digit() {
            return Err(TimeCodeError::invalid_format(format!(
                "Expected two digits at offset {at} in {s:?}"
            )));
        }
        Ok((hi - b'0') as u32 * 10 + (lo - b'0') as u32)
    };
    Ok((
        digit_pair(0)?,
        digit_pair(3)?,
        digit_pair(6)?,
        digit_pair(9)?,
        drop,
    ))
}

/// Parse a timecode string with an explicitly supplied frame rate.
///
/// A `;` before the frame field sets `DROP_FRAME` and therefore
/// requires a drop-frame-eligible rate.
///
/// # Example
///
/// ```rust
/// use video_timecode::{parse_timecode, FrameRate};
///
/// let tc = parse_timecode("01:30:45:12", FrameRate::FPS_25).unwrap();
/// assert_eq!(tc.config.frame_rate, FrameRate::FPS_25);
///
/// assert!(parse_timecode("01:30:45;12", FrameRate::FPS_25).is_err());
/// ```
pub fn parse_timecode(s: &str, frame_rate: FrameRate) -> Result<TimeCode> {
    let (hours, minutes, seconds, frames, drop) = parse_fields(s)?;
    let flags = if drop {
        TimeCodeFlags::DROP_FRAME
    } else {
        TimeCodeFlags::empty()
    };
    TimeCode::new(frame_rate, flags, None, hours, minutes, seconds, frames, 0)
}
