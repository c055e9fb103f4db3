//! Rational frame rate representation.
//!
//! Frame rates are exact fractions (`num/den`), never floats. This keeps
//! long-running conversions drift-free and lets the NTSC `.../1001` family
//! be classified exactly.

use crate::error::{Result, TimeCodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A frame rate as an exact rational number.
///
/// The ordering is structural: rates compare by numerator first, then
/// denominator. `50/1` and `25/1` are simply different rates; so are
/// `50/2` and `25/1`. Callers that want elapsed-time comparison must
/// convert through [`TimeCode::nsec_since_daily_jam`].
///
/// [`TimeCode::nsec_since_daily_jam`]: crate::TimeCode::nsec_since_daily_jam
///
/// # Example
///
/// ```rust
/// use video_timecode::FrameRate;
///
/// let ntsc = FrameRate::FPS_29_97;
/// assert_eq!(ntsc.nominal_fps(), 30);
/// assert_eq!(ntsc.drop_frame_count(), Some(2));
/// assert_eq!(ntsc.to_string(), "30000/1001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameRate {
    /// Frame rate numerator.
    pub num: u32,
    /// Frame rate denominator.
    pub den: u32,
}

impl FrameRate {
    /// 24 fps (film).
    pub const FPS_24: Self = Self { num: 24, den: 1 };
    /// 23.976 fps (24000/1001, NTSC film). A legal rate, never drop-frame.
    pub const FPS_23_976: Self = Self {
        num: 24000,
        den: 1001,
    };
    /// 25 fps (PAL).
    pub const FPS_25: Self = Self { num: 25, den: 1 };
    /// 29.97 fps (30000/1001, NTSC).
    pub const FPS_29_97: Self = Self {
        num: 30000,
        den: 1001,
    };
    /// 30 fps.
    pub const FPS_30: Self = Self { num: 30, den: 1 };
    /// 48 fps (HFR film).
    pub const FPS_48: Self = Self { num: 48, den: 1 };
    /// 50 fps (PAL).
    pub const FPS_50: Self = Self { num: 50, den: 1 };
    /// 59.94 fps (60000/1001, NTSC).
    pub const FPS_59_94: Self = Self {
        num: 60000,
        den: 1001,
    };
    /// 60 fps.
    pub const FPS_60: Self = Self { num: 60, den: 1 };

    /// The "unknown rate" sentinel (0/1).
    ///
    /// Permitted only as an explicit placeholder; not usable for
    /// arithmetic, and rejected by [`TimeCode::validate`].
    ///
    /// [`TimeCode::validate`]: crate::TimeCode::validate
    pub const UNKNOWN: Self = Self { num: 0, den: 1 };

    /// Create a new frame rate.
    ///
    /// Fails on a zero numerator or denominator; the unknown sentinel
    /// exists only as [`FrameRate::UNKNOWN`].
    pub fn new(num: u32, den: u32) -> Result<Self> {
        if num == 0 || den == 0 {
            return Err(TimeCodeError::invalid_frame_rate(num, den));
        }
        Ok(Self { num, den })
    }

    /// Whether this is a real rate rather than the unknown sentinel.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.num != 0 && self.den != 0
    }

    /// The nominal (displayed) frames per second: the ceiling of the
    /// exact rate.
    ///
    /// This is the `N` of the `frames: 0..N-1` timecode field: 30 for
    /// 30000/1001, 60 for 60000/1001, 1 for rates below 1 fps.
    #[must_use]
    pub fn nominal_fps(&self) -> u32 {
        if self.den == 0 || self.num == 0 {
            return 0;
        }
        (self.num + self.den - 1) / self.den
    }

    /// The frame rate as a floating point value, for display only.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Reduce the fraction to its simplest form.
    #[must_use]
    pub fn reduced(&self) -> Self {
        if self.num == 0 || self.den == 0 {
            return *self;
        }
        let g = gcd(self.num, self.den);
        Self {
            num: self.num / g,
            den: self.den / g,
        }
    }

    /// The per-minute drop count if this rate is drop-frame-eligible.
    ///
    /// Drop-frame is defined only for rates derived from 30 or 60 Hz
    /// video: the reduced fraction must have denominator 1001 and a
    /// numerator that is a multiple of 30000. The count is 2 for
    /// 30000/1001, 4 for 60000/1001, and scales with clean multiples
    /// (8 for 120000/1001). 24000/1001 is a legal rate but returns
    /// `None` here.
    #[must_use]
    pub fn drop_frame_count(&self) -> Option<u32> {
        let r = self.reduced();
        if r.den == 1001 && r.num > 0 && r.num % 30000 == 0 {
            Some(r.num / 15000)
        } else {
            None
        }
    }

    /// Whether drop-frame timecode is defined for this rate.
    #[must_use]
    pub fn is_drop_frame_eligible(&self) -> bool {
        self.drop_frame_count().is_some()
    }

    /// Whether a single frame lasts longer than one second.
    #[must_use]
    pub fn is_sub_second(&self) -> bool {
        self.num > 0 && self.num < self.den
    }

    /// Whole seconds spanned by one frame, for rates below 1 fps.
    ///
    /// The exact duration `den/num` is quantized to the nearest whole
    /// second, rounding halves up. 1/2 fps gives 2; 2/5 fps gives 3.
    #[must_use]
    pub fn seconds_per_frame(&self) -> u32 {
        if self.num == 0 {
            return 0;
        }
        let num = self.num as u64;
        let den = self.den as u64;
        ((2 * den + num) / (2 * num)) as u32
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for FrameRate {
    type Err = TimeCodeError;

    /// Parse `"25"` or `"30000/1001"`.
    fn from_str(s: &str) -> Result<Self> {
        let parse_part = |part: &str| -> Result<u32> {
            part.parse()
                .map_err(|_| TimeCodeError::invalid_format(format!("Invalid frame rate: {s}")))
        };
        match s.split_once('/') {
            Some((num, den)) => Self::new(parse_part(num)?, parse_part(den)?),
            None => Self::new(parse_part(s)?, 1),
        }
    }
}

impl From<FrameRate> for (u32, u32) {
    fn from(rate: FrameRate) -> Self {
        (rate.num, rate.den)
    }
}

/// Greatest common divisor, Euclidean.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
