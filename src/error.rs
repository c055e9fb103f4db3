//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimeCodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeCodeError {
    /// Invalid frame rate.
    #[error("Invalid frame rate: {num}/{den}")]
    InvalidFrameRate {
        /// Frame rate numerator.
        num: u32,
        /// Frame rate denominator.
        den: u32,
    },

    /// Unsupported frame rate for operation.
    #[error("Unsupported frame rate for {operation}: {frame_rate}")]
    UnsupportedFrameRate {
        /// The operation that doesn't support this frame rate.
        operation: String,
        /// String representation of the unsupported frame rate.
        frame_rate: String,
    },

    /// Invalid timecode component value.
    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        /// Name of the invalid component (hours, minutes, seconds, frames).
        component: String,
        /// The invalid value that was provided.
        value: u32,
        /// The maximum allowed value for this component.
        max: u32,
    },

    /// Drop-frame timecode error.
    #[error("Drop-frame error: {message}")]
    DropFrame {
        /// Description of the drop-frame error.
        message: String,
    },

    /// Invalid field count for the interlacing mode.
    #[error("Invalid field count {field_count} (interlaced: {interlaced})")]
    InvalidFieldCount {
        /// The field count that was provided.
        field_count: u32,
        /// Whether the timecode is flagged as interlaced.
        interlaced: bool,
    },

    /// Invalid timecode format in string.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// A wall-clock conversion was requested without a daily jam anchor.
    #[error("No daily jam set")]
    MissingDailyJam,
}

impl TimeCodeError {
    /// Create an invalid frame rate error.
    pub fn invalid_frame_rate(num: u32, den: u32) -> Self {
        Self::InvalidFrameRate { num, den }
    }

    /// Create an unsupported frame rate error.
    pub fn unsupported_frame_rate(
        operation: impl Into<String>,
        frame_rate: impl Into<String>,
    ) -> Self {
        Self::UnsupportedFrameRate {
            operation: operation.into(),
            frame_rate: frame_rate.into(),
        }
    }

    /// Create an invalid component error.
    pub fn invalid_component(component: impl Into<String>, value: u32, max: u32) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value,
            max,
        }
    }

    /// Create a drop-frame error.
    pub fn drop_frame(message: impl Into<String>) -> Self {
        Self::DropFrame {
            message: message.into(),
        }
    }

    /// Create an invalid field count error.
    pub fn invalid_field_count(field_count: u32, interlaced: bool) -> Self {
        Self::InvalidFieldCount {
            field_count,
            interlaced,
        }
    }

    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }
}
