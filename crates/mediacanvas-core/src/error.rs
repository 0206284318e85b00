use thiserror::Error;

use crate::clip::ClipId;
use crate::timeline::TimelinePosition;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("clip not found: {0}")]
    ClipNotFound(ClipId),

    #[error("clip already present: {0}")]
    DuplicateClip(ClipId),

    #[error("invalid time window: start {start:?} must be before end {end:?} within the timeline")]
    InvalidTimeWindow {
        start: TimelinePosition,
        end: TimelinePosition,
    },

    #[error("size {width}x{height} is below the minimum of {min}px")]
    SizeBelowMinimum { width: f64, height: f64, min: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
