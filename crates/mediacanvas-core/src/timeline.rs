use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

const TENTH: Duration = Duration::from_millis(100);

/// Total length of the composition. Every time window lives inside `[0, TIMELINE_DURATION]`.
pub const TIMELINE_DURATION: TimelinePosition = TimelinePosition(Duration::from_secs(60));

/// Shortest span a clip may be scheduled for.
pub const MIN_WINDOW: TimelinePosition = TimelinePosition(TENTH);

/// A position on the timeline, quantized to tenths of a second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimelinePosition(Duration);

impl TimelinePosition {
    pub fn zero() -> Self {
        Self(Duration::ZERO)
    }

    /// Saturates instead of overflowing for out-of-range counts.
    pub const fn from_tenths(tenths: u64) -> Self {
        Self(Duration::from_millis(tenths.saturating_mul(100)))
    }

    /// Rounds to the nearest tenth of a second. Negative and non-finite input maps to zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::zero();
        }
        Self::from_tenths((secs * 10.0).round() as u64)
    }

    pub fn as_tenths(&self) -> u64 {
        (self.0.as_millis() / 100) as u64
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.as_tenths() as f64 / 10.0
    }
}

impl std::ops::Add for TimelinePosition {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for TimelinePosition {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for TimelinePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}s", self.as_secs_f64())
    }
}

/// The closed interval during which a clip is shown.
///
/// Always satisfies `0 <= start < end <= TIMELINE_DURATION`; because positions
/// are quantized, `end - start` is at least [`MIN_WINDOW`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeWindow")]
pub struct TimeWindow {
    start: TimelinePosition,
    end: TimelinePosition,
}

/// Unchecked wire form; deserialization goes through [`TimeWindow::new`].
#[derive(Deserialize)]
struct RawTimeWindow {
    start: TimelinePosition,
    end: TimelinePosition,
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = CoreError;

    fn try_from(raw: RawTimeWindow) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeWindow {
    pub fn new(start: TimelinePosition, end: TimelinePosition) -> Result<Self> {
        if start >= end || end > TIMELINE_DURATION {
            return Err(CoreError::InvalidTimeWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn from_secs(start: f64, end: f64) -> Result<Self> {
        Self::new(
            TimelinePosition::from_secs_f64(start),
            TimelinePosition::from_secs_f64(end),
        )
    }

    pub fn start(&self) -> TimelinePosition {
        self.start
    }

    pub fn end(&self) -> TimelinePosition {
        self.end
    }

    pub fn duration(&self) -> TimelinePosition {
        self.end - self.start
    }

    /// Closed-interval membership: a clip is still shown on its last tenth.
    pub fn contains(&self, playhead: TimelinePosition) -> bool {
        self.start <= playhead && playhead <= self.end
    }

    /// Offset and width of this window as fractions of the track.
    pub fn track_span(&self) -> TrackSpan {
        TrackSpan {
            offset: ratio(self.start),
            width: ratio(self.duration()),
        }
    }
}

/// Horizontal placement of a window on the track, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackSpan {
    pub offset: f64,
    pub width: f64,
}

/// Fraction of the timeline covered up to `pos`.
pub fn ratio(pos: TimelinePosition) -> f64 {
    pos.as_secs_f64() / TIMELINE_DURATION.as_secs_f64()
}

/// Inverse of [`ratio`], clamped to the timeline.
pub fn position_at_ratio(ratio: f64) -> TimelinePosition {
    if ratio.is_nan() {
        return TimelinePosition::zero();
    }
    TimelinePosition::from_secs_f64(ratio.clamp(0.0, 1.0) * TIMELINE_DURATION.as_secs_f64())
}

/// Shift `start` by `delta_ratio` of the track width, keeping its duration.
///
/// The new start is clamped to `[0, TIMELINE_DURATION - duration]`, so the
/// window is pinned against either end of the timeline instead of shrinking.
pub fn reschedule(start: TimeWindow, delta_ratio: f64) -> TimeWindow {
    if !delta_ratio.is_finite() {
        return start;
    }
    let duration = start.duration();
    let latest_start = (TIMELINE_DURATION - duration).as_secs_f64();
    let raw = start.start.as_secs_f64() + delta_ratio * TIMELINE_DURATION.as_secs_f64();
    let new_start = TimelinePosition::from_secs_f64(raw.clamp(0.0, latest_start));
    TimeWindow {
        start: new_start,
        end: new_start + duration,
    }
}

/// Set the start of `window` to `secs`, pushing the end out if the span
/// would drop below [`MIN_WINDOW`].
pub fn edit_start(window: TimeWindow, secs: f64) -> TimeWindow {
    if !secs.is_finite() {
        return window;
    }
    let latest = (TIMELINE_DURATION - MIN_WINDOW).as_secs_f64();
    let start = TimelinePosition::from_secs_f64(secs.clamp(0.0, latest));
    let end = (start + MIN_WINDOW).max(window.end);
    TimeWindow { start, end }
}

/// Set the end of `window` to `secs`, pulling the start in if the span
/// would drop below [`MIN_WINDOW`].
pub fn edit_end(window: TimeWindow, secs: f64) -> TimeWindow {
    if !secs.is_finite() {
        return window;
    }
    let earliest = MIN_WINDOW.as_secs_f64();
    let end = TimelinePosition::from_secs_f64(secs.clamp(earliest, TIMELINE_DURATION.as_secs_f64()));
    let start = (end - MIN_WINDOW).min(window.start);
    TimeWindow { start, end }
}
