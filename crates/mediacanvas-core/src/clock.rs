use crate::timeline::{MIN_WINDOW, TIMELINE_DURATION, TimelinePosition};

/// Logical time added per tick.
pub const TICK_STEP: TimelinePosition = TimelinePosition::from_tenths(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick came from a source that is no longer current.
    Stale,
    Advanced(TimelinePosition),
    /// Reached the end of the timeline: the clock stopped and rewound to zero.
    Finished,
}

/// Owner of the playhead.
///
/// Every start hands out a new generation number; ticks must present the
/// generation of the run they belong to, so at most one tick source ever
/// drives the clock.
#[derive(Debug, Clone, Default)]
pub struct PlaybackClock {
    state: ClockState,
    current: TimelinePosition,
    generation: u64,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from zero. Returns the generation the new tick source must use,
    /// or `None` if the clock was already running.
    pub fn play(&mut self) -> Option<u64> {
        if self.state == ClockState::Running {
            return None;
        }
        self.state = ClockState::Running;
        self.current = TimelinePosition::zero();
        self.generation += 1;
        tracing::info!(generation = self.generation, "playback started");
        Some(self.generation)
    }

    /// Stop without rewinding. Returns whether the clock was running.
    pub fn pause(&mut self) -> bool {
        if self.state == ClockState::Stopped {
            return false;
        }
        self.state = ClockState::Stopped;
        tracing::info!(at = %self.current, "playback paused");
        true
    }

    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if self.state != ClockState::Running || generation != self.generation {
            return TickOutcome::Stale;
        }
        let next = self.current + TICK_STEP;
        if next >= TIMELINE_DURATION {
            self.state = ClockState::Stopped;
            self.current = TimelinePosition::zero();
            tracing::info!("playback reached end of timeline");
            return TickOutcome::Finished;
        }
        self.current = next;
        TickOutcome::Advanced(next)
    }

    /// Move the playhead without changing whether the clock runs.
    pub fn seek(&mut self, to: TimelinePosition) -> TimelinePosition {
        self.current = to.min(TIMELINE_DURATION - MIN_WINDOW);
        self.current
    }

    pub fn current(&self) -> TimelinePosition {
        self.current
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
