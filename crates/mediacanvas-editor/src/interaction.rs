use mediacanvas_core::clip::ClipId;
use mediacanvas_core::error::{CoreError, Result};
use mediacanvas_core::geometry::{self, Placement, Point, ResizeDirection};
use mediacanvas_core::store::ClipStore;
use mediacanvas_core::timeline::{self, TimeWindow};

use crate::message::PointerTarget;

/// The pointer gesture in progress, with everything captured at pointer-down.
///
/// Every move is computed from these snapshots, never from the clip's
/// current state, so dropped or coalesced moves cannot accumulate error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        clip_id: ClipId,
        origin: Point,
        start: Placement,
    },
    Resizing {
        clip_id: ClipId,
        direction: ResizeDirection,
        origin: Point,
        start: Placement,
    },
    Rescheduling {
        clip_id: ClipId,
        origin: Point,
        track_width: f64,
        start: TimeWindow,
    },
}

impl Gesture {
    pub fn clip_id(&self) -> Option<ClipId> {
        match self {
            Gesture::Idle => None,
            Gesture::Dragging { clip_id, .. }
            | Gesture::Resizing { clip_id, .. }
            | Gesture::Rescheduling { clip_id, .. } => Some(*clip_id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InteractionController {
    gesture: Gesture,
    canvas_min_size: f64,
}

impl InteractionController {
    pub fn new(canvas_min_size: f64) -> Self {
        Self {
            gesture: Gesture::Idle,
            canvas_min_size,
        }
    }

    /// Begin a gesture on `target`, selecting its clip first if needed.
    ///
    /// A pointer-down while another gesture is active replaces it.
    pub fn pointer_down(&mut self, store: &mut ClipStore, target: PointerTarget, at: Point) -> Result<()> {
        let clip_id = target.clip_id();
        let clip = store.get(clip_id).ok_or(CoreError::ClipNotFound(clip_id))?;
        let placement = clip.placement();
        let window = clip.window;
        if !clip.selected {
            store.select(clip_id)?;
        }

        self.gesture = match target {
            PointerTarget::ClipBody(_) => Gesture::Dragging {
                clip_id,
                origin: at,
                start: placement,
            },
            PointerTarget::ResizeHandle(_, direction) => Gesture::Resizing {
                clip_id,
                direction,
                origin: at,
                start: placement,
            },
            PointerTarget::TimelineItem { track_width, .. } if track_width > 0.0 => {
                Gesture::Rescheduling {
                    clip_id,
                    origin: at,
                    track_width,
                    start: window,
                }
            }
            PointerTarget::TimelineItem { .. } => {
                tracing::debug!(%clip_id, "timeline track has no width, not rescheduling");
                Gesture::Idle
            }
        };
        tracing::debug!(gesture = ?self.gesture, "gesture started");
        Ok(())
    }

    /// Apply the active gesture for a pointer now at `at`.
    ///
    /// If the clip has disappeared the gesture is abandoned and the error
    /// returned.
    pub fn pointer_move(&mut self, store: &mut ClipStore, at: Point) -> Result<()> {
        let result = match self.gesture {
            Gesture::Idle => Ok(()),
            Gesture::Dragging { clip_id, origin, start } => {
                let moved = geometry::drag(start, at.delta_from(origin));
                store.update_position(clip_id, moved.position)
            }
            Gesture::Resizing {
                clip_id,
                direction,
                origin,
                start,
            } => {
                let resized = geometry::resize(start, at.delta_from(origin), direction, self.canvas_min_size);
                store
                    .update_size(clip_id, resized.size)
                    .and_then(|()| store.update_position(clip_id, resized.position))
            }
            Gesture::Rescheduling {
                clip_id,
                origin,
                track_width,
                start,
            } => {
                let delta_ratio = (at.x - origin.x) / track_width;
                store.update_time_window(clip_id, timeline::reschedule(start, delta_ratio))
            }
        };
        if result.is_err() {
            self.gesture = Gesture::Idle;
        }
        result
    }

    pub fn pointer_up(&mut self) {
        if self.gesture != Gesture::Idle {
            tracing::debug!(gesture = ?self.gesture, "gesture ended");
        }
        self.gesture = Gesture::Idle;
    }

    /// Drop the gesture if it targets `clip_id`.
    pub fn forget(&mut self, clip_id: ClipId) {
        if self.gesture.clip_id() == Some(clip_id) {
            self.gesture = Gesture::Idle;
        }
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    pub fn canvas_min_size(&self) -> f64 {
        self.canvas_min_size
    }
}
