use mediacanvas_core::clip::ClipId;
use mediacanvas_core::geometry::{Point, ResizeDirection};
use mediacanvas_core::media::MediaFile;
use mediacanvas_core::timeline::TimelinePosition;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    ClipBody(ClipId),
    ResizeHandle(ClipId, ResizeDirection),
    /// The clip's bar on the timeline track. `track_width` is the track's width in pixels.
    TimelineItem { clip_id: ClipId, track_width: f64 },
}

impl PointerTarget {
    pub fn clip_id(&self) -> ClipId {
        match self {
            PointerTarget::ClipBody(id) | PointerTarget::ResizeHandle(id, _) => *id,
            PointerTarget::TimelineItem { clip_id, .. } => *clip_id,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Ingestion
    FilesDropped(Vec<MediaFile>),
    ImageProbed {
        file: MediaFile,
        result: Result<(u32, u32), String>,
    },

    // Selection
    SelectClip(ClipId),
    DeleteClip(ClipId),
    DeleteSelected,

    // Pointer
    PointerDown { target: PointerTarget, at: Point },
    PointerMoved(Point),
    PointerUp,

    // Sidebar
    WidthInput(String),
    HeightInput(String),
    StartInput(String),
    EndInput(String),
    SetAspectLock(bool),
    OpacityChanged(u8),
    RotationInput(String),
    SetRoundCorners(bool),

    // Playback
    Play,
    Pause,
    TogglePlayback,
    SeekTo(TimelinePosition),
    Tick { generation: u64 },

    // Session
    Dispose,
}
