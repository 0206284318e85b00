use uuid::Uuid;

use crate::geometry::{Placement, Point, Size};
use crate::media::{DisplayUrl, MediaFile, MediaKind};
use crate::timeline::TimeWindow;

pub type ClipId = Uuid;

/// One media item placed on the canvas and scheduled on the timeline.
#[derive(Debug)]
pub struct Clip {
    pub id: ClipId,
    pub file: MediaFile,
    /// Released by the store when the clip is deleted or the store is torn down.
    pub url: DisplayUrl,
    pub kind: MediaKind,
    pub position: Point,
    pub size: Size,
    pub window: TimeWindow,
    /// Cached `window.contains(playhead)`, maintained by the store.
    pub visible: bool,
    pub selected: bool,
}

impl Clip {
    pub fn new(file: MediaFile, url: DisplayUrl, kind: MediaKind, size: Size, window: TimeWindow) -> Self {
        Self {
            id: Uuid::new_v4(),
            file,
            url,
            kind,
            position: Point::default(),
            size,
            window,
            visible: false,
            selected: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.file.name
    }

    pub fn placement(&self) -> Placement {
        Placement {
            position: self.position,
            size: self.size,
        }
    }
}
