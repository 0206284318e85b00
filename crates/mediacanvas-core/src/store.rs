use crate::clip::{Clip, ClipId};
use crate::error::{CoreError, Result};
use crate::geometry::{Point, Size};
use crate::media::ObjectUrls;
use crate::timeline::{TimeWindow, TimelinePosition};

/// The authoritative, ordered list of placed clips.
///
/// Order is creation order and doubles as z-order. At most one clip is
/// selected, and every clip's `visible` flag agrees with the last playhead
/// passed to [`ClipStore::recompute_visibility`].
#[derive(Debug)]
pub struct ClipStore {
    clips: Vec<Clip>,
    playhead: TimelinePosition,
    urls: ObjectUrls,
    min_size: f64,
}

impl ClipStore {
    /// `min_size` is the absolute floor for either dimension of any clip.
    pub fn new(urls: ObjectUrls, min_size: f64) -> Self {
        Self {
            clips: Vec::new(),
            playhead: TimelinePosition::zero(),
            urls,
            min_size,
        }
    }

    /// Append `clip` on top of the stack and make it the only selected clip.
    ///
    /// The store takes ownership of the clip's display URL either way: a
    /// rejected clip has its URL released before the error is returned.
    pub fn add(&mut self, mut clip: Clip) -> Result<ClipId> {
        let checked = if self.get(clip.id).is_some() {
            Err(CoreError::DuplicateClip(clip.id))
        } else {
            self.check_size(clip.size)
        };
        if let Err(e) = checked {
            self.urls.revoke(&clip.url);
            return Err(e);
        }

        for existing in &mut self.clips {
            existing.selected = false;
        }
        clip.selected = true;
        clip.visible = clip.window.contains(self.playhead);

        let id = clip.id;
        tracing::info!(%id, name = clip.name(), kind = %clip.kind, "clip added");
        self.clips.push(clip);
        self.debug_check();
        Ok(id)
    }

    pub fn select(&mut self, id: ClipId) -> Result<()> {
        if self.get(id).is_none() {
            return Err(CoreError::ClipNotFound(id));
        }
        for clip in &mut self.clips {
            clip.selected = clip.id == id;
        }
        tracing::debug!(%id, "clip selected");
        self.debug_check();
        Ok(())
    }

    pub fn update_position(&mut self, id: ClipId, position: Point) -> Result<()> {
        self.get_mut(id)?.position = position;
        Ok(())
    }

    pub fn update_size(&mut self, id: ClipId, size: Size) -> Result<()> {
        self.check_size(size)?;
        self.get_mut(id)?.size = size;
        Ok(())
    }

    /// Reschedule a clip, refreshing its visibility against the current playhead.
    pub fn update_time_window(&mut self, id: ClipId, window: TimeWindow) -> Result<()> {
        let playhead = self.playhead;
        let clip = self.get_mut(id)?;
        clip.window = window;
        clip.visible = window.contains(playhead);
        Ok(())
    }

    /// Remove a clip and release its display URL.
    ///
    /// If the removed clip was selected, the last remaining clip in
    /// collection order becomes selected.
    pub fn delete(&mut self, id: ClipId) -> Result<()> {
        let idx = self
            .clips
            .iter()
            .position(|c| c.id == id)
            .ok_or(CoreError::ClipNotFound(id))?;
        let removed = self.clips.remove(idx);
        self.urls.revoke(&removed.url);
        tracing::info!(%id, name = removed.name(), "clip deleted");

        if removed.selected {
            if let Some(last) = self.clips.last_mut() {
                last.selected = true;
                tracing::debug!(id = %last.id, "selection moved to last clip");
            }
        }
        self.debug_check();
        Ok(())
    }

    pub fn recompute_visibility(&mut self, playhead: TimelinePosition) {
        self.playhead = playhead;
        for clip in &mut self.clips {
            clip.visible = clip.window.contains(playhead);
        }
    }

    /// Release every clip's display URL and empty the store.
    pub fn teardown(&mut self) {
        if self.clips.is_empty() {
            return;
        }
        tracing::debug!(count = self.clips.len(), "tearing down clip store");
        for clip in self.clips.drain(..) {
            self.urls.revoke(&clip.url);
        }
    }

    pub fn playhead(&self) -> TimelinePosition {
        self.playhead
    }

    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    pub fn get(&self, id: ClipId) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    pub fn selected(&self) -> Option<&Clip> {
        self.clips.iter().find(|c| c.selected)
    }

    /// Visible clips bottom to top: collection order, except that the
    /// selected clip is always drawn last.
    pub fn render_order(&self) -> Vec<&Clip> {
        let (mut order, selected): (Vec<&Clip>, Vec<&Clip>) = self
            .clips
            .iter()
            .filter(|c| c.visible)
            .partition(|c| !c.selected);
        order.extend(selected);
        order
    }

    pub fn urls(&self) -> &ObjectUrls {
        &self.urls
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    fn get_mut(&mut self, id: ClipId) -> Result<&mut Clip> {
        self.clips
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CoreError::ClipNotFound(id))
    }

    fn check_size(&self, size: Size) -> Result<()> {
        if size.fits_minimum(self.min_size) && size.width.is_finite() && size.height.is_finite() {
            Ok(())
        } else {
            Err(CoreError::SizeBelowMinimum {
                width: size.width,
                height: size.height,
                min: self.min_size,
            })
        }
    }

    fn debug_check(&self) {
        debug_assert!(
            self.clips.iter().filter(|c| c.selected).count() <= 1,
            "more than one clip selected"
        );
    }
}

impl Drop for ClipStore {
    fn drop(&mut self) {
        self.teardown();
    }
}
