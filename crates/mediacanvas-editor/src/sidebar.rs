use mediacanvas_core::clip::{Clip, ClipId};

/// Editing state of the sidebar form for the selected clip.
#[derive(Debug, Clone)]
pub struct SidebarForm {
    lock_aspect: bool,
    /// Aspect ratio captured when editing of a clip began.
    captured: Option<(ClipId, f64)>,
}

impl Default for SidebarForm {
    fn default() -> Self {
        Self {
            lock_aspect: true,
            captured: None,
        }
    }
}

impl SidebarForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock_aspect(&self) -> bool {
        self.lock_aspect
    }

    /// Turning the lock back on recaptures the ratio at the next edit.
    pub fn set_lock_aspect(&mut self, locked: bool) {
        self.lock_aspect = locked;
        self.captured = None;
    }

    /// Ratio that width/height edits of `clip` must preserve, if locked.
    pub fn aspect_for(&mut self, clip: &Clip) -> Option<f64> {
        if !self.lock_aspect {
            return None;
        }
        match self.captured {
            Some((id, aspect)) if id == clip.id => Some(aspect),
            _ => {
                let aspect = clip.size.aspect_ratio();
                self.captured = Some((clip.id, aspect));
                Some(aspect)
            }
        }
    }

    pub fn end_editing(&mut self) {
        self.captured = None;
    }
}

/// Parse a numeric field. Accepts an optional trailing `s` unit. Anything
/// that is not a finite number yields `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('s').unwrap_or(trimmed).trim_end();
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a rotation such as `15°` or `-90`.
pub fn parse_degrees(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('°').unwrap_or(trimmed).trim_end();
    parse_number(trimmed)
}
