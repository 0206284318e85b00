use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::geometry::{Size, SizeBounds};

/// Tunables for an editor session. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Smallest width/height reachable by dragging a resize handle.
    pub canvas_min_size: f64,
    /// Smallest width/height accepted from the numeric fields. Also the
    /// absolute floor the store enforces.
    pub form_min_size: f64,
    pub form_max_size: f64,
    /// Width given to new image clips; height follows the natural aspect ratio.
    pub default_image_width: f64,
    pub default_video_size: Size,
    /// Length of the time window new clips start with.
    pub default_clip_secs: f64,
    /// Real time between playback ticks.
    pub tick_interval_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_min_size: 50.0,
            form_min_size: 10.0,
            form_max_size: 1000.0,
            default_image_width: 320.0,
            default_video_size: Size::new(320.0, 180.0),
            default_clip_secs: 1.0,
            tick_interval_ms: 100,
        }
    }
}

impl EditorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.form_min_size > 0.0) {
            return Err(CoreError::InvalidConfig(format!(
                "form_min_size must be positive, got {}",
                self.form_min_size
            )));
        }
        if self.canvas_min_size < self.form_min_size {
            return Err(CoreError::InvalidConfig(format!(
                "canvas_min_size {} is below form_min_size {}",
                self.canvas_min_size, self.form_min_size
            )));
        }
        if self.form_max_size < self.form_min_size {
            return Err(CoreError::InvalidConfig(format!(
                "form_max_size {} is below form_min_size {}",
                self.form_max_size, self.form_min_size
            )));
        }
        if self.default_image_width < self.form_min_size
            || !self.default_video_size.fits_minimum(self.form_min_size)
        {
            return Err(CoreError::InvalidConfig(
                "default clip sizes must respect form_min_size".into(),
            ));
        }
        if !(0.1..=60.0).contains(&self.default_clip_secs) {
            return Err(CoreError::InvalidConfig(format!(
                "default_clip_secs must be within 0.1..=60, got {}",
                self.default_clip_secs
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::InvalidConfig("tick_interval_ms must be non-zero".into()));
        }
        Ok(())
    }

    pub fn form_bounds(&self) -> SizeBounds {
        SizeBounds {
            min: self.form_min_size,
            max: self.form_max_size,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
