use std::path::PathBuf;

use mediacanvas_core::clip::{Clip, ClipId};
use mediacanvas_core::geometry::{Point, Size};
use mediacanvas_core::media::{MediaFile, MediaKind, ObjectUrls};
use mediacanvas_core::store::ClipStore;
use mediacanvas_core::timeline::TimeWindow;

/// Builder for test MediaFiles with sensible defaults.
pub struct MediaFileBuilder {
    name: String,
    mime: String,
    path: PathBuf,
}

impl MediaFileBuilder {
    pub fn image(name: &str) -> Self {
        Self {
            name: format!("{name}.png"),
            mime: "image/png".into(),
            path: PathBuf::from(format!("/test/{name}.png")),
        }
    }

    pub fn video(name: &str) -> Self {
        Self {
            name: format!("{name}.mp4"),
            mime: "video/mp4".into(),
            path: PathBuf::from(format!("/test/{name}.mp4")),
        }
    }

    pub fn mime(mut self, mime: &str) -> Self {
        self.mime = mime.into();
        self
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn build(self) -> MediaFile {
        MediaFile::new(self.name, self.mime, self.path)
    }
}

/// Builder for test Clips with sensible defaults.
pub struct ClipBuilder {
    name: String,
    kind: MediaKind,
    position: Point,
    size: Size,
    start_secs: f64,
    end_secs: f64,
}

impl ClipBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            kind: MediaKind::Image,
            position: Point::default(),
            size: Size::new(320.0, 180.0),
            start_secs: 0.0,
            end_secs: 1.0,
        }
    }

    pub fn video(mut self) -> Self {
        self.kind = MediaKind::Video;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn window(mut self, start_secs: f64, end_secs: f64) -> Self {
        self.start_secs = start_secs;
        self.end_secs = end_secs;
        self
    }

    pub fn build(self, urls: &ObjectUrls) -> Clip {
        let file = match self.kind {
            MediaKind::Image => MediaFileBuilder::image(&self.name).build(),
            MediaKind::Video => MediaFileBuilder::video(&self.name).build(),
        };
        let window = TimeWindow::from_secs(self.start_secs, self.end_secs)
            .expect("invalid time window in test builder");
        let url = urls.create(&file);
        let mut clip = Clip::new(file, url, self.kind, self.size, window);
        clip.position = self.position;
        clip
    }
}

/// Build a store pre-populated with clips, in insertion order.
pub struct StoreBuilder {
    min_size: f64,
    clips: Vec<ClipBuilder>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            min_size: 10.0,
            clips: Vec::new(),
        }
    }

    pub fn min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_clip(mut self, clip: ClipBuilder) -> Self {
        self.clips.push(clip);
        self
    }

    /// Returns the store, the URL registry it releases into, and the clip ids.
    pub fn build(self) -> (ClipStore, ObjectUrls, Vec<ClipId>) {
        let urls = ObjectUrls::new();
        let mut store = ClipStore::new(urls.clone(), self.min_size);
        let ids = self
            .clips
            .into_iter()
            .map(|builder| {
                store
                    .add(builder.build(&urls))
                    .expect("test builder produced an invalid clip")
            })
            .collect();
        (store, urls, ids)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
