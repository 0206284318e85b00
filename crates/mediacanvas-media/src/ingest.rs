use mediacanvas_core::clip::Clip;
use mediacanvas_core::config::EditorConfig;
use mediacanvas_core::error::Result;
use mediacanvas_core::geometry::Size;
use mediacanvas_core::media::{MediaFile, MediaKind, ObjectUrls};
use mediacanvas_core::timeline::{TimeWindow, TimelinePosition};

/// Size for a new image clip: the configured width, with the height
/// following the natural aspect ratio. Never below the form floor.
pub fn image_clip_size(natural: (u32, u32), config: &EditorConfig) -> Size {
    let (natural_width, natural_height) = natural;
    let aspect = natural_width as f64 / natural_height as f64;
    let width = config.default_image_width;
    Size::new(
        width.max(config.form_min_size),
        (width / aspect).max(config.form_min_size),
    )
}

/// Size for a new clip. Images need their probed natural size; videos
/// without one use the configured default.
pub fn initial_size(kind: MediaKind, natural: Option<(u32, u32)>, config: &EditorConfig) -> Size {
    match (kind, natural) {
        (MediaKind::Image, Some(natural)) => image_clip_size(natural, config),
        _ => config.default_video_size,
    }
}

/// Create a clip for an accepted file, minting its display URL.
///
/// The clip sits at the canvas origin and is scheduled from zero for the
/// configured default duration.
pub fn build_clip(
    file: MediaFile,
    kind: MediaKind,
    size: Size,
    urls: &ObjectUrls,
    config: &EditorConfig,
) -> Result<Clip> {
    let window = TimeWindow::new(
        TimelinePosition::zero(),
        TimelinePosition::from_secs_f64(config.default_clip_secs),
    )?;
    let url = urls.create(&file);
    Ok(Clip::new(file, url, kind, size, window))
}
