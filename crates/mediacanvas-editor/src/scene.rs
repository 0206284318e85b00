//! Declarative description of what the rendering surface should draw.

use serde::Serialize;

use mediacanvas_core::clip::{Clip, ClipId};
use mediacanvas_core::clock::PlaybackClock;
use mediacanvas_core::geometry::{Placement, ResizeDirection};
use mediacanvas_core::media::MediaKind;
use mediacanvas_core::store::ClipStore;
use mediacanvas_core::timeline::{self, TIMELINE_DURATION, TimelinePosition, TrackSpan};

use crate::sidebar::SidebarForm;

pub const SELECTED_Z: u8 = 10;
pub const BASE_Z: u8 = 1;
pub const CORNER_RADIUS: f64 = 8.0;
pub const TIMELINE_LABEL_MAX: usize = 15;
pub const SIDEBAR_LABEL_MAX: usize = 20;
/// Seconds between labelled ruler marks.
pub const RULER_MAJOR_EVERY: u32 = 10;

/// Global look toggles. Only the selected clip is drawn with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayOptions {
    /// Percent, `0..=100`.
    pub opacity: u8,
    pub rotation_degrees: f64,
    pub round_corners: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            opacity: 100,
            rotation_degrees: 0.0,
            round_corners: false,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CanvasItem {
    pub clip_id: ClipId,
    pub kind: MediaKind,
    pub url: String,
    pub placement: Placement,
    pub z_index: u8,
    /// `0.0..=1.0`.
    pub opacity: f64,
    pub rotation_degrees: f64,
    pub corner_radius: f64,
    pub selected: bool,
    pub handles: Vec<ResizeDirection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineItem {
    pub clip_id: ClipId,
    pub label: String,
    pub span: TrackSpan,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RulerMark {
    pub seconds: u32,
    pub major: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SidebarView {
    pub clip_id: ClipId,
    pub title: &'static str,
    pub file_label: String,
    pub width: f64,
    pub height: f64,
    pub start: f64,
    pub end: f64,
    pub lock_aspect: bool,
    pub display: DisplayOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// Bottom to top.
    pub canvas: Vec<CanvasItem>,
    pub timeline: Vec<TimelineItem>,
    pub ruler: Vec<RulerMark>,
    pub playhead_ratio: f64,
    pub time_label: String,
    pub playing: bool,
    pub sidebar: Option<SidebarView>,
}

impl Scene {
    pub fn build(
        store: &ClipStore,
        clock: &PlaybackClock,
        display: &DisplayOptions,
        form: &SidebarForm,
    ) -> Self {
        let canvas = store
            .render_order()
            .into_iter()
            .map(|clip| canvas_item(clip, display))
            .collect();

        let timeline = store
            .clips()
            .iter()
            .map(|clip| TimelineItem {
                clip_id: clip.id,
                label: truncate_label(clip.name(), TIMELINE_LABEL_MAX),
                span: clip.window.track_span(),
                selected: clip.selected,
            })
            .collect();

        let sidebar = store.selected().map(|clip| SidebarView {
            clip_id: clip.id,
            title: match clip.kind {
                MediaKind::Image => "Edit Image",
                MediaKind::Video => "Edit Video",
            },
            file_label: truncate_label(clip.name(), SIDEBAR_LABEL_MAX),
            width: clip.size.width,
            height: clip.size.height,
            start: clip.window.start().as_secs_f64(),
            end: clip.window.end().as_secs_f64(),
            lock_aspect: form.lock_aspect(),
            display: *display,
        });

        Self {
            canvas,
            timeline,
            ruler: ruler_marks(),
            playhead_ratio: timeline::ratio(clock.current()),
            time_label: format!("{} / {}", format_time(clock.current()), format_time(TIMELINE_DURATION)),
            playing: clock.is_running(),
            sidebar,
        }
    }
}

fn canvas_item(clip: &Clip, display: &DisplayOptions) -> CanvasItem {
    let (z_index, opacity, rotation_degrees, corner_radius, handles) = if clip.selected {
        (
            SELECTED_Z,
            f64::from(display.opacity.min(100)) / 100.0,
            display.rotation_degrees,
            if display.round_corners { CORNER_RADIUS } else { 0.0 },
            ResizeDirection::ALL.to_vec(),
        )
    } else {
        (BASE_Z, 1.0, 0.0, 0.0, Vec::new())
    };
    CanvasItem {
        clip_id: clip.id,
        kind: clip.kind,
        url: clip.url.as_str().to_owned(),
        placement: clip.placement(),
        z_index,
        opacity,
        rotation_degrees,
        corner_radius,
        selected: clip.selected,
        handles,
    }
}

/// One mark per second, `0..=60`.
pub fn ruler_marks() -> Vec<RulerMark> {
    let total = (TIMELINE_DURATION.as_tenths() / 10) as u32;
    (0..=total)
        .map(|seconds| RulerMark {
            seconds,
            major: seconds % RULER_MAJOR_EVERY == 0,
        })
        .collect()
}

/// `MM:SS.t`
pub fn format_time(pos: TimelinePosition) -> String {
    let tenths = pos.as_tenths();
    let minutes = tenths / 600;
    let seconds = (tenths % 600) / 10;
    format!("{minutes:02}:{seconds:02}.{}", tenths % 10)
}

/// Cut `name` to `max` characters, marking the cut with `...`.
pub fn truncate_label(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_owned();
    }
    let mut label: String = name.chars().take(max).collect();
    label.push_str("...");
    label
}
