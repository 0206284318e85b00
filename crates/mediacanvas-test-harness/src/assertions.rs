use mediacanvas_core::store::ClipStore;
use mediacanvas_core::timeline::{MIN_WINDOW, TIMELINE_DURATION, TimelinePosition};

/// Assert that at most one clip is selected.
pub fn assert_single_selection(store: &ClipStore) {
    let selected: Vec<_> = store.clips().iter().filter(|c| c.selected).map(|c| c.id).collect();
    assert!(
        selected.len() <= 1,
        "expected at most one selected clip, found {}: {:?}",
        selected.len(),
        selected
    );
}

/// Assert every clip's time window lies inside the timeline with the minimum span.
pub fn assert_windows_valid(store: &ClipStore) {
    for clip in store.clips() {
        let w = clip.window;
        assert!(
            w.start() < w.end() && w.end() <= TIMELINE_DURATION,
            "clip {} has window {:?} outside the timeline",
            clip.id,
            w
        );
        assert!(
            w.duration() >= MIN_WINDOW,
            "clip {} has window {:?} shorter than {}",
            clip.id,
            w,
            MIN_WINDOW
        );
    }
}

/// Assert both dimensions of every clip are at least `min`.
pub fn assert_min_size(store: &ClipStore, min: f64) {
    for clip in store.clips() {
        assert!(
            clip.size.fits_minimum(min),
            "clip {} has size {}x{}, below {min}",
            clip.id,
            clip.size.width,
            clip.size.height
        );
    }
}

/// Assert every cached `visible` flag matches membership of `playhead` in the clip's window.
pub fn assert_visibility_consistent(store: &ClipStore, playhead: TimelinePosition) {
    for clip in store.clips() {
        assert_eq!(
            clip.visible,
            clip.window.contains(playhead),
            "clip {} visibility {} disagrees with window {:?} at playhead {}",
            clip.id,
            clip.visible,
            clip.window,
            playhead
        );
    }
}
