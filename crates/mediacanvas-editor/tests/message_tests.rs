use mediacanvas_core::clip::ClipId;
use mediacanvas_core::config::EditorConfig;
use mediacanvas_core::geometry::{Point, ResizeDirection, Size};
use mediacanvas_core::timeline::TimelinePosition;
use mediacanvas_editor::app::Editor;
use mediacanvas_editor::message::{Message, PointerTarget};
use mediacanvas_test_harness::assertions::{
    assert_min_size, assert_single_selection, assert_visibility_consistent, assert_windows_valid,
};
use mediacanvas_test_harness::builders::MediaFileBuilder;
use mediacanvas_test_harness::fixtures::{fixture_dir, generate_corrupt_png, generate_test_png};

fn editor_with_videos(names: &[&str]) -> (Editor, Vec<ClipId>) {
    let mut editor = Editor::default();
    let files = names.iter().map(|n| MediaFileBuilder::video(n).build()).collect();
    editor.update(Message::FilesDropped(files));
    let ids = editor.store.clips().iter().map(|c| c.id).collect();
    (editor, ids)
}

fn assert_invariants(editor: &Editor) {
    assert_single_selection(&editor.store);
    assert_windows_valid(&editor.store);
    assert_min_size(&editor.store, editor.config.form_min_size);
    assert_visibility_consistent(&editor.store, editor.clock.current());
}

#[test]
fn test_video_drop_creates_selected_clip() {
    let (editor, ids) = editor_with_videos(&["intro"]);

    assert_eq!(ids.len(), 1);
    let clip = editor.store.get(ids[0]).unwrap();
    assert_eq!(clip.size, Size::new(320.0, 180.0));
    assert_eq!(clip.window.start(), TimelinePosition::zero());
    assert_eq!(clip.window.end(), TimelinePosition::from_tenths(10));
    assert!(clip.selected);
    assert!(clip.visible);
    assert!(editor.status_message.contains("Added"));
    assert_invariants(&editor);
}

#[test]
fn test_every_file_in_a_drop_is_ingested() {
    let (editor, ids) = editor_with_videos(&["a", "b", "c"]);

    assert_eq!(ids.len(), 3);
    assert_eq!(editor.store.selected().unwrap().id, ids[2]);
    assert_eq!(editor.urls().live_count(), 3);
    assert_invariants(&editor);
}

#[test]
fn test_unsupported_file_is_rejected() {
    let mut editor = Editor::default();
    let file = MediaFileBuilder::image("notes").mime("text/plain").build();

    editor.update(Message::FilesDropped(vec![file]));

    assert!(editor.store.is_empty());
    assert_eq!(editor.urls().live_count(), 0);
    assert!(editor.status_message.contains("text/plain"));
}

#[test]
fn test_headless_image_drop_probes_inline() {
    let dir = fixture_dir();
    let path = generate_test_png(dir.path(), "wide", 800, 400);
    let file = MediaFileBuilder::image("wide").path(&path).build();
    let mut editor = Editor::default();

    editor.update(Message::FilesDropped(vec![file]));

    assert_eq!(editor.store.len(), 1);
    assert_eq!(editor.store.clips()[0].size, Size::new(320.0, 160.0));
}

#[test]
fn test_corrupt_image_creates_no_clip() {
    let dir = fixture_dir();
    let path = generate_corrupt_png(dir.path(), "broken");
    let file = MediaFileBuilder::image("broken").path(&path).build();
    let mut editor = Editor::default();

    editor.update(Message::FilesDropped(vec![file]));

    assert!(editor.store.is_empty());
    assert_eq!(editor.urls().live_count(), 0);
    assert!(editor.status_message.contains("broken.png"));
}

#[test]
fn test_image_probed_message_sizes_from_natural_aspect() {
    let mut editor = Editor::default();
    let file = MediaFileBuilder::image("square").build();

    editor.update(Message::ImageProbed {
        file,
        result: Ok((500, 500)),
    });

    assert_eq!(editor.store.clips()[0].size, Size::new(320.0, 320.0));
}

#[test]
fn test_select_and_delete() {
    let (mut editor, ids) = editor_with_videos(&["a", "b", "c"]);

    editor.update(Message::SelectClip(ids[0]));
    assert_eq!(editor.store.selected().unwrap().id, ids[0]);

    editor.update(Message::DeleteSelected);
    assert_eq!(editor.store.len(), 2);
    assert_eq!(editor.store.selected().unwrap().id, ids[2]);
    assert_eq!(editor.urls().live_count(), 2);

    // Deleting an unselected clip leaves the selection alone.
    editor.update(Message::DeleteClip(ids[1]));
    assert_eq!(editor.store.selected().unwrap().id, ids[2]);
    assert_invariants(&editor);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let (mut editor, ids) = editor_with_videos(&["a"]);
    let unknown = uuid::Uuid::new_v4();

    editor.update(Message::SelectClip(unknown));
    editor.update(Message::DeleteClip(unknown));

    assert_eq!(editor.store.len(), 1);
    assert_eq!(editor.store.selected().unwrap().id, ids[0]);
}

#[test]
fn test_width_input_keeps_aspect_when_locked() {
    let (mut editor, ids) = editor_with_videos(&["a"]);

    editor.update(Message::WidthInput("640".into()));

    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(640.0, 360.0));
}

#[test]
fn test_aspect_is_captured_once_per_editing_session() {
    let (mut editor, ids) = editor_with_videos(&["a"]);

    // 16:9 captured on the first edit; a clamped intermediate must not skew it.
    editor.update(Message::WidthInput("5".into()));
    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(10.0, 10.0));

    editor.update(Message::WidthInput("160".into()));
    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(160.0, 90.0));
}

#[test]
fn test_height_input_without_lock() {
    let (mut editor, ids) = editor_with_videos(&["a"]);

    editor.update(Message::SetAspectLock(false));
    editor.update(Message::HeightInput("5000".into()));

    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(320.0, 1000.0));
}

#[test]
fn test_non_numeric_input_keeps_previous_value() {
    let (mut editor, ids) = editor_with_videos(&["a"]);

    editor.update(Message::WidthInput("wide".into()));
    editor.update(Message::HeightInput("".into()));
    editor.update(Message::StartInput("NaN".into()));
    editor.update(Message::EndInput("later".into()));

    let clip = editor.store.get(ids[0]).unwrap();
    assert_eq!(clip.size, Size::new(320.0, 180.0));
    assert_eq!(clip.window.end(), TimelinePosition::from_tenths(10));
}

#[test]
fn test_start_input_pushes_end() {
    let (mut editor, ids) = editor_with_videos(&["a"]);

    editor.update(Message::StartInput("5".into()));

    let clip = editor.store.get(ids[0]).unwrap();
    assert_eq!(clip.window.start(), TimelinePosition::from_tenths(50));
    assert_eq!(clip.window.end(), TimelinePosition::from_tenths(51));
    // Playhead is at zero, so the clip is no longer shown.
    assert!(!clip.visible);
    assert_invariants(&editor);
}

#[test]
fn test_end_input_pulls_start() {
    let (mut editor, ids) = editor_with_videos(&["a"]);
    editor.update(Message::EndInput("30s".into()));
    editor.update(Message::StartInput("20".into()));

    editor.update(Message::EndInput("10".into()));

    let clip = editor.store.get(ids[0]).unwrap();
    assert_eq!(clip.window.start(), TimelinePosition::from_tenths(99));
    assert_eq!(clip.window.end(), TimelinePosition::from_tenths(100));
    assert_invariants(&editor);
}

#[test]
fn test_display_toggles() {
    let (mut editor, _) = editor_with_videos(&["a"]);

    editor.update(Message::OpacityChanged(150));
    editor.update(Message::RotationInput("15°".into()));
    editor.update(Message::RotationInput("sideways".into()));
    editor.update(Message::SetRoundCorners(true));

    assert_eq!(editor.display.opacity, 100);
    assert_eq!(editor.display.rotation_degrees, 15.0);
    assert!(editor.display.round_corners);
}

#[test]
fn test_dispose_releases_urls_and_ignores_later_messages() {
    let (mut editor, _) = editor_with_videos(&["a", "b"]);
    assert_eq!(editor.urls().live_count(), 2);

    editor.update(Message::Dispose);
    assert!(editor.is_disposed());
    assert!(editor.store.is_empty());
    assert_eq!(editor.urls().live_count(), 0);

    editor.update(Message::FilesDropped(vec![MediaFileBuilder::video("late").build()]));
    editor.update(Message::ImageProbed {
        file: MediaFileBuilder::image("late").build(),
        result: Ok((10, 10)),
    });
    editor.update(Message::Play);

    assert!(editor.store.is_empty());
    assert_eq!(editor.urls().live_count(), 0);
    assert!(!editor.clock.is_running());
}

#[test]
fn test_canvas_resize_recaptures_aspect_for_next_size_edit() {
    let (mut editor, ids) = editor_with_videos(&["a"]);
    editor.update(Message::WidthInput("160".into()));
    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(160.0, 90.0));

    editor.update(Message::PointerDown {
        target: PointerTarget::ResizeHandle(ids[0], ResizeDirection::Bottom),
        at: Point::new(80.0, 90.0),
    });
    editor.update(Message::PointerMoved(Point::new(80.0, 160.0)));
    editor.update(Message::PointerUp);
    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(160.0, 160.0));

    editor.update(Message::WidthInput("160".into()));
    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(160.0, 160.0));

    editor.update(Message::WidthInput("200".into()));
    assert_eq!(editor.store.get(ids[0]).unwrap().size, Size::new(200.0, 200.0));
}

#[test]
fn test_try_new_rejects_invalid_config() {
    let config = EditorConfig {
        default_clip_secs: 1e18,
        ..EditorConfig::default()
    };
    assert!(Editor::try_new(config).is_err());

    let editor = Editor::try_new(EditorConfig::default()).unwrap();
    assert!(editor.store.is_empty());
}
