use mediacanvas_media::error::MediaError;
use mediacanvas_media::probe;
use mediacanvas_test_harness::fixtures;

#[test]
fn test_probe_png_dimensions() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_test_png(dir.path(), "probe_wide", 800, 400);

    let (width, height) = probe::natural_size(&path).unwrap();
    assert_eq!(width, 800);
    assert_eq!(height, 400);
}

#[test]
fn test_probe_missing_file_is_io_error() {
    let dir = fixtures::fixture_dir();
    let result = probe::natural_size(&dir.path().join("nope.png"));
    assert!(matches!(result, Err(MediaError::Io(_))), "{result:?}");
}

#[test]
fn test_probe_corrupt_file_fails() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_corrupt_png(dir.path(), "broken");
    assert!(probe::natural_size(&path).is_err());
}
