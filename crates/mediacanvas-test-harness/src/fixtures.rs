use std::path::{Path, PathBuf};

/// Write a solid-colour PNG of the given size. Returns its path.
pub fn generate_test_png(output_dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let output_path = output_dir.join(format!("{name}.png"));
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 90, 255]));
    img.save(&output_path).expect("failed to write test png");
    assert!(output_path.exists(), "test image was not created: {name}");
    output_path
}

/// Write bytes that are not a decodable image but carry an image extension.
pub fn generate_corrupt_png(output_dir: &Path, name: &str) -> PathBuf {
    let output_path = output_dir.join(format!("{name}.png"));
    std::fs::write(&output_path, b"definitely not a png").expect("failed to write corrupt png");
    output_path
}

/// Get a temporary directory for test fixtures that persists for the test run.
pub fn fixture_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("failed to create temp dir for fixtures")
}
