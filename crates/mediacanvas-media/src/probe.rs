use std::path::Path;

use crate::error::{MediaError, Result};

/// Read an image's natural `(width, height)` from its header without
/// decoding the pixels.
pub fn natural_size(path: &Path) -> Result<(u32, u32)> {
    let (width, height) = image::ImageReader::open(path)?
        .with_guessed_format()?
        .into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(MediaError::Probe(format!(
            "{}: image has no area ({width}x{height})",
            path.display()
        )));
    }
    tracing::debug!(path = %path.display(), width, height, "probed image");
    Ok((width, height))
}
