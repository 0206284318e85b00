use std::path::Path;

use mediacanvas_core::media::{MediaFile, MediaKind};

use crate::error::{MediaError, Result};

/// Decide how a file is placed from its declared media type.
///
/// Only `image/*` and `video/*` are accepted; everything else is reported as
/// unsupported rather than guessed at.
pub fn classify(file: &MediaFile) -> Result<MediaKind> {
    let mime = file.mime.trim().to_ascii_lowercase();
    if mime.starts_with("image/") {
        Ok(MediaKind::Image)
    } else if mime.starts_with("video/") {
        Ok(MediaKind::Video)
    } else {
        Err(MediaError::Unsupported {
            name: file.name.clone(),
            mime: file.mime.clone(),
        })
    }
}

/// Build a [`MediaFile`] for a path on disk, guessing the media type from
/// its extension.
pub fn media_file_from_path(path: &Path) -> MediaFile {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".into());
    MediaFile::new(name, mime.essence_str(), path)
}
