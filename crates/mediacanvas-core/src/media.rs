use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("image"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

/// A file handed to the editor by drag-drop or the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub mime: String,
    pub path: PathBuf,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            path: path.into(),
        }
    }
}

/// A revocable URL the rendering surface uses to display a clip's media.
///
/// Deliberately not `Clone`: the clip holding it is its only owner.
#[derive(Debug, PartialEq, Eq)]
pub struct DisplayUrl(String);

impl DisplayUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry of live display URLs.
///
/// Cloning yields another handle onto the same registry.
#[derive(Debug, Clone, Default)]
pub struct ObjectUrls {
    live: Arc<Mutex<HashSet<String>>>,
}

impl ObjectUrls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, file: &MediaFile) -> DisplayUrl {
        let url = format!("blob:mediacanvas/{}", Uuid::new_v4());
        self.lock().insert(url.clone());
        tracing::debug!(%url, file = %file.name, "display url created");
        DisplayUrl(url)
    }

    /// Release `url`. Revoking an unknown or already revoked URL is a no-op
    /// and returns `false`.
    pub fn revoke(&self, url: &DisplayUrl) -> bool {
        let removed = self.lock().remove(url.as_str());
        if removed {
            tracing::debug!(%url, "display url revoked");
        } else {
            tracing::debug!(%url, "display url already revoked");
        }
        removed
    }

    pub fn is_live(&self, url: &DisplayUrl) -> bool {
        self.lock().contains(url.as_str())
    }

    pub fn live_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        // The set is never left half-updated, so a poisoned lock is still usable.
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoke_is_idempotent() {
        let urls = ObjectUrls::new();
        let file = MediaFile::new("a.png", "image/png", "/tmp/a.png");
        let url = urls.create(&file);
        assert!(urls.is_live(&url));
        assert!(urls.revoke(&url));
        assert!(!urls.revoke(&url));
        assert_eq!(urls.live_count(), 0);
    }

    #[test]
    fn test_urls_are_unique() {
        let urls = ObjectUrls::new();
        let file = MediaFile::new("a.png", "image/png", "/tmp/a.png");
        let a = urls.create(&file);
        let b = urls.create(&file);
        assert_ne!(a, b);
        assert_eq!(urls.live_count(), 2);
    }
}
