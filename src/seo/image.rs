//! Image identifier resolution.
//!
//! Uploaded media is often referenced through a resized variant
//! (`photo-300x200.jpg`) while the media library records the original
//! upload (`photo.jpg`) as its canonical URL. Resolution strips the size
//! suffix and looks the canonical URL up in a [`MediaIndex`].

use crate::config::ConfigError;
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Media library identifier, numeric or textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Number(i64),
    Text(String),
}

impl ImageId {
    /// `0`, `""` and `"0"` are treated as "no identifier".
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Text(s) => s.is_empty() || s == "0",
        }
    }
}

impl From<ImageId> for Value {
    fn from(id: ImageId) -> Self {
        match id {
            ImageId::Number(n) => Value::from(n),
            ImageId::Text(s) => Value::from(s),
        }
    }
}

/// Exact-match lookup of a canonical media URL.
pub trait ImageLookup {
    fn find_by_canonical_url(&self, url: &str) -> Option<ImageId>;
}

/// Closures work as ad-hoc lookups.
impl<F> ImageLookup for F
where
    F: Fn(&str) -> Option<ImageId>,
{
    fn find_by_canonical_url(&self, url: &str) -> Option<ImageId> {
        self(url)
    }
}

/// Strip a `-<w>x<h>` size suffix sitting right before an image extension.
pub fn strip_size_suffix(url: &str) -> Cow<'_, str> {
    static RE_SIZE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)-[0-9]+x[0-9]+(\.(?:jpg|jpeg|png|gif))$").unwrap()
    });

    RE_SIZE_SUFFIX.replace(url, "$1")
}

/// Resolve the media identifier behind a (possibly resized) image URL.
pub fn resolve_image_id(url: &str, lookup: &impl ImageLookup) -> Option<ImageId> {
    let canonical = strip_size_suffix(url);
    let id = lookup.find_by_canonical_url(&canonical);
    crate::debug!("options"; "image `{}` -> `{}`: {:?}", url, canonical, id);
    id
}

// ============================================================================
// MediaIndex
// ============================================================================

/// Canonical URL → identifier table.
///
/// ```toml
/// [images]
/// "https://example.com/uploads/photo.jpg" = 42
/// "https://example.com/uploads/logo.png" = "logo-7"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaIndex {
    #[serde(default)]
    images: FxHashMap<String, ImageId>,
}

impl MediaIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an index from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Ok(toml::from_str(&content)?)
    }

    pub fn insert(&mut self, canonical_url: impl Into<String>, id: ImageId) {
        self.images.insert(canonical_url.into(), id);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }
}

impl ImageLookup for MediaIndex {
    fn find_by_canonical_url(&self, url: &str) -> Option<ImageId> {
        self.images.get(url).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_size_suffix() {
        assert_eq!(strip_size_suffix("photo-300x200.jpg"), "photo.jpg");
        assert_eq!(
            strip_size_suffix("https://example.com/a/b-1024x768.jpeg"),
            "https://example.com/a/b.jpeg"
        );
        assert_eq!(strip_size_suffix("IMG-10X20.PNG"), "IMG.PNG");
        assert_eq!(strip_size_suffix("anim-1x1.gif"), "anim.gif");
    }

    #[test]
    fn test_strip_size_suffix_leaves_other_urls() {
        // No suffix, unsupported extension, suffix not before extension
        assert_eq!(strip_size_suffix("photo.jpg"), "photo.jpg");
        assert_eq!(strip_size_suffix("photo-300x200.webp"), "photo-300x200.webp");
        assert_eq!(strip_size_suffix("photo-300x200-a.jpg"), "photo-300x200-a.jpg");
        assert_eq!(strip_size_suffix("photo-300x.jpg"), "photo-300x.jpg");
        assert!(matches!(strip_size_suffix("photo.jpg"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_resolve_resized_variant() {
        let mut index = MediaIndex::new();
        index.insert("photo.jpg", ImageId::Number(42));

        assert_eq!(
            resolve_image_id("photo-300x200.jpg", &index),
            Some(ImageId::Number(42))
        );
        assert_eq!(resolve_image_id("photo.jpg", &index), Some(ImageId::Number(42)));
        assert_eq!(resolve_image_id("other.jpg", &index), None);
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |url: &str| (url == "a.png").then(|| ImageId::Text("9".into()));
        assert_eq!(
            resolve_image_id("a-5x5.png", &lookup),
            Some(ImageId::Text("9".into()))
        );
    }

    #[test]
    fn test_image_id_emptiness() {
        assert!(ImageId::Number(0).is_empty());
        assert!(ImageId::Text(String::new()).is_empty());
        assert!(ImageId::Text("0".into()).is_empty());
        assert!(!ImageId::Number(42).is_empty());
        assert!(!ImageId::Text("42".into()).is_empty());
    }

    #[test]
    fn test_load_media_index() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media.toml");
        fs::write(
            &path,
            "[images]\n\"https://example.com/photo.jpg\" = 42\n\"https://example.com/logo.png\" = \"logo-7\"\n",
        )
        .unwrap();

        let index = MediaIndex::load(&path).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.find_by_canonical_url("https://example.com/logo.png"),
            Some(ImageId::Text("logo-7".into()))
        );
    }
}
