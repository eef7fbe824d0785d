// SPDX-License-Identifier: MPL-2.0
//! Gallery sources and the image descriptors captured from them.
//!
//! A gallery is read exactly once at startup. Each [`GallerySource`] yields an
//! ordered list of [`GalleryEntry`] values; [`describe`] turns them into the
//! immutable [`ImageDescriptor`] sequence the lightbox navigates.
//!
//! # Sources
//!
//! - [`DirectoryGallery`]: every supported image in a directory
//! - [`ManifestGallery`]: a TOML manifest listing images and their labels
//! - [`StaticGallery`]: an in-memory list

pub mod directory;
pub mod lazy;
pub mod manifest;

pub use directory::DirectoryGallery;
pub use lazy::{AspectClass, LazyThumbnails, ThumbnailState};
pub use manifest::ManifestGallery;

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of a gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageSource(PathBuf);

impl ImageSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// File name of the image, used in log output.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

/// One raw entry read from a gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub source: ImageSource,
    /// Human-readable label, if the gallery provides one.
    pub label: Option<String>,
}

impl GalleryEntry {
    #[must_use]
    pub fn new(source: impl Into<ImageSource>) -> Self {
        Self {
            source: source.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// An image the lightbox can display. Immutable once captured.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageDescriptor {
    pub source: ImageSource,
    pub alt_text: String,
}

/// Yields the ordered entries of a gallery.
pub trait GallerySource {
    /// Reads the gallery.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying directory or manifest cannot be read.
    fn entries(&self) -> Result<Vec<GalleryEntry>>;
}

/// A gallery held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticGallery {
    entries: Vec<GalleryEntry>,
}

impl StaticGallery {
    #[must_use]
    pub fn new(entries: Vec<GalleryEntry>) -> Self {
        Self { entries }
    }
}

impl GallerySource for StaticGallery {
    fn entries(&self) -> Result<Vec<GalleryEntry>> {
        Ok(self.entries.clone())
    }
}

/// Converts gallery entries into descriptors, preserving order.
///
/// Entries without a label (or with a blank one) get `default_alt(n)` where
/// `n` is the 1-based position in the gallery.
pub fn describe(
    entries: Vec<GalleryEntry>,
    default_alt: impl Fn(usize) -> String,
) -> Vec<ImageDescriptor> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let alt_text = entry
                .label
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| default_alt(index + 1));
            ImageDescriptor {
                source: entry.source,
                alt_text,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_keeps_order_and_labels() {
        let entries = vec![
            GalleryEntry::new("a.jpg").with_label("Sunset"),
            GalleryEntry::new("b.jpg"),
            GalleryEntry::new("c.jpg").with_label("   "),
        ];

        let descriptors = describe(entries, |n| format!("Gallery image {n}"));

        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors[0].alt_text, "Sunset");
        assert_eq!(descriptors[1].alt_text, "Gallery image 2");
        assert_eq!(descriptors[2].alt_text, "Gallery image 3");
        assert_eq!(descriptors[1].source, ImageSource::from("b.jpg"));
    }

    #[test]
    fn static_gallery_returns_its_entries() {
        let gallery = StaticGallery::new(vec![GalleryEntry::new("x.png")]);
        let entries = gallery.entries().expect("static gallery never fails");
        assert_eq!(entries, vec![GalleryEntry::new("x.png")]);
    }

    #[test]
    fn image_source_file_name() {
        let source = ImageSource::from("/photos/2024/beach.jpg");
        assert_eq!(source.file_name(), "beach.jpg");
        assert_eq!(source.to_string(), "/photos/2024/beach.jpg");
    }
}
