// SPDX-License-Identifier: MPL-2.0
//! Manifest-backed gallery.
//!
//! A manifest is a TOML file listing gallery images in display order:
//!
//! ```toml
//! [[image]]
//! source = "photos/harbour.jpg"
//! label = "Harbour at dawn"
//!
//! [[image]]
//! source = "/srv/shared/lighthouse.png"
//! ```
//!
//! Relative sources resolve against the directory containing the manifest.

use super::{GalleryEntry, GallerySource, ImageSource};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "image")]
    images: Vec<ManifestImage>,
}

#[derive(Debug, Deserialize)]
struct ManifestImage {
    source: PathBuf,
    #[serde(default)]
    label: Option<String>,
}

/// A gallery described by a TOML manifest file.
#[derive(Debug, Clone)]
pub struct ManifestGallery {
    path: PathBuf,
}

impl ManifestGallery {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns true when `path` looks like a gallery manifest.
    #[must_use]
    pub fn is_manifest(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }

    /// Parses manifest content, resolving relative sources against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] when the content is not a valid manifest.
    pub fn parse(content: &str, base_dir: &Path) -> Result<Vec<GalleryEntry>> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

        Ok(manifest
            .images
            .into_iter()
            .map(|image| {
                let path = if image.source.is_absolute() {
                    image.source
                } else {
                    base_dir.join(image.source)
                };
                GalleryEntry {
                    source: ImageSource::from(path),
                    label: image.label,
                }
            })
            .collect())
    }
}

impl GallerySource for ManifestGallery {
    fn entries(&self) -> Result<Vec<GalleryEntry>> {
        let content = fs::read_to_string(&self.path)?;
        let base_dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let entries = Self::parse(&content, base_dir)?;

        tracing::debug!(
            manifest = %self.path.display(),
            count = entries.len(),
            "read gallery manifest"
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_resolves_relative_sources() {
        let content = r#"
            [[image]]
            source = "photos/a.jpg"
            label = "First"

            [[image]]
            source = "/abs/b.png"
        "#;

        let entries = ManifestGallery::parse(content, Path::new("/gallery")).expect("parse");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source.path(), Path::new("/gallery/photos/a.jpg"));
        assert_eq!(entries[0].label.as_deref(), Some("First"));
        assert_eq!(entries[1].source.path(), Path::new("/abs/b.png"));
        assert!(entries[1].label.is_none());
    }

    #[test]
    fn parse_empty_manifest_yields_no_entries() {
        let entries = ManifestGallery::parse("", Path::new(".")).expect("parse");
        assert!(entries.is_empty());
    }

    #[test]
    fn parse_rejects_entry_without_source() {
        let content = "[[image]]\nlabel = \"orphan\"\n";
        match ManifestGallery::parse(content, Path::new(".")) {
            Err(Error::Manifest(message)) => assert!(!message.is_empty()),
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }

    #[test]
    fn entries_reads_manifest_from_disk() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let manifest_path = temp_dir.path().join("gallery.toml");
        fs::write(&manifest_path, "[[image]]\nsource = \"one.jpg\"\n").expect("write manifest");

        let entries = ManifestGallery::new(&manifest_path)
            .entries()
            .expect("manifest should load");

        assert_eq!(entries, vec![GalleryEntry::new(temp_dir.path().join("one.jpg"))]);
    }

    #[test]
    fn is_manifest_checks_extension() {
        assert!(ManifestGallery::is_manifest(Path::new("gallery.TOML")));
        assert!(!ManifestGallery::is_manifest(Path::new("photos")));
    }
}
