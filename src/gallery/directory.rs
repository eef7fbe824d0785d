// SPDX-License-Identifier: MPL-2.0
//! Directory-backed gallery.
//!
//! Scans a directory for supported image files and sorts them according to
//! the configured sort order. Subdirectories are not traversed.

use super::{GalleryEntry, GallerySource, ImageSource};
use crate::config::SortOrder;
use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A gallery made of every supported image in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryGallery {
    directory: PathBuf,
    sort_order: SortOrder,
}

impl DirectoryGallery {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>, sort_order: SortOrder) -> Self {
        Self {
            directory: directory.into(),
            sort_order,
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl GallerySource for DirectoryGallery {
    fn entries(&self) -> Result<Vec<GalleryEntry>> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && media::is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, self.sort_order);
        tracing::debug!(
            directory = %self.directory.display(),
            count = image_files.len(),
            "scanned gallery directory"
        );

        Ok(image_files
            .into_iter()
            .map(|path| GalleryEntry::new(ImageSource::from(path)))
            .collect())
    }
}

/// Sorts image paths according to the specified sort order.
fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| {
                path.metadata()
                    .and_then(|m| m.created())
                    .unwrap_or(SystemTime::UNIX_EPOCH)
            });
        }
    }
}
