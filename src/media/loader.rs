// SPDX-License-Identifier: MPL-2.0
//! Image loading port and its filesystem adapter.
//!
//! The lightbox never decodes images itself: it asks the shell to load an
//! [`ImageSource`] and receives the outcome as a message. [`ImageLoader`] is
//! the seam between the two, so tests can substitute an in-memory loader.

use super::image::{load_image, load_thumbnail, ImageData};
use crate::error::ImageError;
use crate::gallery::ImageSource;
use std::sync::Arc;

/// Port for decoding gallery images.
///
/// Implementations must be `Send + Sync` because loads run on tokio's
/// blocking pool.
pub trait ImageLoader: Send + Sync {
    /// Decodes the full-size image at `source`.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageError`] when the image cannot be read or decoded.
    fn load(&self, source: &ImageSource) -> Result<ImageData, ImageError>;

    /// Decodes a reduced-size version of the image for the gallery grid.
    ///
    /// # Errors
    ///
    /// Returns an [`ImageError`] when the image cannot be read or decoded.
    fn load_thumbnail(&self, source: &ImageSource, max_dimension: u32)
        -> Result<ImageData, ImageError>;
}

/// Loads images from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, source: &ImageSource) -> Result<ImageData, ImageError> {
        if !super::is_supported_image(source.path()) {
            return Err(ImageError::UnsupportedFormat);
        }
        load_image(source.path())
    }

    fn load_thumbnail(
        &self,
        source: &ImageSource,
        max_dimension: u32,
    ) -> Result<ImageData, ImageError> {
        if !super::is_supported_image(source.path()) {
            return Err(ImageError::UnsupportedFormat);
        }
        load_thumbnail(source.path(), max_dimension)
    }
}

/// Shared handle to the loader used by the application.
pub type SharedLoader = Arc<dyn ImageLoader>;

/// Loads a full-size image off the UI thread.
///
/// Returns the source alongside the result so callers can match it back to
/// the request that produced it.
pub async fn load_async(
    loader: SharedLoader,
    source: ImageSource,
) -> (ImageSource, Result<ImageData, ImageError>) {
    let task_source = source.clone();
    let result = tokio::task::spawn_blocking(move || loader.load(&task_source))
        .await
        .unwrap_or_else(|e| Err(ImageError::Io(format!("Load task failed: {e}"))));

    (source, result)
}

/// Loads a thumbnail off the UI thread.
pub async fn load_thumbnail_async(
    loader: SharedLoader,
    source: ImageSource,
    max_dimension: u32,
) -> (ImageSource, Result<ImageData, ImageError>) {
    let task_source = source.clone();
    let result =
        tokio::task::spawn_blocking(move || loader.load_thumbnail(&task_source, max_dimension))
            .await
            .unwrap_or_else(|e| Err(ImageError::Io(format!("Thumbnail task failed: {e}"))));

    (source, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn fs_loader_rejects_unsupported_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "hello").expect("write");

        let result = FsImageLoader.load(&ImageSource::from(path));
        assert_eq!(result.map(|_| ()), Err(ImageError::UnsupportedFormat));
    }

    #[tokio::test]
    async fn load_async_returns_source_with_result() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("pixel.png");
        RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("write png");

        let loader: SharedLoader = Arc::new(FsImageLoader);
        let source = ImageSource::from(path);
        let (returned, result) = load_async(loader, source.clone()).await;

        assert_eq!(returned, source);
        let data = result.expect("image should decode");
        assert_eq!((data.width, data.height), (3, 3));
    }

    #[tokio::test]
    async fn load_thumbnail_async_reports_missing_file() {
        let loader: SharedLoader = Arc::new(FsImageLoader);
        let source = ImageSource::from("/definitely/not/here.jpg");
        let (_, result) = load_thumbnail_async(loader, source, 64).await;
        assert_eq!(result.map(|_| ()), Err(ImageError::NotFound));
    }
}
