// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::ImageError;
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// Decoded image ready for display.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width divided by height, or `None` for degenerate images.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
/// SVG files are rasterized with resvg.
///
/// # Errors
///
/// Returns [`ImageError::NotFound`] or [`ImageError::Io`] when the file cannot be read,
/// [`ImageError::Decode`] for invalid raster data and [`ImageError::Svg`] for SVG failures.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData, ImageError> {
    load_with_max_dimension(path.as_ref(), None)
}

/// Load an image scaled down so neither side exceeds `max_dimension`.
///
/// Used for gallery thumbnails. Images already smaller are left untouched.
///
/// # Errors
///
/// Same as [`load_image`].
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_dimension: u32) -> Result<ImageData, ImageError> {
    load_with_max_dimension(path.as_ref(), Some(max_dimension))
}

fn load_with_max_dimension(path: &Path, max_dimension: Option<u32>) -> Result<ImageData, ImageError> {
    let bytes = fs::read(path).map_err(|e| ImageError::from_io(&e))?;

    let img = if is_svg(path) {
        rasterize_svg(&bytes)?
    } else {
        image_rs::load_from_memory(&bytes).map_err(|e| ImageError::Decode(e.to_string()))?
    };

    let img = match max_dimension {
        Some(max) if img.width() > max || img.height() > max => img.thumbnail(max, max),
        _ => img,
    };

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn rasterize_svg(svg_data: &[u8]) -> Result<image_rs::DynamicImage, ImageError> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| ImageError::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(ImageError::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ImageError::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let rgba = image_rs::RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| ImageError::Svg("SVG pixmap has unexpected size".into()))?;

    Ok(image_rs::DynamicImage::ImageRgba8(rgba))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.aspect_ratio(), Some(2.0));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn load_missing_image_returns_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        assert_eq!(
            load_image(&missing_path).map(|_| ()),
            Err(ImageError::NotFound)
        );
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(ImageError::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path) {
            Err(ImageError::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn thumbnail_is_bounded_by_max_dimension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");
        RgbaImage::from_pixel(400, 100, Rgba([0, 255, 0, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_thumbnail(&image_path, 200).expect("thumbnail should load");
        assert_eq!(data.width, 200);
        assert_eq!(data.height, 50);
    }

    #[test]
    fn small_image_is_not_upscaled_for_thumbnail() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("small.png");
        RgbaImage::from_pixel(10, 20, Rgba([0, 0, 255, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_thumbnail(&image_path, 200).expect("thumbnail should load");
        assert_eq!((data.width, data.height), (10, 20));
    }
}
