// SPDX-License-Identifier: MPL-2.0
//! Image decoding for the gallery grid and the lightbox.
//!
//! - [`image`]: decoding raster and SVG files into displayable [`ImageData`]
//! - [`loader`]: the [`ImageLoader`] port, its filesystem adapter and async helpers

pub mod image;
pub mod loader;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, load_thumbnail, ImageData};
pub use loader::{FsImageLoader, ImageLoader, SharedLoader};

pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Checks if a file has a supported image extension (case-insensitive).
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("drawing.svg")));
        assert!(is_supported_image(Path::new("/a/b/c.webp")));
    }

    #[test]
    fn unsupported_or_missing_extensions_are_rejected() {
        assert!(!is_supported_image(Path::new("clip.mp4")));
        assert!(!is_supported_image(Path::new("README")));
        assert!(!is_supported_image(Path::new("archive.tar.gz")));
    }
}
