// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(String),
    Image(ImageError),
}

/// Specific error types for image loading failures.
/// Used to provide user-friendly, localized error messages in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The image file does not exist.
    NotFound,

    /// The file exists but could not be read.
    Io(String),

    /// The file extension is not a supported image format.
    UnsupportedFormat,

    /// The data could not be decoded as an image.
    Decode(String),

    /// SVG parsing or rasterization failed.
    Svg(String),
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::NotFound => "error-image-not-found",
            ImageError::Io(_) => "error-image-io",
            ImageError::UnsupportedFormat => "error-image-unsupported-format",
            ImageError::Decode(_) => "error-image-decode",
            ImageError::Svg(_) => "error-image-svg",
        }
    }

    /// Classifies an I/O error raised while reading an image file.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ImageError::NotFound,
            _ => ImageError::Io(err.to_string()),
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::NotFound => write!(f, "Image file not found"),
            ImageError::Io(msg) => write!(f, "I/O error: {}", msg),
            ImageError::UnsupportedFormat => write!(f, "Unsupported image format"),
            ImageError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
            ImageError::Svg(msg) => write!(f, "SVG error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn image_error_from_missing_file_is_not_found() {
        let io_error = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(ImageError::from_io(&io_error), ImageError::NotFound);
    }

    #[test]
    fn image_error_from_other_io_keeps_message() {
        let io_error = std::io::Error::other("permission denied");
        let err = ImageError::from_io(&io_error);
        assert!(matches!(err, ImageError::Io(msg) if msg.contains("permission denied")));
    }

    #[test]
    fn image_error_i18n_keys() {
        assert_eq!(ImageError::NotFound.i18n_key(), "error-image-not-found");
        assert_eq!(
            ImageError::UnsupportedFormat.i18n_key(),
            "error-image-unsupported-format"
        );
        assert_eq!(
            ImageError::Decode("x".into()).i18n_key(),
            "error-image-decode"
        );
    }

    #[test]
    fn image_error_wraps_into_crate_error() {
        let err: Error = ImageError::Svg("broken".into()).into();
        assert_eq!(format!("{}", err), "Image Error: SVG error: broken");
    }
}
