// SPDX-License-Identifier: MPL-2.0
//! Rendering surface for the lightbox overlay.
//!
//! The controller describes what the overlay should show as an
//! [`OverlayFrame`]; an [`OverlayRenderer`] turns that snapshot into output.
//! The Iced view is one renderer, tests use another that records frames.

use crate::error::ImageError;
use crate::media::ImageData;
use std::fmt;

/// Position display, e.g. "2 / 5".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    /// 1-based position of the displayed image.
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// What occupies the image area of the overlay.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Empty,
    /// Loading indicator with the spinner angle in radians.
    Spinner { rotation: f32 },
    Image(ImageData),
    Error(ImageError),
}

impl ImageSlot {
    #[must_use]
    pub fn is_spinner(&self) -> bool {
        matches!(self, ImageSlot::Spinner { .. })
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match self {
            ImageSlot::Image(image) => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ImageError> {
        match self {
            ImageSlot::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Snapshot of the overlay at one point in time.
#[derive(Debug, Clone)]
pub struct OverlayFrame {
    pub visible: bool,
    pub slot: ImageSlot,
    pub alt_text: String,
    pub counter: Option<Counter>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl OverlayFrame {
    /// Frame of a closed lightbox.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            slot: ImageSlot::Empty,
            alt_text: String::new(),
            counter: None,
            previous_enabled: false,
            next_enabled: false,
        }
    }
}

/// Turns overlay frames into a concrete presentation.
pub trait OverlayRenderer {
    type Output;

    fn render(&self, frame: OverlayFrame) -> Self::Output;
}
