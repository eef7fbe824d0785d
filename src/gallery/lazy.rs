// SPDX-License-Identifier: MPL-2.0
//! Viewport-driven thumbnail loading for the gallery grid.
//!
//! Thumbnails stay [`ThumbnailState::Pending`] until their bounds come close
//! enough to the visible part of the grid. The visible region is expanded by
//! a root margin on every side, and an item qualifies once the fraction of
//! its area inside that region reaches the threshold. Every item is
//! requested at most once.
//!
//! Without a known viewport (before the first layout), every pending item is
//! requested immediately.

use iced::Rectangle;

/// Orientation class of a loaded thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectClass {
    Portrait,
    Landscape,
    Square,
}

impl AspectClass {
    /// Ratios below this are portrait.
    pub const PORTRAIT_BELOW: f32 = 0.9;
    /// Ratios above this are landscape.
    pub const LANDSCAPE_ABOVE: f32 = 1.1;

    /// Classifies a width / height ratio.
    #[must_use]
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio < Self::PORTRAIT_BELOW {
            AspectClass::Portrait
        } else if ratio > Self::LANDSCAPE_ABOVE {
            AspectClass::Landscape
        } else {
            AspectClass::Square
        }
    }

    /// Classifies pixel dimensions. Degenerate sizes count as square.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return AspectClass::Square;
        }
        Self::from_ratio(width as f32 / height as f32)
    }
}

/// Loading state of one grid thumbnail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailState {
    Pending,
    Loading,
    Loaded { aspect: AspectClass },
    Failed,
}

/// Tracks which gallery thumbnails have been requested.
#[derive(Debug, Clone)]
pub struct LazyThumbnails {
    states: Vec<ThumbnailState>,
    root_margin: f32,
    threshold: f32,
}

impl LazyThumbnails {
    #[must_use]
    pub fn new(count: usize, root_margin: f32, threshold: f32) -> Self {
        Self {
            states: vec![ThumbnailState::Pending; count],
            root_margin: root_margin.max(0.0),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<ThumbnailState> {
        self.states.get(index).copied()
    }

    /// Moves every pending item that qualifies for loading to `Loading` and
    /// returns their indices.
    ///
    /// `viewport` is the visible region in grid content coordinates and
    /// `bounds_of` gives each item's bounds in the same coordinates. With no
    /// viewport every pending item is requested.
    pub fn request_visible(
        &mut self,
        viewport: Option<Rectangle>,
        bounds_of: impl Fn(usize) -> Rectangle,
    ) -> Vec<usize> {
        let margin = self.root_margin;
        let root = viewport.map(|v| Rectangle {
            x: v.x - margin,
            y: v.y - margin,
            width: v.width + 2.0 * margin,
            height: v.height + 2.0 * margin,
        });
        let mut requested = Vec::new();

        for (index, state) in self.states.iter_mut().enumerate() {
            if *state != ThumbnailState::Pending {
                continue;
            }
            let qualifies = match root {
                Some(root) => {
                    visible_fraction(bounds_of(index), root).is_some_and(|f| f >= self.threshold)
                }
                None => true,
            };
            if qualifies {
                *state = ThumbnailState::Loading;
                requested.push(index);
            }
        }

        if !requested.is_empty() {
            tracing::debug!(count = requested.len(), "requesting gallery thumbnails");
        }
        requested
    }

    /// Records a decoded thumbnail. Ignored unless the item is loading.
    pub fn mark_loaded(&mut self, index: usize, width: u32, height: u32) {
        if let Some(state @ ThumbnailState::Loading) = self.states.get_mut(index) {
            *state = ThumbnailState::Loaded {
                aspect: AspectClass::from_dimensions(width, height),
            };
        }
    }

    /// Records a thumbnail that could not be decoded.
    pub fn mark_failed(&mut self, index: usize) {
        if let Some(state @ ThumbnailState::Loading) = self.states.get_mut(index) {
            *state = ThumbnailState::Failed;
        }
    }
}

/// Fraction of `item` lying inside `root`, or `None` when they do not touch.
fn visible_fraction(item: Rectangle, root: Rectangle) -> Option<f32> {
    let left = item.x.max(root.x);
    let top = item.y.max(root.y);
    let right = (item.x + item.width).min(root.x + root.width);
    let bottom = (item.y + item.height).min(root.y + root.height);

    if right < left || bottom < top {
        return None;
    }

    let area = item.width * item.height;
    if area <= 0.0 {
        // Zero-sized items count as fully visible once they are in range.
        return Some(1.0);
    }
    Some(((right - left) * (bottom - top)) / area)
}
