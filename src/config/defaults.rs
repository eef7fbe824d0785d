// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Swipe**: Horizontal gesture threshold
//! - **Preload**: Adjacent image cache bounds
//! - **Lazy Loading**: Thumbnail viewport margin and visibility threshold
//! - **Spinner**: Loading indicator animation

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Horizontal distance a touch must travel before it counts as a swipe.
/// Distances at or below this value are treated as taps.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum allowed swipe threshold.
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum allowed swipe threshold.
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

// ==========================================================================
// Preload Defaults
// ==========================================================================

/// Default number of decoded images kept in the adjacent-image cache.
pub const DEFAULT_PRELOAD_CACHE_IMAGES: usize = 8;

/// Minimum preload cache capacity (the two neighbours plus the current image).
pub const MIN_PRELOAD_CACHE_IMAGES: usize = 3;

/// Maximum preload cache capacity.
pub const MAX_PRELOAD_CACHE_IMAGES: usize = 64;

// ==========================================================================
// Lazy Loading Defaults
// ==========================================================================

/// Distance outside the viewport at which thumbnails start loading.
pub const DEFAULT_LAZY_ROOT_MARGIN: f32 = 50.0;

/// Maximum lazy-load root margin.
pub const MAX_LAZY_ROOT_MARGIN: f32 = 2000.0;

/// Fraction of a thumbnail that must be visible before it loads.
pub const DEFAULT_LAZY_THRESHOLD: f32 = 0.01;

/// Longest side of a decoded grid thumbnail, in pixels.
pub const THUMBNAIL_MAX_DIMENSION: u32 = 320;

// ==========================================================================
// Spinner Defaults
// ==========================================================================

/// Spinner rotation speed in radians per tick.
pub const SPINNER_SPEED: f32 = 0.1;

/// Interval between spinner animation ticks in milliseconds.
pub const SPINNER_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SWIPE_THRESHOLD > 0.0);
    assert!(MAX_SWIPE_THRESHOLD > MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
    assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);

    assert!(MIN_PRELOAD_CACHE_IMAGES > 0);
    assert!(MAX_PRELOAD_CACHE_IMAGES >= MIN_PRELOAD_CACHE_IMAGES);
    assert!(DEFAULT_PRELOAD_CACHE_IMAGES >= MIN_PRELOAD_CACHE_IMAGES);
    assert!(DEFAULT_PRELOAD_CACHE_IMAGES <= MAX_PRELOAD_CACHE_IMAGES);

    assert!(DEFAULT_LAZY_ROOT_MARGIN >= 0.0);
    assert!(DEFAULT_LAZY_ROOT_MARGIN <= MAX_LAZY_ROOT_MARGIN);
    assert!(DEFAULT_LAZY_THRESHOLD >= 0.0);
    assert!(DEFAULT_LAZY_THRESHOLD <= 1.0);
    assert!(THUMBNAIL_MAX_DIMENSION > 0);

    assert!(SPINNER_SPEED > 0.0);
    assert!(SPINNER_TICK_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_defaults_are_valid() {
        assert_eq!(DEFAULT_SWIPE_THRESHOLD, 50.0);
        assert!(DEFAULT_SWIPE_THRESHOLD >= MIN_SWIPE_THRESHOLD);
        assert!(DEFAULT_SWIPE_THRESHOLD <= MAX_SWIPE_THRESHOLD);
    }

    #[test]
    fn preload_defaults_are_valid() {
        assert!(DEFAULT_PRELOAD_CACHE_IMAGES >= MIN_PRELOAD_CACHE_IMAGES);
        assert!(DEFAULT_PRELOAD_CACHE_IMAGES <= MAX_PRELOAD_CACHE_IMAGES);
    }

    #[test]
    fn lazy_defaults_match_gallery_behavior() {
        assert_eq!(DEFAULT_LAZY_ROOT_MARGIN, 50.0);
        assert_eq!(DEFAULT_LAZY_THRESHOLD, 0.01);
    }
}
