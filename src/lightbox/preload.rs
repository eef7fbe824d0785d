// SPDX-License-Identifier: MPL-2.0
//! Cache of decoded images adjacent to the one on display.
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Count-bounded**: capacity comes from `preload_cache_images`
//! - **Source-keyed**: images indexed by their [`ImageSource`]
//!
//! The cache has no effect on what is displayed until the lightbox navigates
//! to a cached source, at which point the image is shown without a load.

use crate::config::DEFAULT_PRELOAD_CACHE_IMAGES;
use crate::gallery::ImageSource;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// LRU cache for preloaded images.
pub struct PreloadCache {
    cache: LruCache<ImageSource, ImageData>,
    enabled: bool,
}

impl PreloadCache {
    /// Creates a cache holding up to `capacity` images.
    #[must_use]
    pub fn new(capacity: usize, enabled: bool) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_PRELOAD_CACHE_IMAGES))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            enabled,
        }
    }

    /// Stores a decoded image. Does nothing when the cache is disabled.
    pub fn insert(&mut self, source: ImageSource, image: ImageData) {
        if !self.enabled {
            return;
        }
        if let Some((evicted, _)) = self.cache.push(source.clone(), image) {
            if evicted != source {
                tracing::trace!(evicted = %evicted.file_name(), "preload cache full");
            }
        }
    }

    /// Looks up an image, updating LRU order on access.
    ///
    /// The returned clone is cheap: the pixel data behind the handle is shared.
    pub fn get(&mut self, source: &ImageSource) -> Option<ImageData> {
        if !self.enabled {
            return None;
        }
        let image = self.cache.get(source).cloned();
        tracing::trace!(
            source = %source.file_name(),
            hit = image.is_some(),
            "preload cache lookup"
        );
        image
    }

    /// Filters `sources` down to those not already cached.
    #[must_use]
    pub fn missing<'a>(
        &self,
        sources: impl IntoIterator<Item = &'a ImageSource>,
    ) -> Vec<ImageSource> {
        if !self.enabled {
            return Vec::new();
        }
        sources
            .into_iter()
            .filter(|source| !self.cache.contains(*source))
            .cloned()
            .collect()
    }
}

impl std::fmt::Debug for PreloadCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreloadCache")
            .field("enabled", &self.enabled)
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32) -> ImageData {
        ImageData::from_rgba(width, 1, vec![0; width as usize * 4])
    }

    fn cached(cache: &PreloadCache, source: &ImageSource) -> bool {
        cache.missing([source]).is_empty()
    }

    #[test]
    fn insert_and_get_image() {
        let mut cache = PreloadCache::new(4, true);
        let source = ImageSource::from("/test/a.jpg");

        cache.insert(source.clone(), image(10));
        assert!(cached(&cache, &source));
        assert_eq!(cache.get(&source).map(|i| i.width), Some(10));
        assert!(cache.get(&ImageSource::from("/test/b.jpg")).is_none());
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let mut cache = PreloadCache::new(4, false);
        let source = ImageSource::from("/test/a.jpg");

        cache.insert(source.clone(), image(1));
        assert!(cache.get(&source).is_none());
        assert!(cache.missing([&source]).is_empty());
    }

    #[test]
    fn least_recently_used_is_evicted() {
        let mut cache = PreloadCache::new(2, true);
        let a = ImageSource::from("a.png");
        let b = ImageSource::from("b.png");
        let c = ImageSource::from("c.png");

        cache.insert(a.clone(), image(1));
        cache.insert(b.clone(), image(1));
        cache.get(&a);
        cache.insert(c.clone(), image(1));

        assert!(cached(&cache, &a));
        assert!(!cached(&cache, &b));
        assert!(cached(&cache, &c));
    }

    #[test]
    fn reinserting_same_source_replaces_it() {
        let mut cache = PreloadCache::new(2, true);
        let a = ImageSource::from("a.png");
        let b = ImageSource::from("b.png");
        cache.insert(a.clone(), image(1));
        cache.insert(a.clone(), image(2));
        cache.insert(b.clone(), image(1));

        assert!(cached(&cache, &a));
        assert!(cached(&cache, &b));
        assert_eq!(cache.get(&a).map(|i| i.width), Some(2));
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let mut cache = PreloadCache::new(0, true);
        let a = ImageSource::from("a.png");
        cache.insert(a.clone(), image(1));
        assert!(cached(&cache, &a));
    }

    #[test]
    fn missing_filters_cached_sources() {
        let mut cache = PreloadCache::new(4, true);
        let a = ImageSource::from("a.png");
        let b = ImageSource::from("b.png");
        cache.insert(a.clone(), image(1));

        assert_eq!(cache.missing([&a, &b]), vec![b]);
    }
}
