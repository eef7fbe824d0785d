// SPDX-License-Identifier: MPL-2.0
//! The lightbox controller.
//!
//! [`Lightbox`] owns the gallery's image descriptors, the current index and
//! the overlay's open/closed and loading state. It reacts to [`Message`]s
//! synchronously and hands asynchronous work (decoding the displayed image,
//! preloading its neighbours) back to the shell as an [`Effect`].

use super::gesture::{Gesture, Swipe, SwipeTracker};
use super::input::{Input, InputKey};
use super::loading::{self, ImageState, LoadTicket, Resolution};
use super::navigation::{self, Affordances};
use super::preload::PreloadCache;
use super::renderer::{Counter, ImageSlot, OverlayFrame, OverlayRenderer};
use crate::config::{LightboxConfig, NavigationMode};
use crate::error::ImageError;
use crate::gallery::{ImageDescriptor, ImageSource};
use crate::media::ImageData;
use std::collections::HashSet;

/// Behavior knobs of the lightbox, resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightboxSettings {
    pub navigation_mode: NavigationMode,
    pub swipe_threshold: f32,
    pub preload_adjacent: bool,
    pub preload_cache_images: usize,
}

impl Default for LightboxSettings {
    fn default() -> Self {
        Self::from(&LightboxConfig::default())
    }
}

impl From<&LightboxConfig> for LightboxSettings {
    fn from(config: &LightboxConfig) -> Self {
        Self {
            navigation_mode: config.navigation_mode.unwrap_or_default(),
            swipe_threshold: config.effective_swipe_threshold(),
            preload_adjacent: config.preload_adjacent.unwrap_or(true),
            preload_cache_images: config.effective_preload_cache_images(),
        }
    }
}

/// Messages handled by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the overlay at the given index (normalized).
    Open(isize),
    Close,
    /// Show the image at the given index (normalized).
    ShowImage(isize),
    Next,
    Previous,
    /// A load requested through [`Effect::LoadImage`] finished.
    ImageLoaded {
        ticket: LoadTicket,
        result: Result<ImageData, ImageError>,
    },
    /// A preload requested through [`Effect::Preload`] finished.
    Preloaded {
        source: ImageSource,
        result: Result<ImageData, ImageError>,
    },
    /// Keyboard or touch input.
    Input(Input),
    /// Press or release on the overlay outside the image and controls.
    ///
    /// Dismisses on a mouse click or a touch that ends as a tap.
    BackgroundPressed,
    /// Press or release on the image or a control. Never dismisses the overlay.
    ContentPressed,
    SpinnerTick,
}

/// Work the shell must carry out on behalf of the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Decode `source` and report back with [`Message::ImageLoaded`].
    LoadImage {
        ticket: LoadTicket,
        source: ImageSource,
    },
    /// Decode each source and report back with [`Message::Preloaded`].
    Preload(Vec<ImageSource>),
}

/// Full-screen image viewer over a fixed gallery.
#[derive(Debug)]
pub struct Lightbox {
    images: Vec<ImageDescriptor>,
    current_index: usize,
    is_open: bool,
    loading: loading::State,
    swipe: SwipeTracker,
    preload: PreloadCache,
    preloads_in_flight: HashSet<ImageSource>,
    settings: LightboxSettings,
}

impl Lightbox {
    #[must_use]
    pub fn new(images: Vec<ImageDescriptor>, settings: LightboxSettings) -> Self {
        tracing::debug!(
            images = images.len(),
            mode = ?settings.navigation_mode,
            "lightbox initialized"
        );
        Self {
            preload: PreloadCache::new(settings.preload_cache_images, settings.preload_adjacent),
            images,
            current_index: 0,
            is_open: false,
            loading: loading::State::default(),
            swipe: SwipeTracker::default(),
            preloads_in_flight: HashSet::new(),
            settings,
        }
    }

    /// Handle a lightbox message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Open(index) => self.open(index),
            Message::Close => {
                self.close();
                Effect::None
            }
            Message::ShowImage(index) => self.show_image(index),
            Message::Next => self.show_next(),
            Message::Previous => self.show_previous(),
            Message::ImageLoaded { ticket, result } => self.on_image_loaded(ticket, result),
            Message::Preloaded { source, result } => {
                self.on_preloaded(source, result);
                Effect::None
            }
            Message::Input(input) => self.on_input(input),
            Message::BackgroundPressed => {
                if self.is_open && self.swipe.background_pressed() {
                    self.close();
                }
                Effect::None
            }
            Message::ContentPressed => {
                self.swipe.content_pressed();
                Effect::None
            }
            Message::SpinnerTick => {
                self.loading.tick();
                Effect::None
            }
        }
    }

    /// Opens the overlay on the image at `index`.
    ///
    /// Does nothing for an empty gallery.
    pub fn open(&mut self, index: isize) -> Effect {
        if self.images.is_empty() {
            tracing::debug!(index, "ignoring open on an empty gallery");
            return Effect::None;
        }
        self.is_open = true;
        self.show_image(index)
    }

    /// Hides the overlay. Calling it while closed has no effect.
    pub fn close(&mut self) {
        if self.is_open {
            tracing::debug!(index = self.current_index, "lightbox closed");
        }
        self.is_open = false;
        self.swipe.cancel();
    }

    /// Displays the image at `index`, normalized according to the navigation mode.
    pub fn show_image(&mut self, index: isize) -> Effect {
        let Some(index) =
            navigation::normalize(index, self.images.len(), self.settings.navigation_mode)
        else {
            return Effect::None;
        };

        self.current_index = index;
        let ticket = self.loading.begin();
        let source = self.images[index].source.clone();

        if let Some(image) = self.preload.get(&source) {
            tracing::debug!(index, source = %source, "showing preloaded image");
            self.loading.resolve(ticket, Ok(image));
            return self.preload_effect();
        }

        tracing::debug!(index, source = %source, ?ticket, "loading image");
        Effect::LoadImage { ticket, source }
    }

    pub fn show_next(&mut self) -> Effect {
        if self.settings.navigation_mode == NavigationMode::Clamped
            && self.current_index + 1 >= self.images.len()
        {
            return Effect::None;
        }
        self.show_image(offset(self.current_index, 1))
    }

    pub fn show_previous(&mut self) -> Effect {
        if self.settings.navigation_mode == NavigationMode::Clamped && self.current_index == 0 {
            return Effect::None;
        }
        self.show_image(offset(self.current_index, -1))
    }

    fn on_image_loaded(
        &mut self,
        ticket: LoadTicket,
        result: Result<ImageData, ImageError>,
    ) -> Effect {
        let outcome = result.as_ref().map(ImageData::clone).map_err(ImageError::clone);

        match self.loading.resolve(ticket, result) {
            Resolution::Stale => {
                tracing::debug!(?ticket, "discarding stale image load");
                Effect::None
            }
            Resolution::Applied => match outcome {
                Ok(image) => {
                    let source = self.images[self.current_index].source.clone();
                    self.preload.insert(source, image);
                    self.preload_effect()
                }
                Err(error) => {
                    tracing::warn!(
                        source = %self.current_source_display(),
                        %error,
                        "failed to load gallery image"
                    );
                    Effect::None
                }
            },
        }
    }

    fn on_preloaded(&mut self, source: ImageSource, result: Result<ImageData, ImageError>) {
        self.preloads_in_flight.remove(&source);
        match result {
            Ok(image) => {
                self.preload.insert(source, image);
            }
            Err(error) => {
                tracing::debug!(source = %source, %error, "preload failed");
            }
        }
    }

    fn on_input(&mut self, input: Input) -> Effect {
        if !self.is_open {
            return Effect::None;
        }
        match input {
            Input::Key(InputKey::Escape) => {
                self.close();
                Effect::None
            }
            Input::Key(InputKey::Left) => self.show_previous(),
            Input::Key(InputKey::Right) => self.show_next(),
            Input::Key(_) => Effect::None,
            Input::TouchStarted(x) => {
                self.swipe.start(x);
                Effect::None
            }
            Input::TouchEnded(x) => match self.swipe.end(x, self.settings.swipe_threshold) {
                Some(Gesture::Swipe(Swipe::Previous)) => self.show_previous(),
                Some(Gesture::Swipe(Swipe::Next)) => self.show_next(),
                Some(Gesture::Tap {
                    on_background: true,
                }) => {
                    self.close();
                    Effect::None
                }
                Some(Gesture::Tap { .. }) | None => Effect::None,
            },
            Input::TouchLost => {
                self.swipe.cancel();
                Effect::None
            }
        }
    }

    /// Requests the displayed image's neighbours that are not cached yet.
    fn preload_effect(&mut self) -> Effect {
        if !self.settings.preload_adjacent {
            return Effect::None;
        }
        let targets = navigation::preload_targets(self.current_index, self.images.len());
        let missing: Vec<ImageSource> = self
            .preload
            .missing(targets.iter().map(|&i| &self.images[i].source))
            .into_iter()
            .filter(|source| !self.preloads_in_flight.contains(source))
            .collect();

        if missing.is_empty() {
            return Effect::None;
        }
        tracing::debug!(count = missing.len(), "preloading adjacent images");
        self.preloads_in_flight.extend(missing.iter().cloned());
        Effect::Preload(missing)
    }

    fn current_source_display(&self) -> String {
        self.images
            .get(self.current_index)
            .map(|image| image.source.file_name())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the gallery behind the overlay must not scroll.
    #[must_use]
    pub fn locks_background_scroll(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    #[must_use]
    pub fn image_state(&self) -> &ImageState {
        self.loading.image()
    }

    #[must_use]
    pub fn settings(&self) -> &LightboxSettings {
        &self.settings
    }

    #[must_use]
    pub fn preload_cache(&self) -> &PreloadCache {
        &self.preload
    }

    /// Position display for the current image, if the gallery is not empty.
    #[must_use]
    pub fn counter(&self) -> Option<Counter> {
        (!self.images.is_empty()).then(|| Counter {
            current: self.current_index + 1,
            total: self.images.len(),
        })
    }

    #[must_use]
    pub fn affordances(&self) -> Affordances {
        navigation::affordances(
            self.current_index,
            self.images.len(),
            self.settings.navigation_mode,
        )
    }

    /// Snapshot of what the overlay shows right now.
    #[must_use]
    pub fn frame(&self) -> OverlayFrame {
        if !self.is_open {
            return OverlayFrame::hidden();
        }
        let Some(descriptor) = self.images.get(self.current_index) else {
            return OverlayFrame::hidden();
        };

        let slot = match self.loading.image() {
            ImageState::Idle => ImageSlot::Empty,
            ImageState::Loading => ImageSlot::Spinner {
                rotation: self.loading.spinner_rotation(),
            },
            ImageState::Loaded(image) => ImageSlot::Image(image.clone()),
            ImageState::Errored(error) => ImageSlot::Error(error.clone()),
        };
        let affordances = self.affordances();

        OverlayFrame {
            visible: true,
            slot,
            alt_text: descriptor.alt_text.clone(),
            counter: self.counter(),
            previous_enabled: affordances.previous,
            next_enabled: affordances.next,
        }
    }

    /// Renders the current frame.
    pub fn render<R: OverlayRenderer>(&self, renderer: &R) -> R::Output {
        renderer.render(self.frame())
    }
}

/// `index + delta` as a signed index for normalization.
fn offset(index: usize, delta: isize) -> isize {
    isize::try_from(index).map_or(isize::MAX, |i| i.saturating_add(delta))
}
