// SPDX-License-Identifier: MPL-2.0
//! Load sequencing and the displayed image state.
//!
//! Each load request is tagged with a [`LoadTicket`]. Only the completion
//! carrying the most recent ticket may change what is displayed; anything
//! older is discarded.

use crate::config::SPINNER_SPEED;
use crate::error::ImageError;
use crate::media::ImageData;

/// Identifies one image load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// State of the image currently shown in the lightbox.
#[derive(Debug, Clone, Default)]
pub enum ImageState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded(ImageData),
    Errored(ImageError),
}

/// Outcome of resolving a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The completion matched the current request and was applied.
    Applied,
    /// The completion belonged to a superseded request.
    Stale,
}

/// Loading state with spinner animation.
#[derive(Debug, Clone, Default)]
pub struct State {
    image: ImageState,
    /// Ticket of the request the display is waiting on.
    current: Option<LoadTicket>,
    issued: u64,
    spinner_rotation: f32,
}

impl State {
    /// Enters the loading state and issues a fresh ticket.
    pub fn begin(&mut self) -> LoadTicket {
        self.issued += 1;
        let ticket = LoadTicket(self.issued);
        self.current = Some(ticket);
        self.image = ImageState::Loading;
        self.spinner_rotation = 0.0;
        ticket
    }

    /// Applies a completed load if `ticket` is still current.
    pub fn resolve(
        &mut self,
        ticket: LoadTicket,
        result: Result<ImageData, ImageError>,
    ) -> Resolution {
        if self.current != Some(ticket) {
            return Resolution::Stale;
        }
        self.current = None;
        self.image = match result {
            Ok(image) => ImageState::Loaded(image),
            Err(error) => ImageState::Errored(error),
        };
        Resolution::Applied
    }

    /// Advances the spinner while loading.
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.spinner_rotation += SPINNER_SPEED;
            if self.spinner_rotation > std::f32::consts::TAU {
                self.spinner_rotation -= std::f32::consts::TAU;
            }
        }
    }

    #[must_use]
    pub fn image(&self) -> &ImageState {
        &self.image
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.image, ImageState::Loading)
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn tickets_increase_monotonically() {
        let mut state = State::default();
        let first = state.begin();
        let second = state.begin();
        assert!(second > first);
        assert_eq!(state.resolve(first, Ok(pixel())), Resolution::Stale);
        assert!(state.is_loading());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = State::default();
        let old = state.begin();
        let new = state.begin();

        assert_eq!(state.resolve(old, Ok(pixel())), Resolution::Stale);
        assert!(state.is_loading());

        assert_eq!(state.resolve(new, Ok(pixel())), Resolution::Applied);
        assert!(matches!(state.image(), ImageState::Loaded(_)));
    }

    #[test]
    fn ticket_resolves_only_once() {
        let mut state = State::default();
        let ticket = state.begin();
        assert_eq!(
            state.resolve(ticket, Err(ImageError::NotFound)),
            Resolution::Applied
        );
        assert_eq!(state.resolve(ticket, Ok(pixel())), Resolution::Stale);
        assert!(matches!(
            state.image(),
            ImageState::Errored(ImageError::NotFound)
        ));
    }

    #[test]
    fn spinner_advances_only_while_loading() {
        let mut state = State::default();
        state.tick();
        assert_eq!(state.spinner_rotation(), 0.0);

        let ticket = state.begin();
        state.tick();
        assert!(state.spinner_rotation() > 0.0);

        state.resolve(ticket, Ok(pixel()));
        let settled = state.spinner_rotation();
        state.tick();
        assert_eq!(state.spinner_rotation(), settled);
    }
}
