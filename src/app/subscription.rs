// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and touch events are translated into [`Input`] values and
//! routed by `App::update` to whichever view is active. Window resizes keep
//! the grid's lazy-loading viewport current.

use super::Message;
use crate::config::SPINNER_TICK_MS;
use crate::lightbox::{self, input};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Listens for keyboard, touch and window events.
///
/// Keys already captured by a widget are dropped. Touch events are always
/// forwarded so a swipe that starts on the image still counts.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        match (&event, status) {
            (event::Event::Keyboard(..), event::Status::Captured) => None,
            (event::Event::Keyboard(..) | event::Event::Touch(..), _) => {
                input::translate(&event).map(Message::Input)
            }
            _ => None,
        }
    })
}

/// Drives the loading spinner while the lightbox waits on an image.
pub fn create_spinner_subscription(is_open: bool, is_loading: bool) -> Subscription<Message> {
    if is_open && is_loading {
        time::every(Duration::from_millis(SPINNER_TICK_MS))
            .map(|_| Message::Lightbox(lightbox::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
