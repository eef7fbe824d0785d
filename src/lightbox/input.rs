// SPDX-License-Identifier: MPL-2.0
//! Translation of native keyboard and touch events into gallery input.

use iced::keyboard::{self, key::Named, Key};
use iced::{touch, Event};

/// Keys the gallery and the lightbox react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Escape,
    Left,
    Right,
    Up,
    Down,
    /// Enter or Space.
    Activate,
}

impl InputKey {
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(Named::Escape) => Some(Self::Escape),
            Key::Named(Named::ArrowLeft) => Some(Self::Left),
            Key::Named(Named::ArrowRight) => Some(Self::Right),
            Key::Named(Named::ArrowUp) => Some(Self::Up),
            Key::Named(Named::ArrowDown) => Some(Self::Down),
            Key::Named(Named::Enter | Named::Space) => Some(Self::Activate),
            _ => None,
        }
    }
}

/// Input relevant to the gallery, extracted from a native event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Key(InputKey),
    /// A finger touched the screen at this horizontal position.
    TouchStarted(f32),
    /// A finger left the screen at this horizontal position.
    TouchEnded(f32),
    TouchLost,
}

/// Extracts gallery input from a native event.
///
/// Only the first finger is tracked; multi-touch gestures are not
/// distinguished from single touches.
#[must_use]
pub fn translate(event: &Event) -> Option<Input> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if modifiers.control() || modifiers.alt() || modifiers.logo() {
                return None;
            }
            InputKey::from_key(key).map(Input::Key)
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Input::TouchStarted(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Input::TouchEnded(position.x))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Input::TouchLost),
        _ => None,
    }
}
