// SPDX-License-Identifier: MPL-2.0
//! Full-window image lightbox.
//!
//! The [`Lightbox`] controller is toolkit-independent: it consumes
//! [`Message`]s, returns [`Effect`]s for the shell to run and describes its
//! appearance through [`OverlayFrame`] snapshots.
//!
//! # State machine
//!
//! ```text
//! closed --open(i)--> open/loading --success--> open/loaded
//!                          |        --failure--> open/errored
//! open/* --next/previous--> open/loading
//! open/* --close--> closed
//! ```

pub mod controller;
pub mod gesture;
pub mod input;
pub mod loading;
pub mod navigation;
pub mod preload;
pub mod renderer;

pub use controller::{Effect, Lightbox, LightboxSettings, Message};
pub use input::{Input, InputKey};
pub use loading::{ImageState, LoadTicket};
pub use navigation::Affordances;
pub use renderer::{Counter, ImageSlot, OverlayFrame, OverlayRenderer};
