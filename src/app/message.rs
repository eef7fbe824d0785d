// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::lightbox::{self, Input};
use crate::ui::gallery_grid;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Lightbox(lightbox::Message),
    Grid(gallery_grid::Message),
    /// Keyboard or touch input not captured by a widget.
    Input(Input),
    WindowResized(Size),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 format (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Directory or `.toml` manifest to show. Defaults to the current directory.
    pub path: Option<String>,
}
