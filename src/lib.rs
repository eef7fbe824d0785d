// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo gallery with a full-window lightbox, built with
//! the Iced GUI framework.
//!
//! A gallery (a directory of images or a TOML manifest) is read once at
//! startup and shown as a lazily loaded thumbnail grid. Activating a
//! thumbnail opens the [`lightbox`], which navigates the gallery with
//! buttons, arrow keys or swipes, preloads adjacent images, and discards
//! loads that finish after the user has moved on.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod logging;
pub mod media;
pub mod ui;
