// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`gallery_grid`] - Scrollable thumbnail grid with lazy loading and keyboard focus
//! - [`lightbox_overlay`] - Iced rendering of the lightbox overlay frames
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_grid;
pub mod lightbox_overlay;
pub mod styles;
pub mod theming;
pub mod widgets;
