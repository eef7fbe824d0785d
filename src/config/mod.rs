// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Gallery ordering and lazy thumbnail loading
//! - `[lightbox]` - Navigation mode, swipe threshold, adjacent preloading
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_GALLERY_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, NavigationMode};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.lightbox.navigation_mode = Some(NavigationMode::Clamped);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// How the lightbox behaves when navigating past either end of the gallery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    /// Next from the last image shows the first, previous from the first shows the last.
    #[default]
    Circular,
    /// Navigation stops at the edges and the matching control is disabled.
    Clamped,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Image ordering when scanning a directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,

    /// Distance outside the viewport at which thumbnails start loading.
    #[serde(
        default = "default_lazy_root_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub lazy_root_margin: Option<f32>,

    /// Fraction of a thumbnail that must be visible before it loads.
    #[serde(
        default = "default_lazy_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub lazy_threshold: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
            lazy_root_margin: default_lazy_root_margin(),
            lazy_threshold: default_lazy_threshold(),
        }
    }
}

impl GalleryConfig {
    /// Lazy-load root margin clamped into the supported range.
    ///
    /// Non-finite values count as unset.
    #[must_use]
    pub fn effective_lazy_root_margin(&self) -> f32 {
        finite(self.lazy_root_margin)
            .unwrap_or(DEFAULT_LAZY_ROOT_MARGIN)
            .clamp(0.0, MAX_LAZY_ROOT_MARGIN)
    }

    /// Lazy-load visibility threshold clamped into `[0, 1]`.
    ///
    /// Non-finite values count as unset.
    #[must_use]
    pub fn effective_lazy_threshold(&self) -> f32 {
        finite(self.lazy_threshold)
            .unwrap_or(DEFAULT_LAZY_THRESHOLD)
            .clamp(0.0, 1.0)
    }
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Edge behavior of previous/next navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_mode: Option<NavigationMode>,

    /// Horizontal swipe distance required to navigate.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Whether neighbours of the displayed image are decoded ahead of time.
    #[serde(
        default = "default_preload_adjacent",
        skip_serializing_if = "Option::is_none"
    )]
    pub preload_adjacent: Option<bool>,

    /// Number of decoded images kept in the preload cache.
    #[serde(
        default = "default_preload_cache_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub preload_cache_images: Option<usize>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            navigation_mode: Some(NavigationMode::default()),
            swipe_threshold: default_swipe_threshold(),
            preload_adjacent: default_preload_adjacent(),
            preload_cache_images: default_preload_cache_images(),
        }
    }
}

impl LightboxConfig {
    /// Swipe threshold clamped into the supported range.
    ///
    /// Non-finite values count as unset.
    #[must_use]
    pub fn effective_swipe_threshold(&self) -> f32 {
        finite(self.swipe_threshold)
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
            .clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
    }

    /// Preload cache capacity clamped into the supported range.
    #[must_use]
    pub fn effective_preload_cache_images(&self) -> usize {
        self.preload_cache_images
            .unwrap_or(DEFAULT_PRELOAD_CACHE_IMAGES)
            .clamp(MIN_PRELOAD_CACHE_IMAGES, MAX_PRELOAD_CACHE_IMAGES)
    }
}

/// TOML accepts `nan` and `inf`, which `clamp` would pass through or pin to a bound.
fn finite(value: Option<f32>) -> Option<f32> {
    value.filter(|v| v.is_finite())
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery grid settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Lightbox overlay settings.
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_lazy_root_margin() -> Option<f32> {
    Some(DEFAULT_LAZY_ROOT_MARGIN)
}

fn default_lazy_threshold() -> Option<f32> {
    Some(DEFAULT_LAZY_THRESHOLD)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_preload_adjacent() -> Option<bool> {
    Some(true)
}

fn default_preload_cache_images() -> Option<usize> {
    Some(DEFAULT_PRELOAD_CACHE_IMAGES)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
