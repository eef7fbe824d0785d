// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery grid and the
//! lightbox overlay.
//!
//! The `App` struct reads the gallery once at startup, hands the resulting
//! descriptors to the lightbox, and translates component effects into image
//! decoding tasks.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Result;
use crate::gallery::{
    self, DirectoryGallery, GalleryEntry, GallerySource, ImageDescriptor, ManifestGallery,
};
use crate::i18n::fluent::I18n;
use crate::lightbox::{Lightbox, LightboxSettings};
use crate::media::{FsImageLoader, SharedLoader};
use crate::ui::gallery_grid;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    lightbox: Lightbox,
    grid: gallery_grid::State,
    loader: SharedLoader,
    /// Localized message shown above the grid when startup hit a problem.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.lightbox.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("notice", &self.notice)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Reads the gallery at `path`: a `.toml` manifest or a directory of images.
///
/// # Errors
///
/// Returns an error when the directory or manifest cannot be read.
pub fn read_gallery(path: &Path, config: &Config) -> Result<Vec<GalleryEntry>> {
    if ManifestGallery::is_manifest(path) {
        ManifestGallery::new(path).entries()
    } else {
        let sort_order = config.gallery.sort_order.unwrap_or_default();
        DirectoryGallery::new(path, sort_order).entries()
    }
}

impl App {
    /// Loads configuration and the gallery, then requests the thumbnails
    /// visible in the initial window.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let path = flags.path.map_or_else(|| PathBuf::from("."), PathBuf::from);
        let (entries, gallery_notice) = match read_gallery(&path, &config) {
            Ok(entries) => {
                tracing::info!(path = %path.display(), images = entries.len(), "gallery loaded");
                (entries, None)
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to read gallery");
                let details = err.to_string();
                let notice =
                    i18n.tr_with_args("gallery-load-error", &[("details", details.as_str())]);
                (Vec::new(), Some(notice))
            }
        };

        let images = gallery::describe(entries, |index| {
            let index = index.to_string();
            i18n.tr_with_args("gallery-image-alt", &[("index", index.as_str())])
        });

        let notice = gallery_notice.or_else(|| config_warning.map(|key| i18n.tr(&key)));
        let loader: SharedLoader = Arc::new(FsImageLoader);

        Self::with_gallery(&config, i18n, images, loader, notice)
    }

    /// Builds the application around an already-described gallery.
    pub fn with_gallery(
        config: &Config,
        i18n: I18n,
        images: Vec<ImageDescriptor>,
        loader: SharedLoader,
        notice: Option<String>,
    ) -> (Self, Task<Message>) {
        let mut grid = gallery_grid::State::new(
            images.len(),
            Some(default_window_size()),
            config.gallery.effective_lazy_root_margin(),
            config.gallery.effective_lazy_threshold(),
        );
        let initial = grid.initial_requests();
        let lightbox = Lightbox::new(images, LightboxSettings::from(&config.lightbox));

        let mut app = Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            lightbox,
            grid,
            loader,
            notice,
        };
        let task = update::grid_task(
            &mut update::UpdateContext {
                lightbox: &mut app.lightbox,
                grid: &mut app.grid,
                loader: &app.loader,
            },
            initial,
        );
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_spinner_subscription(
                self.lightbox.is_open(),
                self.lightbox.is_loading(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            lightbox: &mut self.lightbox,
            grid: &mut self.grid,
            loader: &self.loader,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            lightbox: &self.lightbox,
            grid: &self.grid,
            notice: self.notice.as_deref(),
        })
    }
}
