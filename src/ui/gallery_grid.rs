// SPDX-License-Identifier: MPL-2.0
//! Scrollable thumbnail grid.
//!
//! The grid owns the lazy thumbnail bookkeeping and the keyboard focus. It
//! reports thumbnails to decode and items to open as [`Effect`]s; the
//! application shell carries them out.

use crate::error::ImageError;
use crate::gallery::{AspectClass, ImageDescriptor, LazyThumbnails, ThumbnailState};
use crate::i18n::fluent::I18n;
use crate::lightbox::InputKey;
use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::tooltip::Position;
use iced::widget::{button, container, image, text, Column, Id, Row, Scrollable};
use iced::{ContentFit, Element, Length, Rectangle, Size};

/// Widget id of the grid's scrollable.
pub const SCROLLABLE_ID: &str = "gallery-grid";

/// Geometry of the grid for a given content width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub cell: f32,
    pub gap: f32,
    pub padding: f32,
}

impl GridLayout {
    /// Fits as many fixed-size cells per row as the width allows (at least one).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        let cell = sizing::THUMBNAIL_CELL;
        let gap = spacing::MD;
        let padding = spacing::MD;
        let usable = (width - 2.0 * padding + gap).max(0.0);
        let columns = ((usable / (cell + gap)).floor() as usize).max(1);

        Self {
            columns,
            cell,
            gap,
            padding,
        }
    }

    /// Bounds of item `index` in content coordinates.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn bounds(&self, index: usize) -> Rectangle {
        let row = index / self.columns;
        let col = index % self.columns;
        let stride = self.cell + self.gap;

        Rectangle {
            x: self.padding + col as f32 * stride,
            y: self.padding + row as f32 * stride,
            width: self.cell,
            height: self.cell,
        }
    }
}

/// Moves keyboard focus through a grid of `len` items laid out in `columns`.
///
/// Without current focus any arrow focuses the first item. Movement stops at
/// the grid edges.
#[must_use]
pub fn move_focus(
    focused: Option<usize>,
    key: InputKey,
    columns: usize,
    len: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let Some(current) = focused else {
        return match key {
            InputKey::Left | InputKey::Right | InputKey::Up | InputKey::Down => Some(0),
            _ => None,
        };
    };
    let last = len - 1;

    let moved = match key {
        InputKey::Left => current.saturating_sub(1),
        InputKey::Right => (current + 1).min(last),
        InputKey::Up => current.checked_sub(columns).unwrap_or(current),
        InputKey::Down => {
            let below = current + columns;
            if below <= last {
                below
            } else {
                current
            }
        }
        InputKey::Escape | InputKey::Activate => current,
    };
    Some(moved)
}

#[derive(Debug, Clone)]
pub enum Message {
    ItemPressed(usize),
    Scrolled {
        offset: AbsoluteOffset,
        bounds: Rectangle,
    },
    ThumbnailLoaded {
        index: usize,
        result: Result<ImageData, ImageError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Open the lightbox at this index.
    Open(usize),
    /// Decode thumbnails for these indices.
    LoadThumbnails(Vec<usize>),
    /// Scroll the grid vertically to this offset.
    ScrollTo(f32),
}

/// Gallery grid state.
#[derive(Debug)]
pub struct State {
    lazy: LazyThumbnails,
    thumbnails: Vec<Option<image::Handle>>,
    focused: Option<usize>,
    viewport: Option<Rectangle>,
    /// Last known window size.
    window: Option<Size>,
    /// Window area outside the scrollable, once the scrollable has reported its bounds.
    chrome: Option<Size>,
    layout: GridLayout,
}

impl State {
    /// Creates the grid for `count` items shown in a viewport of `size`.
    #[must_use]
    pub fn new(count: usize, size: Option<Size>, root_margin: f32, threshold: f32) -> Self {
        let viewport = size.map(|size| Rectangle {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        });
        Self {
            lazy: LazyThumbnails::new(count, root_margin, threshold),
            thumbnails: vec![None; count],
            focused: None,
            layout: GridLayout::for_width(viewport.map_or(0.0, |v| v.width)),
            viewport,
            window: size,
            chrome: None,
        }
    }

    /// Requests the thumbnails visible at startup.
    pub fn initial_requests(&mut self) -> Effect {
        self.request_visible()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ItemPressed(index) => {
                self.focused = Some(index);
                Effect::Open(index)
            }
            Message::Scrolled { offset, bounds } => {
                if let Some(window) = self.window {
                    self.chrome = Some(Size::new(
                        (window.width - bounds.width).max(0.0),
                        (window.height - bounds.height).max(0.0),
                    ));
                }
                self.viewport = Some(Rectangle {
                    x: offset.x,
                    y: offset.y,
                    width: bounds.width,
                    height: bounds.height,
                });
                self.layout = GridLayout::for_width(bounds.width);
                self.request_visible()
            }
            Message::ThumbnailLoaded { index, result } => {
                match result {
                    Ok(data) => {
                        self.lazy.mark_loaded(index, data.width, data.height);
                        if let Some(slot) = self.thumbnails.get_mut(index) {
                            *slot = Some(data.handle);
                        }
                    }
                    Err(error) => {
                        tracing::debug!(index, %error, "thumbnail failed");
                        self.lazy.mark_failed(index);
                    }
                }
                Effect::None
            }
        }
    }

    /// Updates the viewport size after a window resize.
    ///
    /// Until the scrollable reports its bounds the whole window is assumed
    /// to be grid. Afterwards the surrounding chrome is subtracted.
    pub fn resize(&mut self, size: Size) -> Effect {
        self.window = Some(size);
        let chrome = self.chrome.unwrap_or(Size::ZERO);
        let width = (size.width - chrome.width).max(0.0);
        let (x, y) = self.viewport.map_or((0.0, 0.0), |v| (v.x, v.y));
        self.viewport = Some(Rectangle {
            x,
            y,
            width,
            height: (size.height - chrome.height).max(0.0),
        });
        self.layout = GridLayout::for_width(width);
        self.request_visible()
    }

    /// Handles a key while the lightbox is closed.
    pub fn handle_key(&mut self, key: InputKey) -> Effect {
        if key == InputKey::Activate {
            return self.focused.map_or(Effect::None, Effect::Open);
        }
        if key == InputKey::Escape {
            self.focused = None;
            return Effect::None;
        }

        let moved = move_focus(self.focused, key, self.layout.columns, self.lazy.len());
        if moved == self.focused {
            return Effect::None;
        }
        self.focused = moved;
        moved.map_or(Effect::None, |index| self.reveal(index))
    }

    /// Scroll offset that brings `index` fully into view, if it is not already.
    fn reveal(&self, index: usize) -> Effect {
        let Some(viewport) = self.viewport else {
            return Effect::None;
        };
        let item = self.layout.bounds(index);
        let padding = self.layout.padding;

        if item.y < viewport.y {
            Effect::ScrollTo((item.y - padding).max(0.0))
        } else if item.y + item.height > viewport.y + viewport.height {
            Effect::ScrollTo(item.y + item.height + padding - viewport.height)
        } else {
            Effect::None
        }
    }

    fn request_visible(&mut self) -> Effect {
        let layout = self.layout;
        let requested = self
            .lazy
            .request_visible(self.viewport, |index| layout.bounds(index));
        if requested.is_empty() {
            Effect::None
        } else {
            Effect::LoadThumbnails(requested)
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn thumbnail_state(&self, index: usize) -> Option<ThumbnailState> {
        self.lazy.state(index)
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn view<'a>(
        &'a self,
        images: &'a [ImageDescriptor],
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        if images.is_empty() {
            return container(text(i18n.tr("gallery-empty")).size(typography::TITLE_MD))
                .center(Length::Fill)
                .into();
        }

        let columns = self.layout.columns;
        let rows = images
            .chunks(columns)
            .enumerate()
            .map(|(row, chunk)| -> Element<'a, Message> {
                Row::with_children(chunk.iter().enumerate().map(|(col, descriptor)| {
                    self.item(row * columns + col, descriptor, i18n)
                }))
                .spacing(self.layout.gap)
                .into()
            });

        let grid = Column::with_children(rows)
            .spacing(self.layout.gap)
            .padding(self.layout.padding)
            .width(Length::Fill);

        Scrollable::new(grid)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::Scrolled {
                offset: viewport.absolute_offset(),
                bounds: viewport.bounds(),
            })
            .into()
    }

    fn item<'a>(
        &'a self,
        index: usize,
        descriptor: &'a ImageDescriptor,
        i18n: &'a I18n,
    ) -> Element<'a, Message> {
        let thumbnail = self.thumbnails.get(index).and_then(Option::as_ref);

        let content: Element<'a, Message> = match (self.lazy.state(index), thumbnail) {
            (Some(ThumbnailState::Loaded { aspect }), Some(handle)) => image(handle.clone())
                .content_fit(content_fit(aspect))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            (Some(ThumbnailState::Failed), _) => {
                container(text(i18n.tr("gallery-thumbnail-failed")).size(typography::BODY))
                    .center(Length::Fill)
                    .padding(spacing::XS)
                    .style(styles::container::thumbnail_placeholder(true))
                    .into()
            }
            _ => container(text(descriptor.alt_text.as_str()).size(typography::BODY))
                .center(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::thumbnail_placeholder(false))
                .into(),
        };

        let tile = button(content)
            .on_press(Message::ItemPressed(index))
            .padding(0)
            .width(Length::Fixed(self.layout.cell))
            .height(Length::Fixed(self.layout.cell))
            .style(styles::button::gallery_item(self.focused == Some(index)));

        let number = (index + 1).to_string();
        let label = i18n.tr_with_args("gallery-item-label", &[("index", number.as_str())]);
        styles::tooltip::styled(tile, label, Position::Bottom).into()
    }
}

/// Square thumbnails fill their cell; others are letterboxed.
fn content_fit(aspect: AspectClass) -> ContentFit {
    match aspect {
        AspectClass::Square => ContentFit::Cover,
        AspectClass::Portrait | AspectClass::Landscape => ContentFit::Contain,
    }
}
