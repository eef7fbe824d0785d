// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Components return [`Effect`](lightbox::Effect) values; this module turns
//! them into Iced tasks that decode images on the blocking pool and report
//! back as messages.

use super::Message;
use crate::config::THUMBNAIL_MAX_DIMENSION;
use crate::lightbox::{self, Input, Lightbox};
use crate::media::loader::{load_async, load_thumbnail_async};
use crate::media::SharedLoader;
use crate::ui::gallery_grid;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable view of the application state needed by [`update`].
pub struct UpdateContext<'a> {
    pub lightbox: &'a mut Lightbox,
    pub grid: &'a mut gallery_grid::State,
    pub loader: &'a SharedLoader,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Lightbox(message) => {
            let effect = ctx.lightbox.handle(message);
            lightbox_task(ctx.loader, effect)
        }
        Message::Grid(message) => {
            let effect = ctx.grid.handle(message);
            grid_task(ctx, effect)
        }
        Message::Input(input) => handle_input(ctx, input),
        Message::WindowResized(size) => {
            let effect = ctx.grid.resize(size);
            grid_task(ctx, effect)
        }
    }
}

/// Routes input to the lightbox while it is open, otherwise to the grid.
fn handle_input(ctx: &mut UpdateContext<'_>, input: Input) -> Task<Message> {
    if ctx.lightbox.is_open() {
        let effect = ctx.lightbox.handle(lightbox::Message::Input(input));
        return lightbox_task(ctx.loader, effect);
    }

    match input {
        Input::Key(key) => {
            let effect = ctx.grid.handle_key(key);
            grid_task(ctx, effect)
        }
        Input::TouchStarted(_) | Input::TouchEnded(_) | Input::TouchLost => Task::none(),
    }
}

/// Converts a lightbox effect into decoding tasks.
pub fn lightbox_task(loader: &SharedLoader, effect: lightbox::Effect) -> Task<Message> {
    match effect {
        lightbox::Effect::None => Task::none(),
        lightbox::Effect::LoadImage { ticket, source } => {
            Task::perform(load_async(loader.clone(), source), move |(_, result)| {
                Message::Lightbox(lightbox::Message::ImageLoaded { ticket, result })
            })
        }
        lightbox::Effect::Preload(sources) => Task::batch(sources.into_iter().map(|source| {
            Task::perform(load_async(loader.clone(), source), |(source, result)| {
                Message::Lightbox(lightbox::Message::Preloaded { source, result })
            })
        })),
    }
}

/// Converts a grid effect into tasks.
pub fn grid_task(ctx: &mut UpdateContext<'_>, effect: gallery_grid::Effect) -> Task<Message> {
    match effect {
        gallery_grid::Effect::None => Task::none(),
        gallery_grid::Effect::Open(index) => {
            let index = isize::try_from(index).unwrap_or(isize::MAX);
            let effect = ctx.lightbox.open(index);
            lightbox_task(ctx.loader, effect)
        }
        gallery_grid::Effect::LoadThumbnails(indices) => {
            let images = ctx.lightbox.images();
            let tasks: Vec<_> = indices
                .into_iter()
                .filter_map(|index| {
                    let source = images.get(index)?.source.clone();
                    Some(Task::perform(
                        load_thumbnail_async(ctx.loader.clone(), source, THUMBNAIL_MAX_DIMENSION),
                        move |(_, result)| {
                            Message::Grid(gallery_grid::Message::ThumbnailLoaded { index, result })
                        },
                    ))
                })
                .collect();
            Task::batch(tasks)
        }
        gallery_grid::Effect::ScrollTo(y) => operation::scroll_to(
            Id::new(gallery_grid::SCROLLABLE_ID),
            AbsoluteOffset { x: 0.0, y },
        ),
    }
}
