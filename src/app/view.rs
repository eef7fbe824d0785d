// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid is always rendered. While the lightbox is open its overlay is
//! stacked on top inside an `opaque` layer, so presses and wheel scrolling
//! never reach the grid underneath.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery_grid;
use crate::ui::lightbox_overlay::IcedOverlay;
use iced::widget::{column, container, opaque, text, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub lightbox: &'a Lightbox,
    pub grid: &'a gallery_grid::State,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid = ctx
        .grid
        .view(ctx.lightbox.images(), ctx.i18n)
        .map(Message::Grid);

    let mut base = column![].width(Length::Fill).height(Length::Fill);
    if let Some(notice) = ctx.notice {
        base = base.push(
            container(text(notice).size(typography::BODY_SM).style(text::danger))
                .padding([spacing::XS, spacing::MD])
                .width(Length::Fill),
        );
    }
    base = base.push(grid);

    if !ctx.lightbox.locks_background_scroll() {
        return base.into();
    }

    let overlay = ctx
        .lightbox
        .render(&IcedOverlay::new(ctx.i18n))
        .map(Message::Lightbox);

    Stack::new()
        .push(base)
        .push(opaque(overlay))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
