// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of the lightbox overlay.
//!
//! Layout:
//!
//! ```text
//! +--------------------------------------------+
//! |                                       [x]  |
//! |  [<]          image / spinner         [>]  |
//! |                  alt text                  |
//! |                  ( 2 / 5 )                 |
//! +--------------------------------------------+
//! ```
//!
//! A click or tap released on the backdrop closes the lightbox. The image
//! slot and the buttons claim their own presses and releases so they never
//! dismiss it, whatever they currently show.

use crate::i18n::fluent::I18n;
use crate::lightbox::{ImageSlot, Message, OverlayFrame, OverlayRenderer};
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::tooltip::Position;
use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};

/// Renders overlay frames as Iced elements.
pub struct IcedOverlay<'a> {
    i18n: &'a I18n,
}

impl<'a> IcedOverlay<'a> {
    #[must_use]
    pub fn new(i18n: &'a I18n) -> Self {
        Self { i18n }
    }

    fn image_area(&self, slot: ImageSlot) -> Element<'a, Message> {
        match slot {
            ImageSlot::Empty => content(Space::new()),
            ImageSlot::Spinner { rotation } => content(
                column![
                    AnimatedSpinner::new(WHITE, rotation).into_element(),
                    text(self.i18n.tr("lightbox-loading")).size(typography::BODY),
                ]
                .spacing(spacing::SM)
                .align_x(Alignment::Center),
            ),
            ImageSlot::Image(data) => content(
                image(data.handle)
                    .content_fit(ContentFit::ScaleDown)
                    .width(Length::Shrink)
                    .height(Length::Shrink),
            ),
            ImageSlot::Error(error) => content(
                container(text(self.i18n.tr(error.i18n_key())).size(typography::BODY))
                    .padding(spacing::LG)
                    .style(styles::overlay::error_card(radius::MD)),
            ),
        }
    }

    fn nav_button(
        &self,
        glyph: &'static str,
        label_key: &str,
        on_press: Option<Message>,
    ) -> Element<'a, Message> {
        let control = button(
            text(glyph)
                .size(typography::NAV_GLYPH)
                .center()
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .on_press_maybe(on_press)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

        // A disabled button lets presses through, so the wrapper keeps them off the backdrop.
        content(styles::tooltip::styled(
            control,
            self.i18n.tr(label_key),
            Position::Bottom,
        ))
    }
}

/// Claims presses and releases so they never reach the backdrop.
fn content<'a>(element: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    mouse_area(element)
        .on_press(Message::ContentPressed)
        .on_release(Message::ContentPressed)
        .into()
}

impl<'a> OverlayRenderer for IcedOverlay<'a> {
    type Output = Element<'a, Message>;

    fn render(&self, frame: OverlayFrame) -> Self::Output {
        if !frame.visible {
            return Space::new().into();
        }

        let close = self.nav_button("✕", "lightbox-close", Some(Message::Close));
        let previous = self.nav_button(
            "‹",
            "lightbox-previous",
            frame.previous_enabled.then_some(Message::Previous),
        );
        let next = self.nav_button(
            "›",
            "lightbox-next",
            frame.next_enabled.then_some(Message::Next),
        );

        let caption = text(frame.alt_text).size(typography::BODY);
        let counter: Element<'a, Message> = match frame.counter {
            Some(counter) => {
                let current = counter.current.to_string();
                let total = counter.total.to_string();
                let label = self.i18n.tr_with_args(
                    "lightbox-counter",
                    &[("current", current.as_str()), ("total", total.as_str())],
                );
                container(text(label).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::overlay::indicator(radius::FULL))
                    .into()
            }
            None => Space::new().into(),
        };

        let stage = container(self.image_area(frame.slot))
            .center(Length::Fill)
            .padding(spacing::MD);

        let center = column![stage, caption, counter]
            .spacing(spacing::SM)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .height(Length::Fill);

        let main = row![previous, center, next]
            .spacing(spacing::MD)
            .align_y(Alignment::Center)
            .height(Length::Fill);

        let top_bar = row![Space::new().width(Length::Fill), close];

        let content = column![top_bar, main]
            .padding(spacing::LG)
            .width(Length::Fill)
            .height(Length::Fill);

        mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::overlay::backdrop),
        )
        .on_release(Message::BackgroundPressed)
        .into()
    }
}
