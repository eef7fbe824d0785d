// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for lightbox overlay buttons (previous, next, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (alpha, text_color) = match status {
            button::Status::Hovered => (alpha_hover, text_color),
            button::Status::Pressed => (opacity::OVERLAY_PRESSED, text_color),
            button::Status::Disabled => (
                opacity::OVERLAY_SUBTLE,
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..text_color
                },
            ),
            button::Status::Active => (alpha_normal, text_color),
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for a gallery grid item. Focused items get a brand-colored ring.
pub fn gallery_item(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.weak.color;
        let ring = match (focused, status) {
            (true, _) => Border {
                color: palette::PRIMARY_500,
                width: 3.0,
                radius: radius::MD.into(),
            },
            (false, button::Status::Hovered) => Border {
                color: palette::PRIMARY_400,
                width: 1.0,
                radius: radius::MD.into(),
            },
            _ => Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
        };

        button::Style {
            background: Some(Background::Color(base)),
            text_color: theme.extended_palette().background.base.text,
            border: ring,
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::SM
            },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn disabled_overlay_button_fades_text() {
        let style = overlay(WHITE, 0.5, 0.8)(&Theme::Dark, button::Status::Disabled);
        assert!(style.text_color.a < 1.0);
    }

    #[test]
    fn focused_gallery_item_has_brand_ring() {
        let style = gallery_item(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert!(style.border.width > 1.0);

        let unfocused = gallery_item(false)(&Theme::Light, button::Status::Active);
        assert_eq!(unfocused.border.width, 0.0);
    }
}
