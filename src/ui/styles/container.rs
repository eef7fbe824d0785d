// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Placeholder surface for a thumbnail that has not been decoded yet.
///
/// Failed thumbnails use the same surface with dimmed text.
pub fn thumbnail_placeholder(failed: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let text = palette.background.base.text;
        let text_color = if failed {
            Color {
                a: opacity::DIMMED,
                ..text
            }
        } else {
            text
        };

        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: Some(text_color),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_placeholder_dims_text() {
        let normal = thumbnail_placeholder(false)(&Theme::Dark);
        let failed = thumbnail_placeholder(true)(&Theme::Dark);

        let normal_alpha = normal.text_color.map(|c| c.a).unwrap_or_default();
        let failed_alpha = failed.text_color.map(|c| c.a).unwrap_or_default();
        assert!(failed_alpha < normal_alpha);
    }
}
