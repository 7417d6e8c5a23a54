// SPDX-License-Identifier: MPL-2.0
//! Modal backdrop and dialog card styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed full-window layer behind a modal.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Dialog card surface; `accent` colors the border.
pub fn dialog(accent: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                color: accent.unwrap_or(palette.background.strong.color),
                width: 1.0,
                radius: radius::LG.into(),
            },
            shadow: shadow::LG,
            text_color: Some(palette.background.base.text),
            ..Default::default()
        }
    }
}

/// Accent for the error dialog border and title.
#[must_use]
pub fn error_accent() -> Color {
    palette::ERROR_500
}
