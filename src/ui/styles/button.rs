// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(base: Color, hover: Color, border: Color, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: border,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base
            })),
            text_color: Color {
                a: opacity::OVERLAY_STRONG,
                ..WHITE
            },
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Main action of a dialog or screen ("Continue", "OK").
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::PRIMARY_500,
        palette::PRIMARY_400,
        palette::PRIMARY_600,
        status,
    )
}

/// Destructive row actions ("Delete", "Close").
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::ERROR_500,
        palette::ERROR_400,
        palette::ERROR_600,
        status,
    )
}

/// Secondary action ("Cancel"): outlined, theme-colored text.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navbar tab; `selected` marks the active screen.
pub fn nav(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            primary(theme, button::Status::Active)
        } else {
            secondary(theme, status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_and_danger_use_distinct_backgrounds() {
        let theme = Theme::Dark;
        let primary = primary(&theme, button::Status::Active);
        let danger = danger(&theme, button::Status::Active);
        assert_ne!(primary.background, danger.background);
    }

    #[test]
    fn secondary_is_transparent_at_rest() {
        let style = secondary(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn selected_nav_looks_primary() {
        let theme = Theme::Dark;
        let style = nav(true)(&theme, button::Status::Hovered);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }
}
