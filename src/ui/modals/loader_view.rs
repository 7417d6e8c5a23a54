// SPDX-License-Identifier: MPL-2.0
//! Full-screen loading overlay.

use super::{modal, Message};
use crate::modals::LoaderState;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::widgets::spinner::Spinner;
use iced::widget::{text, Column, Text};
use iced::{Alignment, Element, Theme};

/// Spinner plus the optional message; swallows all pointer input below it.
pub fn view(state: &LoaderState, rotation: f32) -> Option<Element<'static, Message>> {
    if !state.is_loading {
        return None;
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(Spinner::new(palette::PRIMARY_400, rotation).into_element());

    if !state.message.is_empty() {
        content = content.push(
            Text::new(state.message.clone())
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::WHITE),
                }),
        );
    }

    Some(modal(content.into(), None))
}
