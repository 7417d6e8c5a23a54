// SPDX-License-Identifier: MPL-2.0
//! Error dialog with a single "OK" action.
//!
//! The message goes through [`ErrorDialogState::display_message`], so markup
//! embedded by callers is shown as plain text.

use super::{modal, Message};
use crate::i18n::fluent::I18n;
use crate::modals::ErrorDialogState;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, overlay};
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view(state: &ErrorDialogState, i18n: &I18n) -> Option<Element<'static, Message>> {
    if !state.is_open {
        return None;
    }

    let accent = overlay::error_accent();

    let title = Text::new(state.title.clone())
        .size(typography::TITLE_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let ok = button(Text::new(i18n.tr("button-ok")))
        .on_press(Message::DismissError)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(button_styles::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(Text::new(state.display_message()).size(typography::BODY))
        .push(
            Container::new(ok)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
        );

    let card = Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(overlay::dialog(Some(accent)));

    // Only "OK" closes the error dialog.
    Some(modal(card.into(), None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn renders_only_when_open() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(view(&ErrorDialogState::default(), &i18n).is_none());

        let open = ErrorDialogState {
            is_open: true,
            ..ErrorDialogState::default()
        };
        assert!(view(&open, &i18n).is_some());
    }
}
