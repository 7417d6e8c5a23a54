// SPDX-License-Identifier: MPL-2.0
//! Confirm dialog: title, optional message, "Cancel" and "Continue".

use super::{modal, Message};
use crate::i18n::fluent::I18n;
use crate::modals::{ConfirmDialogState, Resolution};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, overlay};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the open confirm dialog, or nothing when it is closed.
///
/// With `dismiss_on_backdrop`, a click outside the card resolves the request
/// as [`Resolution::Dismissed`].
pub fn view(
    state: &ConfirmDialogState,
    i18n: &I18n,
    dismiss_on_backdrop: bool,
) -> Option<Element<'static, Message>> {
    if !state.is_open {
        return None;
    }

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(state.title.clone()).size(typography::TITLE_MD));

    if let Some(message) = &state.message {
        content = content.push(Text::new(message.clone()).size(typography::BODY));
    }

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("button-cancel")))
                .on_press(Message::Resolve(Resolution::Cancel))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(button_styles::secondary),
        )
        .push(
            button(Text::new(i18n.tr("button-continue")))
                .on_press(Message::Resolve(Resolution::Continue))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .style(button_styles::primary),
        );

    content = content.push(
        Container::new(actions)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
    );

    let card = Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(overlay::dialog(None));

    Some(modal(card.into(), backdrop_message(dismiss_on_backdrop)))
}

/// What a click on the dimmed area around the card emits.
fn backdrop_message(dismiss_on_backdrop: bool) -> Option<Message> {
    dismiss_on_backdrop.then_some(Message::Resolve(Resolution::Dismissed))
}
