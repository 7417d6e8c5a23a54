// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with screen tabs and the global ledger actions.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(Screen),
    Sync,
    Import,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let tab = |screen: Screen, key: &str| {
        button(Text::new(ctx.i18n.tr(key)))
            .on_press(Message::Open(screen))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::nav(ctx.screen == screen))
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(tab(Screen::Transactions, "nav-transactions"))
        .push(tab(Screen::Accounts, "nav-accounts"))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("action-import")))
                .on_press(Message::Import)
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("action-sync")))
                .on_press(Message::Sync)
                .style(styles::button::primary),
        );

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .style(styles::container::panel)
        .into()
}
