// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Screens render below the navbar; the modal layer is stacked on top of the
//! whole tree by `App::view`, so it stays put when the screen changes.

use super::ledger::{Account, Amount, Ledger, Transaction};
use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, scrollable, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub ledger: &'a Ledger,
}

/// Renders the navbar and the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view = match ctx.screen {
        Screen::Transactions => view_transactions(ctx.ledger, ctx.i18n),
        Screen::Accounts => view_accounts(ctx.ledger, ctx.i18n),
    };

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .padding(spacing::LG)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_transactions<'a>(ledger: &'a Ledger, i18n: &'a I18n) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = ledger
        .transactions()
        .iter()
        .map(|t| transaction_row(t, i18n))
        .collect();

    screen(i18n.tr("transactions-title"), rows, i18n.tr("transactions-empty"))
}

fn view_accounts<'a>(ledger: &'a Ledger, i18n: &'a I18n) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = ledger
        .accounts()
        .iter()
        .filter(|a| !a.closed)
        .map(|a| account_row(a, i18n))
        .collect();

    screen(i18n.tr("accounts-title"), rows, i18n.tr("accounts-empty"))
}

fn screen<'a>(
    title: String,
    rows: Vec<Element<'a, Message>>,
    empty: String,
) -> Element<'a, Message> {
    let header = Text::new(title).size(typography::TITLE_LG);

    let body: Element<'a, Message> = if rows.is_empty() {
        Text::new(empty).size(typography::BODY).into()
    } else {
        scrollable(Column::with_children(rows).spacing(spacing::XS))
            .height(Length::Fill)
            .into()
    };

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(body)
        .into()
}

fn transaction_row<'a>(transaction: &'a Transaction, i18n: &'a I18n) -> Element<'a, Message> {
    let amount = transaction.amount_cents;
    let amount_text = Text::new(Amount(amount).to_string())
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(if amount < 0 {
                palette::ERROR_400
            } else {
                palette::SUCCESS_500
            }),
        });

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(transaction.date.as_str()).size(typography::CAPTION))
        .push(Text::new(transaction.payee.as_str()).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(amount_text)
        .push(
            button(Text::new(i18n.tr("action-delete")))
                .on_press(Message::DeleteTransaction(transaction.id))
                .style(styles::button::danger),
        );

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn account_row<'a>(account: &'a Account, i18n: &'a I18n) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(account.name.as_str()).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(Amount(account.balance_cents).to_string()).size(typography::BODY))
        .push(
            button(Text::new(i18n.tr("action-close-account")))
                .on_press(Message::CloseAccount(account.id))
                .style(styles::button::danger),
        );

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}
