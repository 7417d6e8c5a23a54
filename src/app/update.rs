// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Ledger actions follow one pattern: ask through the confirm dialog, show
//! the loader while the work runs, then hide it. Failures go to the error
//! dialog.

use super::ledger::{AccountId, Ledger, TransactionId};
use super::{Message, Screen};
use crate::config::DialogsConfig;
use crate::i18n::fluent::I18n;
use crate::modals::{Confirmation, ConfirmRequest, ModalContext};
use crate::ui::navbar;
use iced::Task;
use std::time::Duration;

/// How long simulated ledger work keeps the loader up.
pub const WORK_DURATION: Duration = Duration::from_millis(600);
pub const SYNC_DURATION: Duration = Duration::from_millis(1500);

/// Statement format named by the import error.
const IMPORT_FORMAT: &str = "OFX";

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub ledger: &'a mut Ledger,
    pub modals: &'a ModalContext,
    pub dialogs: &'a DialogsConfig,
    pub error_generation: &'a mut u64,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Open(screen) => {
            *ctx.screen = screen;
            Task::none()
        }
        navbar::Message::Sync => start_sync(ctx),
        navbar::Message::Import => handle_import(ctx),
    }
}

pub fn request_delete_transaction(ctx: &mut UpdateContext<'_>, id: TransactionId) -> Task<Message> {
    let Some(transaction) = ctx.ledger.transaction(id) else {
        tracing::warn!(id, "delete requested for unknown transaction");
        return Task::none();
    };

    let request = ConfirmRequest::new(ctx.i18n.tr("confirm-delete-transaction-title")).message(
        ctx.i18n.tr_with_args(
            "confirm-delete-transaction-message",
            &[("payee", transaction.payee.as_str())],
        ),
    );
    let pending = ctx.modals.ask(request);

    Task::perform(pending.outcome(), move |outcome| Message::DeleteAnswered {
        id,
        outcome,
    })
}

pub fn handle_delete_answered(
    ctx: &mut UpdateContext<'_>,
    id: TransactionId,
    outcome: Confirmation,
) -> Task<Message> {
    if outcome != Confirmation::Confirmed {
        tracing::debug!(id, ?outcome, "transaction delete not confirmed");
        return Task::none();
    }

    ctx.modals
        .show_loader(Some(ctx.i18n.tr("loader-deleting")));
    after(WORK_DURATION, Message::DeleteCompleted(id))
}

pub fn handle_delete_completed(ctx: &mut UpdateContext<'_>, id: TransactionId) -> Task<Message> {
    if let Some(removed) = ctx.ledger.remove_transaction(id) {
        tracing::info!(id, payee = %removed.payee, "transaction deleted");
    }
    ctx.modals.hide_loader();
    Task::none()
}

pub fn request_close_account(ctx: &mut UpdateContext<'_>, id: AccountId) -> Task<Message> {
    let Some(account) = ctx.ledger.account(id) else {
        tracing::warn!(id, "close requested for unknown account");
        return Task::none();
    };

    let request = ConfirmRequest::new(ctx.i18n.tr("confirm-close-account-title")).message(
        ctx.i18n.tr_with_args(
            "confirm-close-account-message",
            &[("name", account.name.as_str())],
        ),
    );
    let pending = ctx.modals.ask(request);

    Task::perform(pending.outcome(), move |outcome| {
        Message::CloseAccountAnswered { id, outcome }
    })
}

pub fn handle_close_account_answered(
    ctx: &mut UpdateContext<'_>,
    id: AccountId,
    outcome: Confirmation,
) -> Task<Message> {
    if outcome != Confirmation::Confirmed {
        tracing::debug!(id, ?outcome, "account close not confirmed");
        return Task::none();
    }

    ctx.modals
        .show_loader(Some(ctx.i18n.tr("loader-closing-account")));
    after(WORK_DURATION, Message::CloseAccountCompleted(id))
}

pub fn handle_close_account_completed(ctx: &mut UpdateContext<'_>, id: AccountId) -> Task<Message> {
    if ctx.ledger.close_account(id) {
        tracing::info!(id, "account closed");
    }
    ctx.modals.hide_loader();
    Task::none()
}

pub fn start_sync(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    tracing::info!("account sync started");
    ctx.modals.show_loader(Some(ctx.i18n.tr("loader-syncing")));
    after(SYNC_DURATION, Message::SyncFinished)
}

pub fn handle_sync_finished(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.modals.hide_loader();

    if ctx.ledger.open_account_count() == 0 {
        let message = ctx.i18n.tr("error-sync-no-accounts");
        let title = ctx.i18n.tr("error-sync-title");
        return open_error(ctx, message, Some(title));
    }
    tracing::info!("account sync finished");
    Task::none()
}

pub fn handle_import(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let message = ctx
        .i18n
        .tr_with_args("error-import-unavailable", &[("format", IMPORT_FORMAT)]);
    let title = ctx.i18n.tr("error-import-title");
    open_error(ctx, message, Some(title))
}

/// Closes the error dialog, unless a newer error replaced the timed one.
pub fn handle_error_timeout(ctx: &mut UpdateContext<'_>, generation: u64) -> Task<Message> {
    if generation == *ctx.error_generation {
        ctx.modals.close_error();
    }
    Task::none()
}

/// Shows the error dialog and arms the auto-dismiss timer when configured.
pub fn open_error(
    ctx: &mut UpdateContext<'_>,
    message: String,
    title: Option<String>,
) -> Task<Message> {
    ctx.modals.open_error(message, title);
    *ctx.error_generation += 1;

    match ctx.dialogs.error_auto_dismiss() {
        Some(delay) => after(delay, Message::ErrorTimeout(*ctx.error_generation)),
        None => Task::none(),
    }
}

fn after(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(
        async move { tokio::time::sleep(delay).await },
        move |()| message.clone(),
    )
}
