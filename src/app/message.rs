// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::ledger::{AccountId, TransactionId};
use crate::modals::Confirmation;
use crate::ui::{modals, navbar};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Modal(modals::Message),
    Navbar(navbar::Message),
    /// Ask before deleting a transaction.
    DeleteTransaction(TransactionId),
    DeleteAnswered {
        id: TransactionId,
        outcome: Confirmation,
    },
    DeleteCompleted(TransactionId),
    /// Ask before closing an account.
    CloseAccount(AccountId),
    CloseAccountAnswered {
        id: AccountId,
        outcome: Confirmation,
    },
    CloseAccountCompleted(AccountId),
    Sync,
    SyncFinished,
    Import,
    /// Auto-dismiss timer for the error dialog opened at this generation.
    ErrorTimeout(u64),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BUDGET_DESK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional `tracing` filter; overrides `[logging] level`.
    pub log_level: Option<String>,
}
