// SPDX-License-Identifier: MPL-2.0
//! App-wide confirm dialog, error dialog and loader.
//!
//! Any part of the application can ask for one of these artifacts through
//! [`ModalContext`] without holding a reference to the widget that draws it.
//! Exactly one renderer per store is mounted at the application root (see
//! `ui::modals`); it subscribes to the stores and draws nothing while they
//! are idle.
//!
//! # Components
//!
//! - [`confirm`] - Two-action dialog resolved through caller callbacks
//! - [`error_dialog`] - Single-action error sink with idle defaults
//! - [`loader`] - Busy indicator without reference counting
//! - [`context`] - The context object callers receive
//! - [`sanitize`] - Plain-text rendering of error messages
//!
//! # Usage
//!
//! ```
//! use budget_desk::modals::{ConfirmRequest, ModalContext, Resolution};
//!
//! let modals = ModalContext::new();
//! modals.open_confirm(
//!     ConfirmRequest::new("Delete transaction?")
//!         .message("This cannot be undone")
//!         .on_confirm(|| println!("removed")),
//! );
//! modals.resolve_confirm(Resolution::Continue);
//! assert!(!modals.confirm_dialog().is_open());
//! ```
//!
//! # Behavior Worth Knowing
//!
//! - Every store keeps one request. A new request replaces the pending one
//!   and the replaced callbacks never run.
//! - Closing the confirm dialog keeps its text; closing the error dialog
//!   restores "Error" / "Something went wrong".
//! - Two `show_loader` calls and one `hide_loader` leave the loader idle.

pub mod confirm;
pub mod context;
pub mod error_dialog;
pub mod loader;
pub mod sanitize;

pub use confirm::{Callback, ConfirmDialogState, ConfirmDialogStore, ConfirmRequest, Resolution};
pub use context::{Confirmation, ModalContext, MountGuard, PendingConfirmation};
pub use error_dialog::{
    ErrorDialogState, ErrorDialogStore, DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_TITLE,
};
pub use loader::{LoaderState, LoaderStore};
