// SPDX-License-Identifier: MPL-2.0
//! Error dialog store.
//!
//! The sink the rest of the application uses to surface a failure. Unlike the
//! confirm dialog, closing resets the text fields to their idle defaults.

use super::sanitize::strip_markup;
use crate::store::{Store, SubscriptionHandle};

/// Title shown when a caller gives none, and the idle title.
pub const DEFAULT_ERROR_TITLE: &str = "Error";

/// Idle message of a closed error dialog.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Observable state of the error dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialogState {
    pub is_open: bool,
    pub title: String,
    pub message: String,
}

impl Default for ErrorDialogState {
    fn default() -> Self {
        Self {
            is_open: false,
            title: DEFAULT_ERROR_TITLE.to_string(),
            message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

impl ErrorDialogState {
    /// The message as rendered: markup-like `<...>` substrings removed.
    #[must_use]
    pub fn display_message(&self) -> String {
        strip_markup(&self.message).into_owned()
    }
}

/// Store for the application's single error dialog.
#[derive(Debug, Default)]
pub struct ErrorDialogStore {
    store: Store<ErrorDialogState>,
}

impl ErrorDialogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` under `title`, or under [`DEFAULT_ERROR_TITLE`].
    ///
    /// A dialog that is already open is overwritten in place.
    pub fn open(&self, message: impl Into<String>, title: Option<String>) {
        let message = message.into();
        let title = title.unwrap_or_else(|| DEFAULT_ERROR_TITLE.to_string());
        tracing::debug!(%title, %message, "error dialog opened");
        self.store.replace_state(ErrorDialogState {
            is_open: true,
            title,
            message,
        });
    }

    /// Hides the dialog and restores the default title and message.
    pub fn close(&self) {
        if !self.is_open() {
            return;
        }
        tracing::debug!("error dialog closed");
        self.store.replace_state(ErrorDialogState::default());
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.store.with_state(|state| state.is_open)
    }

    #[must_use]
    pub fn state(&self) -> ErrorDialogState {
        self.store.get_state()
    }

    pub fn subscribe(&self, listener: impl Fn(&ErrorDialogState) + 'static) -> SubscriptionHandle {
        self.store.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_uses_defaults() {
        let state = ErrorDialogStore::new().state();
        assert!(!state.is_open);
        assert_eq!(state.title, "Error");
        assert_eq!(state.message, "Something went wrong");
    }

    #[test]
    fn open_without_title_uses_default_title() {
        let store = ErrorDialogStore::new();
        store.open("Could not reach the bank", None);

        let state = store.state();
        assert!(state.is_open);
        assert_eq!(state.title, "Error");
        assert_eq!(state.message, "Could not reach the bank");
    }

    #[test]
    fn open_with_title() {
        let store = ErrorDialogStore::new();
        store.open("Amount must be positive", Some("Invalid entry".to_string()));
        assert_eq!(store.state().title, "Invalid entry");
    }

    #[test]
    fn close_resets_title_and_message() {
        let store = ErrorDialogStore::new();
        store.open("Disk full", Some("Export failed".to_string()));

        store.close();
        assert_eq!(store.state(), ErrorDialogState::default());
    }

    #[test]
    fn second_open_overwrites_first() {
        let store = ErrorDialogStore::new();
        store.open("first", Some("One".to_string()));
        store.open("second", None);

        let state = store.state();
        assert_eq!(state.message, "second");
        assert_eq!(state.title, "Error");
    }

    #[test]
    fn display_message_strips_tags() {
        let store = ErrorDialogStore::new();
        store.open("bad <b>thing</b> happened", None);
        assert_eq!(store.state().display_message(), "bad thing happened");
        assert_eq!(store.state().message, "bad <b>thing</b> happened");
    }
}
