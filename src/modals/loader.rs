// SPDX-License-Identifier: MPL-2.0
//! Global busy indicator.
//!
//! There is no reference counting: overlapping operations share one flag and
//! the first `hide` wins. Callers that overlap work must coordinate the
//! hide themselves.

use crate::store::{Store, SubscriptionHandle};

/// Observable state of the loader overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderState {
    pub is_loading: bool,
    /// Status line under the spinner; empty when idle or not given.
    pub message: String,
}

#[derive(Debug, Default)]
pub struct LoaderStore {
    store: Store<LoaderState>,
}

impl LoaderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the loader on. While already on, only the message changes.
    pub fn show(&self, message: Option<String>) {
        let message = message.unwrap_or_default();
        tracing::debug!(%message, "loader shown");
        self.store.replace_state(LoaderState {
            is_loading: true,
            message,
        });
    }

    /// Turns the loader off and clears its message.
    pub fn hide(&self) {
        if self.store.with_state(|state| *state == LoaderState::default()) {
            return;
        }
        tracing::debug!("loader hidden");
        self.store.replace_state(LoaderState::default());
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.store.with_state(|state| state.is_loading)
    }

    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.store.get_state()
    }

    pub fn subscribe(&self, listener: impl Fn(&LoaderState) + 'static) -> SubscriptionHandle {
        self.store.subscribe(listener)
    }
}
