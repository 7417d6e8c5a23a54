// SPDX-License-Identifier: MPL-2.0
//! Confirm dialog store.
//!
//! Holds the one confirm request the application may show at a time. The
//! request's callbacks live next to the observable snapshot rather than
//! inside it, so overwriting a request drops the previous callbacks at once
//! and snapshots stay cheap to clone and compare.

use crate::store::{Store, SubscriptionHandle};
use std::cell::RefCell;
use std::fmt;

/// Zero-argument callback run when the user resolves a confirm dialog.
pub type Callback = Box<dyn FnOnce()>;

/// Observable part of the confirm dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub is_open: bool,
    pub title: String,
    pub message: Option<String>,
}

/// How the user answered a confirm dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// "Continue" was pressed.
    Continue,
    /// "Cancel" was pressed.
    Cancel,
    /// Backdrop click or Escape. Treated exactly like [`Resolution::Cancel`].
    Dismissed,
}

/// A confirm request built by callers and handed to the store.
///
/// ```
/// use budget_desk::modals::ConfirmRequest;
///
/// let request = ConfirmRequest::new("Delete?")
///     .message("This cannot be undone")
///     .on_confirm(|| println!("deleted"));
/// assert_eq!(request.title(), "Delete?");
/// ```
pub struct ConfirmRequest {
    title: String,
    message: Option<String>,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl ConfirmRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            on_confirm: None,
            on_cancel: None,
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn on_confirm(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Appends `next` to the confirm callback, running after any existing one.
    pub(crate) fn then_on_confirm(&mut self, next: impl FnOnce() + 'static) {
        self.on_confirm = Some(chain(self.on_confirm.take(), next));
    }

    /// Appends `next` to the cancel callback, running after any existing one.
    pub(crate) fn then_on_cancel(&mut self, next: impl FnOnce() + 'static) {
        self.on_cancel = Some(chain(self.on_cancel.take(), next));
    }
}

fn chain(first: Option<Callback>, next: impl FnOnce() + 'static) -> Callback {
    Box::new(move || {
        if let Some(first) = first {
            first();
        }
        next();
    })
}

impl fmt::Debug for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmRequest")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Handlers {
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl Handlers {
    fn is_empty(&self) -> bool {
        self.on_confirm.is_none() && self.on_cancel.is_none()
    }
}

/// Store for the application's single confirm dialog.
///
/// Last write wins: opening a new request while one is pending replaces it,
/// and the replaced request's callbacks are dropped without running.
#[derive(Default)]
pub struct ConfirmDialogStore {
    store: Store<ConfirmDialogState>,
    handlers: RefCell<Handlers>,
}

impl ConfirmDialogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `request`, replacing whatever was pending.
    pub fn open(&self, request: ConfirmRequest) {
        let ConfirmRequest {
            title,
            message,
            on_confirm,
            on_cancel,
        } = request;

        let abandoned = self.handlers.replace(Handlers {
            on_confirm,
            on_cancel,
        });
        if self.is_open() {
            tracing::debug!(
                previous = %self.store.with_state(|state| state.title.clone()),
                next = %title,
                had_callbacks = !abandoned.is_empty(),
                "confirm dialog overwritten"
            );
        }
        drop(abandoned);

        tracing::debug!(%title, "confirm dialog opened");
        self.store.set_state(|state| {
            state.is_open = true;
            state.title = title;
            state.message = message;
        });
    }

    /// Hides the dialog. Title and message stay as they were.
    ///
    /// Pending callbacks are dropped since nothing can reach them any more.
    /// Does nothing when the dialog is already closed.
    pub fn close(&self) {
        drop(self.handlers.take());
        if !self.is_open() {
            return;
        }
        tracing::debug!("confirm dialog closed");
        self.store.set_state(|state| state.is_open = false);
    }

    /// Applies the user's answer: runs the matching callback, then closes.
    ///
    /// A panic inside the callback is not caught, and the dialog then stays
    /// open. Ignored when the dialog is closed.
    pub fn resolve(&self, resolution: Resolution) {
        if !self.is_open() {
            tracing::debug!(?resolution, "resolution ignored, confirm dialog is closed");
            return;
        }

        let Handlers {
            on_confirm,
            on_cancel,
        } = self.handlers.take();
        let (chosen, discarded) = match resolution {
            Resolution::Continue => (on_confirm, on_cancel),
            Resolution::Cancel | Resolution::Dismissed => (on_cancel, on_confirm),
        };
        drop(discarded);

        tracing::debug!(?resolution, "confirm dialog resolved");
        if let Some(callback) = chosen {
            callback();
        }
        self.close();
    }

    pub fn confirm(&self) {
        self.resolve(Resolution::Continue);
    }

    pub fn cancel(&self) {
        self.resolve(Resolution::Cancel);
    }

    pub fn dismiss(&self) {
        self.resolve(Resolution::Dismissed);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.store.with_state(|state| state.is_open)
    }

    #[must_use]
    pub fn state(&self) -> ConfirmDialogState {
        self.store.get_state()
    }

    /// Whether the current request still holds a callback.
    #[must_use]
    pub fn has_pending_callbacks(&self) -> bool {
        !self.handlers.borrow().is_empty()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&ConfirmDialogState) + 'static,
    ) -> SubscriptionHandle {
        self.store.subscribe(listener)
    }
}

impl fmt::Debug for ConfirmDialogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmDialogStore")
            .field("state", &self.store.get_state())
            .field("pending_callbacks", &self.has_pending_callbacks())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        (count, move || sink.set(sink.get() + 1))
    }

    fn delete_request() -> (ConfirmRequest, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let (confirmed, on_confirm) = counter();
        let (cancelled, on_cancel) = counter();
        let request = ConfirmRequest::new("Delete?")
            .message("This cannot be undone")
            .on_confirm(on_confirm)
            .on_cancel(on_cancel);
        (request, confirmed, cancelled)
    }

    #[test]
    fn new_store_is_closed() {
        let store = ConfirmDialogStore::new();
        assert_eq!(store.state(), ConfirmDialogState::default());
        assert!(!store.has_pending_callbacks());
    }

    #[test]
    fn open_sets_fields() {
        let store = ConfirmDialogStore::new();
        let (request, _, _) = delete_request();
        store.open(request);

        let state = store.state();
        assert!(state.is_open);
        assert_eq!(state.title, "Delete?");
        assert_eq!(state.message.as_deref(), Some("This cannot be undone"));
        assert!(store.has_pending_callbacks());
    }

    #[test]
    fn continue_runs_confirm_once_then_closes() {
        let store = ConfirmDialogStore::new();
        let (request, confirmed, cancelled) = delete_request();
        store.open(request);

        store.confirm();
        assert_eq!(confirmed.get(), 1);
        assert_eq!(cancelled.get(), 0);
        assert!(!store.is_open());

        store.confirm();
        assert_eq!(confirmed.get(), 1);
    }

    #[test]
    fn cancel_runs_cancel_once_and_never_confirm() {
        let store = ConfirmDialogStore::new();
        let (request, confirmed, cancelled) = delete_request();
        store.open(request);

        store.cancel();
        store.cancel();
        assert_eq!(cancelled.get(), 1);
        assert_eq!(confirmed.get(), 0);
        assert!(!store.is_open());
    }

    #[test]
    fn dismiss_behaves_like_cancel() {
        let store = ConfirmDialogStore::new();
        let (request, confirmed, cancelled) = delete_request();
        store.open(request);

        store.dismiss();
        assert_eq!(cancelled.get(), 1);
        assert_eq!(confirmed.get(), 0);
        assert!(!store.is_open());
    }

    #[test]
    fn resolve_without_callbacks_still_closes() {
        let store = ConfirmDialogStore::new();
        store.open(ConfirmRequest::new("Proceed?"));
        store.confirm();
        assert!(!store.is_open());
    }

    #[test]
    fn close_keeps_title_and_message() {
        let store = ConfirmDialogStore::new();
        let (request, confirmed, cancelled) = delete_request();
        store.open(request);

        store.close();
        let state = store.state();
        assert!(!state.is_open);
        assert_eq!(state.title, "Delete?");
        assert_eq!(state.message.as_deref(), Some("This cannot be undone"));
        assert!(!store.has_pending_callbacks());
        assert_eq!(confirmed.get() + cancelled.get(), 0);
    }

    #[test]
    fn close_when_closed_does_not_notify() {
        let store = ConfirmDialogStore::new();
        let notified = Rc::new(Cell::new(0));
        let sink = Rc::clone(&notified);
        let _handle = store.subscribe(move |_| sink.set(sink.get() + 1));

        store.close();
        assert_eq!(notified.get(), 0);
    }

    #[test]
    fn reopening_abandons_previous_callbacks() {
        let store = ConfirmDialogStore::new();
        let (first, first_confirmed, first_cancelled) = delete_request();
        let (second, second_confirmed, _) = delete_request();
        store.open(first);
        store.open(second.message("Second request"));

        assert_eq!(
            store.state().message.as_deref(),
            Some("Second request")
        );

        store.confirm();
        assert_eq!(second_confirmed.get(), 1);
        assert_eq!(first_confirmed.get(), 0);
        assert_eq!(first_cancelled.get(), 0);
    }

    #[test]
    fn subscribers_observe_open_and_close() {
        let store = ConfirmDialogStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _handle = store.subscribe(move |state| sink.borrow_mut().push(state.is_open));

        store.open(ConfirmRequest::new("Archive?"));
        store.cancel();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn callback_may_call_back_into_store() {
        let store = Rc::new(ConfirmDialogStore::new());
        let weak = Rc::downgrade(&store);
        store.open(ConfirmRequest::new("Outer").on_confirm(move || {
            if let Some(store) = weak.upgrade() {
                store.open(ConfirmRequest::new("Inner"));
            }
        }));

        store.confirm();

        // The close that follows every resolution also closes a request
        // opened from inside the callback.
        let state = store.state();
        assert!(!state.is_open);
        assert_eq!(state.title, "Inner");
    }

    #[test]
    fn chained_callbacks_run_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        let mut request =
            ConfirmRequest::new("Chain").on_confirm(move || first.borrow_mut().push("caller"));
        request.then_on_confirm(move || second.borrow_mut().push("chained"));

        let store = ConfirmDialogStore::new();
        store.open(request);
        store.confirm();

        assert_eq!(*order.borrow(), vec!["caller", "chained"]);
    }
}
