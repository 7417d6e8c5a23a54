// SPDX-License-Identifier: MPL-2.0
//! Application-wide modal context.
//!
//! One `ModalContext` is built at startup and passed by reference to every
//! caller that needs to confirm, report an error, or show the loader. Tests
//! build a fresh context each.

use super::confirm::{ConfirmDialogStore, ConfirmRequest, Resolution};
use super::error_dialog::ErrorDialogStore;
use super::loader::LoaderStore;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tokio::sync::oneshot;

/// Final answer observed by a caller awaiting a confirm request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
    /// The request was overwritten or closed before the user answered.
    Abandoned,
}

/// Awaitable side of [`ModalContext::ask`].
#[derive(Debug)]
pub struct PendingConfirmation {
    receiver: oneshot::Receiver<Confirmation>,
    /// Answer already taken out of the channel by `try_outcome`.
    received: Option<Confirmation>,
}

impl PendingConfirmation {
    /// Waits for the user's answer.
    pub async fn outcome(self) -> Confirmation {
        if let Some(confirmation) = self.received {
            return confirmation;
        }
        self.receiver.await.unwrap_or(Confirmation::Abandoned)
    }

    /// Returns the answer if it is already known, without waiting.
    ///
    /// Once known, the same answer is returned on every call.
    pub fn try_outcome(&mut self) -> Option<Confirmation> {
        if self.received.is_none() {
            self.received = match self.receiver.try_recv() {
                Ok(confirmation) => Some(confirmation),
                Err(oneshot::error::TryRecvError::Closed) => Some(Confirmation::Abandoned),
                Err(oneshot::error::TryRecvError::Empty) => None,
            };
        }
        self.received
    }
}

/// Proof that the modal layer is mounted. Dropping it frees the slot.
#[derive(Debug)]
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.mounted.set(false);
    }
}

/// Owner of the confirm, error and loader stores.
#[derive(Default)]
pub struct ModalContext {
    confirm: ConfirmDialogStore,
    error: ErrorDialogStore,
    loader: LoaderStore,
    mounted: Rc<Cell<bool>>,
}

impl ModalContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_confirm(&self, request: ConfirmRequest) {
        self.confirm.open(request);
    }

    pub fn close_confirm(&self) {
        self.confirm.close();
    }

    pub fn resolve_confirm(&self, resolution: Resolution) {
        self.confirm.resolve(resolution);
    }

    /// Opens `request` and hands back a future-friendly view of its answer.
    ///
    /// Callbacks already set on `request` still run, before the answer is
    /// delivered.
    pub fn ask(&self, mut request: ConfirmRequest) -> PendingConfirmation {
        let (sender, receiver) = oneshot::channel();
        let reply = Rc::new(RefCell::new(Some(sender)));

        let on_confirm_reply = Rc::clone(&reply);
        request.then_on_confirm(move || send(&on_confirm_reply, Confirmation::Confirmed));
        request.then_on_cancel(move || send(&reply, Confirmation::Cancelled));

        self.confirm.open(request);
        PendingConfirmation {
            receiver,
            received: None,
        }
    }

    pub fn open_error(&self, message: impl Into<String>, title: Option<String>) {
        self.error.open(message, title);
    }

    pub fn close_error(&self) {
        self.error.close();
    }

    pub fn show_loader(&self, message: Option<String>) {
        self.loader.show(message);
    }

    pub fn hide_loader(&self) {
        self.loader.hide();
    }

    #[must_use]
    pub fn confirm_dialog(&self) -> &ConfirmDialogStore {
        &self.confirm
    }

    #[must_use]
    pub fn error_dialog(&self) -> &ErrorDialogStore {
        &self.error
    }

    #[must_use]
    pub fn loader(&self) -> &LoaderStore {
        &self.loader
    }

    /// Claims the single render slot, or `None` if a layer already holds it.
    #[must_use]
    pub fn claim_mount(&self) -> Option<MountGuard> {
        if self.mounted.replace(true) {
            return None;
        }
        Some(MountGuard {
            mounted: Rc::clone(&self.mounted),
        })
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }
}

fn send(reply: &RefCell<Option<oneshot::Sender<Confirmation>>>, confirmation: Confirmation) {
    if let Some(sender) = reply.borrow_mut().take() {
        // The caller may have stopped waiting; that is not an error here.
        let _ = sender.send(confirmation);
    }
}

impl fmt::Debug for ModalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalContext")
            .field("confirm", &self.confirm)
            .field("error", &self.error)
            .field("loader", &self.loader)
            .field("mounted", &self.mounted.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_reports_confirmed() {
        let ctx = ModalContext::new();
        let mut pending = ctx.ask(ConfirmRequest::new("Delete?"));
        assert_eq!(pending.try_outcome(), None);

        ctx.resolve_confirm(Resolution::Continue);
        assert_eq!(pending.try_outcome(), Some(Confirmation::Confirmed));
    }

    #[test]
    fn ask_reports_cancelled_on_dismiss() {
        let ctx = ModalContext::new();
        let mut pending = ctx.ask(ConfirmRequest::new("Delete?"));

        ctx.resolve_confirm(Resolution::Dismissed);
        assert_eq!(pending.try_outcome(), Some(Confirmation::Cancelled));
    }

    #[test]
    fn overwritten_ask_is_abandoned() {
        let ctx = ModalContext::new();
        let mut first = ctx.ask(ConfirmRequest::new("First"));
        let mut second = ctx.ask(ConfirmRequest::new("Second"));

        assert_eq!(first.try_outcome(), Some(Confirmation::Abandoned));
        ctx.resolve_confirm(Resolution::Continue);
        assert_eq!(second.try_outcome(), Some(Confirmation::Confirmed));
    }

    #[test]
    fn answer_is_stable_across_reads() {
        let ctx = ModalContext::new();
        let mut pending = ctx.ask(ConfirmRequest::new("Delete?"));

        ctx.resolve_confirm(Resolution::Cancel);
        assert_eq!(pending.try_outcome(), Some(Confirmation::Cancelled));
        assert_eq!(pending.try_outcome(), Some(Confirmation::Cancelled));
    }

    #[tokio::test]
    async fn outcome_after_try_outcome_keeps_the_answer() {
        let ctx = ModalContext::new();
        let mut pending = ctx.ask(ConfirmRequest::new("Transfer?"));
        ctx.resolve_confirm(Resolution::Continue);

        assert_eq!(pending.try_outcome(), Some(Confirmation::Confirmed));
        assert_eq!(pending.outcome().await, Confirmation::Confirmed);
    }

    #[test]
    fn closed_ask_is_abandoned() {
        let ctx = ModalContext::new();
        let mut pending = ctx.ask(ConfirmRequest::new("Delete?"));
        ctx.close_confirm();
        assert_eq!(pending.try_outcome(), Some(Confirmation::Abandoned));
    }

    #[test]
    fn ask_keeps_caller_callbacks() {
        let ctx = ModalContext::new();
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        let mut pending = ctx.ask(ConfirmRequest::new("Delete?").on_cancel(move || flag.set(true)));

        ctx.resolve_confirm(Resolution::Cancel);
        assert!(ran.get());
        assert_eq!(pending.try_outcome(), Some(Confirmation::Cancelled));
    }

    #[test]
    fn only_one_mount_at_a_time() {
        let ctx = ModalContext::new();
        let guard = ctx.claim_mount().expect("first mount succeeds");
        assert!(ctx.is_mounted());
        assert!(ctx.claim_mount().is_none());

        drop(guard);
        assert!(!ctx.is_mounted());
        assert!(ctx.claim_mount().is_some());
    }

    #[test]
    fn stores_are_independent() {
        let ctx = ModalContext::new();
        ctx.show_loader(Some("Saving...".to_string()));
        ctx.open_error("Network down", None);

        ctx.hide_loader();
        assert!(ctx.error_dialog().is_open());
        assert!(!ctx.confirm_dialog().is_open());
        assert!(!ctx.loader().is_loading());
    }

    #[tokio::test]
    async fn outcome_resolves_after_continue() {
        let ctx = ModalContext::new();
        let pending = ctx.ask(ConfirmRequest::new("Transfer?"));
        ctx.resolve_confirm(Resolution::Continue);
        assert_eq!(pending.outcome().await, Confirmation::Confirmed);
    }
}
