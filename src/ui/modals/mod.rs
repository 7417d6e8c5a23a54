// SPDX-License-Identifier: MPL-2.0
//! Root-level renderers for the confirm dialog, error dialog and loader.
//!
//! [`ModalLayer`] is mounted once per [`ModalContext`], at the application
//! root and outside any screen, so it survives navigation. It subscribes to
//! the three stores and keeps the latest snapshot of each; it owns no other
//! state apart from the spinner angle.
//!
//! An idle store contributes no widget at all: the layer pushes nothing onto
//! the root stack for it.
//!
//! # Usage
//!
//! ```ignore
//! let modals = ModalContext::new();
//! let layer = ModalLayer::mount(&modals)?;
//!
//! // in view()
//! layer.view(screen_content, &i18n, Message::Modal)
//!
//! // in update()
//! Message::Modal(message) => layer.update(&modals, message),
//! ```

mod confirm_view;
mod error_view;
mod loader_view;

use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::modals::{
    ConfirmDialogState, ErrorDialogState, LoaderState, ModalContext, MountGuard, Resolution,
};
use crate::store::SubscriptionHandle;
use crate::ui::design_tokens::spacing;
use crate::ui::styles::overlay;
use crate::ui::widgets::spinner;
use iced::widget::{mouse_area, opaque, Container, Stack};
use iced::{alignment, Element, Length};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Messages emitted by the rendered modals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The user answered the confirm dialog.
    Resolve(Resolution),
    /// "OK" on the error dialog.
    DismissError,
    /// Spinner animation frame.
    SpinnerTick,
}

/// Latest snapshot of one store, kept current by a store subscription.
struct Mounted<S> {
    snapshot: Rc<RefCell<S>>,
    _subscription: SubscriptionHandle,
}

impl<S: Clone + 'static> Mounted<S> {
    fn attach(
        initial: S,
        subscribe: impl FnOnce(Box<dyn Fn(&S)>) -> SubscriptionHandle,
    ) -> Self {
        let snapshot = Rc::new(RefCell::new(initial));
        let sink = Rc::clone(&snapshot);
        let subscription = subscribe(Box::new(move |state: &S| {
            *sink.borrow_mut() = state.clone();
        }));
        Self {
            snapshot,
            _subscription: subscription,
        }
    }

    fn snapshot(&self) -> Ref<'_, S> {
        self.snapshot.borrow()
    }
}

/// The single rendered instance of every modal.
pub struct ModalLayer {
    confirm: Mounted<ConfirmDialogState>,
    error: Mounted<ErrorDialogState>,
    loader: Mounted<LoaderState>,
    spinner_rotation: f32,
    dismiss_on_backdrop: bool,
    _mount: MountGuard,
}

impl std::fmt::Debug for ModalLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalLayer")
            .field("confirm", &*self.confirm.snapshot())
            .field("error", &*self.error.snapshot())
            .field("loader", &*self.loader.snapshot())
            .field("dismiss_on_backdrop", &self.dismiss_on_backdrop)
            .finish()
    }
}

impl ModalLayer {
    /// Subscribes to every store of `ctx`.
    ///
    /// Fails with [`Error::AlreadyMounted`] while another layer for the same
    /// context is alive.
    pub fn mount(ctx: &ModalContext) -> Result<Self> {
        let mount = ctx.claim_mount().ok_or(Error::AlreadyMounted)?;

        let confirm = Mounted::attach(ctx.confirm_dialog().state(), |listener| {
            ctx.confirm_dialog().subscribe(listener)
        });
        let error = Mounted::attach(ctx.error_dialog().state(), |listener| {
            ctx.error_dialog().subscribe(listener)
        });
        let loader = Mounted::attach(ctx.loader().state(), |listener| {
            ctx.loader().subscribe(listener)
        });

        tracing::debug!("modal layer mounted");
        Ok(Self {
            confirm,
            error,
            loader,
            spinner_rotation: 0.0,
            dismiss_on_backdrop: true,
            _mount: mount,
        })
    }

    /// Whether a click on the confirm backdrop cancels the dialog.
    #[must_use]
    pub fn dismiss_on_backdrop(mut self, enabled: bool) -> Self {
        self.dismiss_on_backdrop = enabled;
        self
    }

    /// Applies a modal message to the stores of `ctx`.
    ///
    /// A confirm answer is ignored while the error dialog or the loader
    /// covers the confirm dialog.
    pub fn update(&mut self, ctx: &ModalContext, message: Message) {
        match message {
            Message::Resolve(resolution) => {
                if self.confirm_on_top() {
                    ctx.resolve_confirm(resolution);
                } else {
                    tracing::debug!(?resolution, "confirm answer ignored while covered");
                }
            }
            Message::DismissError => ctx.close_error(),
            Message::SpinnerTick => {
                if self.is_loading() {
                    self.spinner_rotation = spinner::advance(self.spinner_rotation);
                }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.snapshot().is_loading
    }

    /// Whether the confirm dialog is open with nothing stacked above it.
    #[must_use]
    pub fn confirm_on_top(&self) -> bool {
        self.confirm.snapshot().is_open && !self.error.snapshot().is_open && !self.is_loading()
    }

    /// Whether any modal currently covers the screen.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.confirm.snapshot().is_open || self.error.snapshot().is_open || self.is_loading()
    }

    #[must_use]
    pub fn confirm_state(&self) -> ConfirmDialogState {
        self.confirm.snapshot().clone()
    }

    #[must_use]
    pub fn error_state(&self) -> ErrorDialogState {
        self.error.snapshot().clone()
    }

    #[must_use]
    pub fn loader_state(&self) -> LoaderState {
        self.loader.snapshot().clone()
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Layers the active modals over `base`: confirm, then error, then the
    /// loader on top.
    pub fn view<'a, M: 'static>(
        &self,
        base: Element<'a, M>,
        i18n: &I18n,
        on_message: fn(Message) -> M,
    ) -> Element<'a, M> {
        let layers: Vec<Element<'static, Message>> = [
            confirm_view::view(&self.confirm.snapshot(), i18n, self.dismiss_on_backdrop),
            error_view::view(&self.error.snapshot(), i18n),
            loader_view::view(&self.loader.snapshot(), self.spinner_rotation),
        ]
        .into_iter()
        .flatten()
        .collect();

        if layers.is_empty() {
            return base;
        }

        layers
            .into_iter()
            .fold(
                Stack::new()
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .push(base),
                |stack, layer| stack.push(layer.map(on_message)),
            )
            .into()
    }
}

/// Centers `card` over a dimmed, input-blocking backdrop.
///
/// `on_backdrop` is emitted when the dimmed area itself is clicked.
fn modal(card: Element<'static, Message>, on_backdrop: Option<Message>) -> Element<'static, Message> {
    let backdrop = Container::new(opaque(card))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(overlay::backdrop);

    let area = mouse_area(backdrop);
    let area = match on_backdrop {
        Some(message) => area.on_press(message),
        None => area,
    };
    opaque(area)
}
