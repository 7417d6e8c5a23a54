// SPDX-License-Identifier: MPL-2.0
//! Observable single-slot state container.
//!
//! A [`Store`] owns exactly one value and lets any number of listeners
//! observe it. Every mutation notifies all listeners synchronously, before the
//! mutating call returns, so a renderer subscribed to a store always sees the
//! latest state by the time the caller regains control.
//!
//! The container is built for the single UI event loop: it uses `Rc` and
//! `RefCell` and is therefore neither `Send` nor `Sync`.
//!
//! # Usage
//!
//! ```
//! use budget_desk::store::Store;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let store = Store::new(0_u32);
//! let seen = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&seen);
//! let handle = store.subscribe(move |value| sink.set(*value));
//!
//! store.set_state(|value| *value += 5);
//! assert_eq!(seen.get(), 5);
//!
//! handle.unsubscribe();
//! store.set_state(|value| *value += 1);
//! assert_eq!(seen.get(), 5);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Listener<S> = Rc<dyn Fn(&S)>;

struct Inner<S> {
    state: RefCell<S>,
    listeners: RefCell<Vec<(u64, Listener<S>)>>,
    next_listener_id: Cell<u64>,
}

/// Single-owner state container with synchronous change notification.
pub struct Store<S> {
    inner: Rc<Inner<S>>,
}

impl<S: Clone + 'static> Store<S> {
    /// Creates a store holding `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn get_state(&self) -> S {
        self.inner.state.borrow().clone()
    }

    /// Runs `read` against the current state without cloning it.
    pub fn with_state<R>(&self, read: impl FnOnce(&S) -> R) -> R {
        read(&self.inner.state.borrow())
    }

    /// Mutates the state in place, then notifies every listener.
    ///
    /// `update` must not call back into this store.
    pub fn set_state(&self, update: impl FnOnce(&mut S)) {
        update(&mut self.inner.state.borrow_mut());
        self.notify();
    }

    /// Replaces the whole state, then notifies every listener.
    pub fn replace_state(&self, next: S) {
        self.set_state(|state| *state = next);
    }

    /// Registers `listener` and returns the handle that removes it again.
    ///
    /// The listener is not called for the current state; it only observes
    /// subsequent mutations.
    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> SubscriptionHandle {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let inner = Rc::downgrade(&self.inner);
        SubscriptionHandle {
            detach: Some(Box::new(move || {
                if let Some(inner) = inner.upgrade() {
                    inner
                        .listeners
                        .borrow_mut()
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        let snapshot = self.get_state();
        // Listeners may subscribe or unsubscribe while being notified, so the
        // list is copied out before any of them runs.
        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl<S: Clone + Default + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Removes a listener from its store when consumed or dropped.
#[must_use = "dropping the handle unsubscribes the listener immediately"]
pub struct SubscriptionHandle {
    detach: Option<Box<dyn FnOnce()>>,
}

impl SubscriptionHandle {
    /// Removes the listener. Equivalent to dropping the handle.
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}
