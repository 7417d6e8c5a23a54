// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::SPINNER_TICK_MS;
use crate::modals::Resolution;
use crate::ui::modals;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Escape dismisses the confirm dialog; only listened to while it is the
/// topmost modal.
pub fn create_escape_subscription(confirm_on_top: bool) -> Subscription<Message> {
    if !confirm_on_top {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| escape_message(&event))
}

fn escape_message(event: &event::Event) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::Modal(modals::Message::Resolve(
            Resolution::Dismissed,
        ))),
        _ => None,
    }
}

/// Drives the loader spinner while the loader is visible.
pub fn create_spinner_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(Duration::from_millis(SPINNER_TICK_MS))
            .map(|_| Message::Modal(modals::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
