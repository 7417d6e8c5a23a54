// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the ledger screens and
//! the global modals.
//!
//! The `App` struct owns the [`ModalContext`] and the single [`ModalLayer`]
//! rendering it. Screens come and go below that layer; confirm dialogs,
//! error dialogs and the loader stay where they are across navigation.

pub mod ledger;
mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, DialogsConfig};
use crate::i18n::fluent::I18n;
use crate::logging;
use crate::modals::ModalContext;
use crate::paths;
use crate::ui::modals::ModalLayer;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use ledger::Ledger;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    ledger: Ledger,
    theme_mode: ThemeMode,
    dialogs: DialogsConfig,
    /// Bumped on every error dialog open; auto-dismiss timers carry the
    /// value they were armed with.
    error_generation: u64,
    modals: ModalContext,
    modal_layer: ModalLayer,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("modals", &self.modal_layer)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// Resolves the config directory, loads settings and installs the log
/// subscriber before the first window opens.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    if !paths::init_cli_override(flags.config_dir.clone()) {
        eprintln!("config directory override was already set; ignoring --config-dir");
    }

    let (config, config_warning) = config::load();

    let level = flags
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level().to_string());
    if let Err(err) = logging::init(&level) {
        eprintln!("{err}");
    }

    // Wrap startup state in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags.lang, config, config_warning)));
    let boot = move || {
        let (lang, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(lang, config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state and mounts the modal layer.
    ///
    /// A config warning key, when present, is shown through the error dialog
    /// once the window is up.
    pub fn new(
        lang: Option<String>,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(lang, &config);
        let modals = ModalContext::new();
        let modal_layer = ModalLayer::mount(&modals)
            .expect("a fresh modal context has no mounted layer")
            .dismiss_on_backdrop(config.dialogs.dismiss_on_backdrop());

        let mut app = App {
            i18n,
            screen: Screen::default(),
            ledger: Ledger::sample(),
            theme_mode: config.general.theme_mode,
            dialogs: config.dialogs,
            error_generation: 0,
            modals,
            modal_layer,
        };

        let task = match config_warning {
            Some(key) => {
                let message = app.i18n.tr(&key);
                update::open_error(&mut app.update_context(), message, None)
            }
            None => Task::none(),
        };

        tracing::info!(locale = %app.i18n.current_locale(), "application started");
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let escape_sub =
            subscription::create_escape_subscription(self.modal_layer.confirm_on_top());
        let spinner_sub = subscription::create_spinner_subscription(self.modal_layer.is_loading());

        Subscription::batch([escape_sub, spinner_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            ledger: &mut self.ledger,
            modals: &self.modals,
            dialogs: &self.dialogs,
            error_generation: &mut self.error_generation,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::Modal(modal_message) = message {
            self.modal_layer.update(&self.modals, modal_message);
            return Task::none();
        }

        let mut ctx = self.update_context();

        match message {
            // Routed to the modal layer above.
            Message::Modal(_) => Task::none(),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::DeleteTransaction(id) => update::request_delete_transaction(&mut ctx, id),
            Message::DeleteAnswered { id, outcome } => {
                update::handle_delete_answered(&mut ctx, id, outcome)
            }
            Message::DeleteCompleted(id) => update::handle_delete_completed(&mut ctx, id),
            Message::CloseAccount(id) => update::request_close_account(&mut ctx, id),
            Message::CloseAccountAnswered { id, outcome } => {
                update::handle_close_account_answered(&mut ctx, id, outcome)
            }
            Message::CloseAccountCompleted(id) => {
                update::handle_close_account_completed(&mut ctx, id)
            }
            Message::Sync => update::start_sync(&mut ctx),
            Message::SyncFinished => update::handle_sync_finished(&mut ctx),
            Message::Import => update::handle_import(&mut ctx),
            Message::ErrorTimeout(generation) => {
                update::handle_error_timeout(&mut ctx, generation)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let base = view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            ledger: &self.ledger,
        });
        self.modal_layer.view(base, &self.i18n, Message::Modal)
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[must_use]
    pub fn modals(&self) -> &ModalContext {
        &self.modals
    }

    #[must_use]
    pub fn modal_layer(&self) -> &ModalLayer {
        &self.modal_layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modals::{Confirmation, Resolution, DEFAULT_ERROR_TITLE};
    use crate::ui::{modals, navbar};

    fn app() -> App {
        App::new(Some("en-US".to_string()), Config::default(), None).0
    }

    fn app_with_auto_dismiss(secs: u32) -> App {
        let mut config = Config::default();
        config.dialogs.error_auto_dismiss_secs = Some(secs);
        App::new(Some("en-US".to_string()), config, None).0
    }

    #[test]
    fn new_mounts_the_modal_layer_once() {
        let app = app();
        assert!(app.modals().is_mounted());
        assert!(!app.modal_layer().is_active());
        assert!(ModalLayer::mount(app.modals()).is_err());
    }

    #[test]
    fn config_warning_is_shown_in_error_dialog() {
        let (app, _task) = App::new(
            Some("en-US".to_string()),
            Config::default(),
            Some(config::CONFIG_LOAD_WARNING_KEY.to_string()),
        );
        let state = app.modals().error_dialog().state();
        assert!(state.is_open);
        assert_eq!(state.title, DEFAULT_ERROR_TITLE);
        assert!(state.message.contains("settings"));
    }

    #[test]
    fn delete_asks_before_touching_the_ledger() {
        let mut app = app();
        let _ = app.update(Message::DeleteTransaction(3));

        let confirm = app.modals().confirm_dialog().state();
        assert!(confirm.is_open);
        assert_eq!(confirm.title, "Delete transaction?");
        assert!(confirm
            .message
            .as_deref()
            .is_some_and(|m| m.contains("Grocery Mart")));
        assert!(app.ledger().transaction(3).is_some());
    }

    #[test]
    fn confirmed_delete_runs_under_the_loader() {
        let mut app = app();
        let _ = app.update(Message::DeleteTransaction(3));
        let _ = app.update(Message::Modal(modals::Message::Resolve(Resolution::Continue)));
        assert!(!app.modals().confirm_dialog().is_open());

        let _ = app.update(Message::DeleteAnswered {
            id: 3,
            outcome: Confirmation::Confirmed,
        });
        assert!(app.modal_layer().is_loading());
        assert_eq!(app.modal_layer().loader_state().message, "Deleting...");

        let _ = app.update(Message::DeleteCompleted(3));
        assert!(!app.modal_layer().is_loading());
        assert!(app.ledger().transaction(3).is_none());
    }

    #[test]
    fn cancelled_delete_keeps_the_transaction() {
        let mut app = app();
        let _ = app.update(Message::DeleteTransaction(1));
        let _ = app.update(Message::Modal(modals::Message::Resolve(Resolution::Cancel)));
        let _ = app.update(Message::DeleteAnswered {
            id: 1,
            outcome: Confirmation::Cancelled,
        });

        assert!(!app.modal_layer().is_loading());
        assert!(app.ledger().transaction(1).is_some());
    }

    #[test]
    fn confirm_survives_screen_switch() {
        let mut app = app();
        let _ = app.update(Message::CloseAccount(2));
        let _ = app.update(Message::Navbar(navbar::Message::Open(Screen::Accounts)));

        assert_eq!(app.screen(), Screen::Accounts);
        assert!(app.modal_layer().confirm_state().is_open);
        assert_eq!(app.modal_layer().confirm_state().title, "Close account?");
    }

    #[test]
    fn closing_an_account_hides_it_after_loading() {
        let mut app = app();
        let _ = app.update(Message::CloseAccountAnswered {
            id: 2,
            outcome: Confirmation::Confirmed,
        });
        assert!(app.modal_layer().is_loading());

        let _ = app.update(Message::CloseAccountCompleted(2));
        assert!(!app.modal_layer().is_loading());
        assert_eq!(app.ledger().open_account_count(), 2);
    }

    #[test]
    fn import_error_markup_is_stripped_for_display() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Import));

        let state = app.modal_layer().error_state();
        assert!(state.is_open);
        assert_eq!(state.title, "Import failed");
        assert!(state.message.contains("<b>OFX</b>"));
        assert_eq!(
            state.display_message(),
            "Statements in OFX format cannot be imported yet."
        );
    }

    #[test]
    fn sync_without_open_accounts_reports_an_error() {
        let mut app = app();
        for id in 1..=3 {
            let _ = app.update(Message::CloseAccountCompleted(id));
        }

        let _ = app.update(Message::Sync);
        assert!(app.modal_layer().is_loading());

        let _ = app.update(Message::SyncFinished);
        assert!(!app.modal_layer().is_loading());
        assert_eq!(app.modal_layer().error_state().title, "Sync failed");
    }

    #[test]
    fn sync_with_open_accounts_finishes_quietly() {
        let mut app = app();
        let _ = app.update(Message::Sync);
        let _ = app.update(Message::SyncFinished);
        assert!(!app.modal_layer().is_active());
    }

    #[test]
    fn stale_error_timeout_does_not_close_newer_error() {
        let mut app = app_with_auto_dismiss(5);
        let _ = app.update(Message::Import);
        let _ = app.update(Message::Modal(modals::Message::DismissError));
        let _ = app.update(Message::Import);

        let _ = app.update(Message::ErrorTimeout(1));
        assert!(app.modals().error_dialog().is_open());

        let _ = app.update(Message::ErrorTimeout(2));
        assert!(!app.modals().error_dialog().is_open());
    }

    #[test]
    fn escape_dismisses_the_confirm_dialog() {
        let mut app = app();
        let _ = app.update(Message::DeleteTransaction(2));
        let _ = app.update(Message::Modal(modals::Message::Resolve(
            Resolution::Dismissed,
        )));
        assert!(!app.modals().confirm_dialog().is_open());
        assert!(!app.modals().confirm_dialog().has_pending_callbacks());
    }

    #[test]
    fn view_renders_with_every_modal_active() {
        let mut app = app();
        let _ = app.update(Message::DeleteTransaction(2));
        let _ = app.update(Message::Import);
        let _ = app.update(Message::Sync);
        let _element = app.view();
    }
}
