// SPDX-License-Identifier: MPL-2.0
//! `budget_desk` is a small personal-finance UI built with the Iced GUI framework.
//!
//! Its core is the global modal layer: observable stores for a confirm dialog,
//! an error dialog and a loading overlay, rendered once at the application
//! root and driven from anywhere through a [`modals::ModalContext`].

#![doc(html_root_url = "https://docs.rs/budget_desk/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod modals;
pub mod paths;
pub mod store;
pub mod ui;
