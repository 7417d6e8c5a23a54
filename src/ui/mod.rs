// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": components render from borrowed state
//! and emit messages that `App::update` routes.
//!
//! - [`modals`] - Root-level confirm, error and loader renderers
//! - [`navbar`] - Screen tabs and global ledger actions
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod modals;
pub mod navbar;
pub mod styles;
pub mod theming;
pub mod widgets;
