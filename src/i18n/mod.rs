// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded from `assets/i18n/` at build time.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - `MISSING: <key>` marker for untranslated keys

pub mod fluent;
