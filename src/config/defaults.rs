// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Dialog Defaults
// ==========================================================================

/// Shortest accepted error auto-dismiss delay (in seconds).
pub const MIN_ERROR_AUTO_DISMISS_SECS: u32 = 1;

/// Longest accepted error auto-dismiss delay (in seconds).
pub const MAX_ERROR_AUTO_DISMISS_SECS: u32 = 60;

/// Whether clicking the backdrop of a confirm dialog counts as "Cancel".
pub const DEFAULT_DISMISS_ON_BACKDROP: bool = true;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Loader Defaults
// ==========================================================================

/// Spinner animation tick while the loader is visible (in milliseconds).
pub const SPINNER_TICK_MS: u64 = 50;

const _: () = {
    assert!(MIN_ERROR_AUTO_DISMISS_SECS > 0);
    assert!(MAX_ERROR_AUTO_DISMISS_SECS > MIN_ERROR_AUTO_DISMISS_SECS);
    assert!(SPINNER_TICK_MS > 0);
};
