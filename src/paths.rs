// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (tests)
//! 2. **CLI argument** `--config-dir` - set once via [`init_cli_override`]
//! 3. **Environment variable** `BUDGET_DESK_CONFIG_DIR` (when non-empty)
//! 4. **Platform default** - `dirs::config_dir()` joined with the app name

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "BudgetDesk";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BUDGET_DESK_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; later calls are ignored and return
/// `false`.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the directory holding `settings.toml`, with `override_path`
/// taking precedence. `None` when the platform has no config directory.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below mutate process-wide environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn default_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = config_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn env_var_overrides_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(config_dir_with_override(None), Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_falls_back_to_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = config_dir_with_override(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
