// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--content-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PHOTOFOLIO_CONTENT_DIR`, `PHOTOFOLIO_CONFIG_DIR`)
//! 4. **Default** - `./content` for content, the platform config dir via `dirs`
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.content_dir, flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Photofolio";

/// Content directory used when nothing else is configured.
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Environment variable to override the content directory.
pub const ENV_CONTENT_DIR: &str = "PHOTOFOLIO_CONTENT_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PHOTOFOLIO_CONFIG_DIR";

static CLI_CONTENT_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--content-dir` and `--config-dir` CLI arguments.
///
/// Later calls are ignored; the first initialization wins.
pub fn init_cli_overrides(content_dir: Option<String>, config_dir: Option<String>) {
    if CLI_CONTENT_DIR.set(content_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("content dir CLI override already initialized");
    }
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir CLI override already initialized");
    }
}

fn get_cli_content_dir() -> Option<PathBuf> {
    CLI_CONTENT_DIR.get().and_then(Clone::clone)
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the directory holding `home.json`, `portfolio.json`,
/// `contact.json` and the tiered image files.
pub fn get_content_dir() -> PathBuf {
    get_content_dir_with_override(None)
}

/// Returns the content directory with an optional override.
///
/// Unlike the config directory this always resolves: the last resort is
/// `./content` relative to the working directory.
pub fn get_content_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    override_path
        .or_else(get_cli_content_dir)
        .or_else(|| non_empty_env(ENV_CONTENT_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONTENT_DIR))
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// Platform defaults:
///    - Linux: `~/.config/Photofolio/`
///    - macOS: `~/Library/Application Support/Photofolio/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Photofolio\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
