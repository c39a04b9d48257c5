// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[loading]` - Viewport margin and Large-tier threshold
//! - `[slideshow]` - Auto-advance timing and controls
//! - `[animation]` - Tier cross-fade length
//!
//! Every section is optional; missing values fall back to [`defaults`].
//! Out-of-range values are clamped by the accessor methods rather than
//! rejected.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `PHOTOFOLIO_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photofolio::app::config;
//!
//! let (config, _warning) = config::load();
//! println!("pause between slides: {:?}", config.slideshow.pause());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,
}

/// Progressive loading settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoadingConfig {
    /// Extra pixels around the viewport that still count as visible.
    #[serde(default = "default_load_margin_px")]
    pub load_margin_px: f32,

    /// Rendered width above which the Large tier is fetched.
    #[serde(default = "default_max_medium_size_px")]
    pub max_medium_size_px: f32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            load_margin_px: DEFAULT_LOAD_MARGIN_PX,
            max_medium_size_px: DEFAULT_MAX_MEDIUM_SIZE_PX,
        }
    }
}

impl LoadingConfig {
    pub fn load_margin(&self) -> f32 {
        clamp_finite(
            self.load_margin_px,
            MIN_LOAD_MARGIN_PX,
            MAX_LOAD_MARGIN_PX,
            DEFAULT_LOAD_MARGIN_PX,
        )
    }

    pub fn max_medium_size(&self) -> f32 {
        clamp_finite(
            self.max_medium_size_px,
            MIN_MAX_MEDIUM_SIZE_PX,
            MAX_MAX_MEDIUM_SIZE_PX,
            DEFAULT_MAX_MEDIUM_SIZE_PX,
        )
    }
}

/// Home page slideshow settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Minimum dwell time on a slide before auto-advancing.
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    #[serde(default = "default_true")]
    pub auto_scroll: bool,

    /// Show previous/next buttons, caption and counter.
    #[serde(default = "default_true")]
    pub has_controls: bool,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            auto_scroll: true,
            has_controls: true,
        }
    }
}

impl SlideshowConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.poll_interval_ms
                .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS),
        )
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms.clamp(MIN_PAUSE_MS, MAX_PAUSE_MS))
    }
}

/// Animation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnimationConfig {
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade_ms: DEFAULT_FADE_MS,
        }
    }
}

impl AnimationConfig {
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms.clamp(MIN_FADE_MS, MAX_FADE_MS))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub loading: LoadingConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_load_margin_px() -> f32 {
    DEFAULT_LOAD_MARGIN_PX
}

fn default_max_medium_size_px() -> f32 {
    DEFAULT_MAX_MEDIUM_SIZE_PX
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_pause_ms() -> u64 {
    DEFAULT_PAUSE_MS
}

fn default_fade_ms() -> u64 {
    DEFAULT_FADE_MS
}

fn default_true() -> bool {
    true
}

fn clamp_finite(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (Config::default(), Some("warning-config-load".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn empty_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("empty config should load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            "[general]\nlanguage = \"fr\"\n\n[slideshow]\npause_ms = 8000\nhas_controls = false\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("config should load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.slideshow.pause(), Duration::from_millis(8000));
        assert!(!loaded.slideshow.has_controls);
        assert!(loaded.slideshow.auto_scroll);
        assert_eq!(loaded.loading, LoadingConfig::default());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[loading\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("warning-config-load"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let loading = LoadingConfig {
            load_margin_px: -50.0,
            max_medium_size_px: f32::NAN,
        };
        assert_eq!(loading.load_margin(), MIN_LOAD_MARGIN_PX);
        assert_eq!(loading.max_medium_size(), DEFAULT_MAX_MEDIUM_SIZE_PX);

        let slideshow = SlideshowConfig {
            poll_interval_ms: 0,
            pause_ms: u64::MAX,
            ..SlideshowConfig::default()
        };
        assert_eq!(
            slideshow.poll_interval(),
            Duration::from_millis(MIN_POLL_INTERVAL_MS)
        );
        assert_eq!(slideshow.pause(), Duration::from_millis(MAX_PAUSE_MS));
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert_eq!(config.loading.load_margin(), 100.0);
        assert_eq!(config.loading.max_medium_size(), 300.0);
        assert_eq!(config.slideshow.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.slideshow.pause(), Duration::from_secs(5));
        assert_eq!(config.animation.fade(), Duration::from_secs(1));
    }
}
