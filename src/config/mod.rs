// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget configuration, including loading and saving
//! defaults to a `settings.toml` file.
//!
//! Every field is optional. Missing values fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use holo_video::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.player.autoplay = Some(true);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "HoloVideo";

/// `[player]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub autoplay: Option<bool>,
    #[serde(default)]
    pub loop_playback: Option<bool>,
    #[serde(default)]
    pub muted: Option<bool>,
    #[serde(default)]
    pub plays_inline: Option<bool>,
    /// CSS-like length, e.g. `"220px"` or `"100%"`.
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    /// Swap the thumbnail for the player on the first `canplay`.
    #[serde(default)]
    pub reveal_on_canplay: Option<bool>,
    /// Assign the source at mount so the media buffers behind the thumbnail.
    #[serde(default)]
    pub preload: Option<bool>,
    /// Container extension for raw uploads.
    #[serde(default)]
    pub extension: Option<String>,
}

/// `[icon]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

/// `[resolver]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub cdn_base: Option<String>,
    /// User agent used to pick the container when none is supplied.
    #[serde(default)]
    pub user_agent: Option<String>,
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub buffer_capacity: Option<usize>,
}

impl DiagnosticsConfig {
    /// Whether diagnostics collection is switched on, defaulting to off.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_DIAGNOSTICS_ENABLED)
    }

    /// Ring buffer capacity, clamped to the valid range.
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity.unwrap_or(DEFAULT_BUFFER_CAPACITY))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub icon: IconConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns defaults when no file exists yet.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the platform config directory.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`. Invalid TOML yields defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid config {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem write fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
