// SPDX-License-Identifier: MPL-2.0
//! Persistent settings, stored as `settings.toml`.
//!
//! Three TOML tables: `[general]` for the language, `[api]` for the
//! platform domain and access token, `[course]` for the course and
//! assignment opened on launch. The file lives in the directory
//! [`paths::config_dir`] resolves, so tests and portable installs can
//! relocate it through `SUBMISSION_LENS_CONFIG_DIR`.
//!
//! ```no_run
//! use submission_lens::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("settings should be writable");
//! ```

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Platform API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ApiConfig {
    /// Base domain of the platform (e.g., "https://school.instructure.com").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Personal access token used as a bearer token on every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// Default course and assignment to open on launch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CourseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<i64>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Platform API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Default course and assignment to open.
    #[serde(default)]
    pub course: CourseConfig,
}

fn config_file_path(dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads settings from the resolved location.
///
/// A missing file is not an error; the defaults come back silently. A file
/// that exists but cannot be parsed also yields the defaults, plus the
/// message key of a warning worth surfacing to the user.
pub fn load() -> (Config, Option<String>) {
    load_from_dir(None)
}

/// Same as [`load`], resolving against `dir` instead of the default
/// location when given.
pub fn load_from_dir(dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-load-error".to_string()),
        ),
    }
}

/// Parses the settings file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes settings to the resolved location. A no-op when no location
/// could be resolved at all.
pub fn save(config: &Config) -> Result<()> {
    match config_file_path(None) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Writes settings to `path`, creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
