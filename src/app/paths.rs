// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! The directory holding `settings.toml` resolves in priority order: an
//! explicit path from the caller (tests), the `--config-dir` CLI argument,
//! the [`ENV_CONFIG_DIR`] environment variable, then the platform config
//! directory with the application name appended.

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "SubmissionLens";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "SUBMISSION_LENS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument. Called once at startup, before
/// any resolution happens.
///
/// # Panics
///
/// Panics when called a second time.
pub fn init_cli_override(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Resolves the config directory, honoring `explicit` above every other
/// source. Yields `None` only when the platform default cannot be
/// determined either.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    match std::env::var(ENV_CONFIG_DIR) {
        Ok(env_path) if !env_path.is_empty() => return Some(PathBuf::from(env_path)),
        _ => {}
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Serializes tests across the crate that touch process environment
/// variables. Lock poisoning is ignored so one failing test cannot wedge
/// the rest.
#[cfg(test)]
pub(crate) fn env_guard() -> std::sync::MutexGuard<'static, ()> {
    static ENV: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV.lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_default_carries_the_app_name() {
        let _env = env_guard();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = config_dir(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn explicit_path_beats_the_environment() {
        let _env = env_guard();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let explicit = PathBuf::from("/explicit/path");
        assert_eq!(config_dir(Some(explicit.clone())), Some(explicit));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn environment_variable_beats_the_platform_default() {
        let _env = env_guard();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        assert_eq!(config_dir(None), Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_environment_variable_counts_as_unset() {
        let _env = env_guard();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = config_dir(None) {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
