// SPDX-License-Identifier: MPL-2.0
//! Centralized path management.
//!
//! # Config directory resolution order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions (tests)
//! 2. **CLI argument** `--config-dir` - set via [`init_cli_overrides`]
//! 3. **Environment variable** `FISHEYE_CONFIG_DIR`
//! 4. **Platform default** - `dirs::config_dir()/FishEye`
//!
//! # Data resolution order
//!
//! The catalog document and the media folder follow CLI flag > `[data]`
//! section of the config > bundled default relative to the working
//! directory.

use crate::config::DataConfig;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "FishEye";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FISHEYE_CONFIG_DIR";

/// Catalog document shipped with the application.
pub const DEFAULT_CATALOG_PATH: &str = "data/photographers.json";

/// Folder holding `media/` and `photographers/`.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument. Only the first call has effect.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, honouring `override_path` first.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
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

/// Location of the catalog JSON document.
#[must_use]
pub fn catalog_path(cli: Option<&str>, data: &DataConfig) -> PathBuf {
    cli.map(PathBuf::from)
        .or_else(|| data.catalog_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}

/// Root folder of the media and portrait files.
#[must_use]
pub fn assets_dir(cli: Option<&str>, data: &DataConfig) -> PathBuf {
    cli.map(PathBuf::from)
        .or_else(|| data.assets_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching the env var must not run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from("/test/config/dir")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn catalog_path_prefers_cli_then_config() {
        let data = DataConfig {
            catalog_path: Some(PathBuf::from("/etc/fisheye/catalog.json")),
            assets_dir: None,
        };
        assert_eq!(
            catalog_path(Some("cli.json"), &data),
            PathBuf::from("cli.json")
        );
        assert_eq!(
            catalog_path(None, &data),
            PathBuf::from("/etc/fisheye/catalog.json")
        );
        assert_eq!(
            catalog_path(None, &DataConfig::default()),
            PathBuf::from(DEFAULT_CATALOG_PATH)
        );
    }

    #[test]
    fn assets_dir_falls_back_to_bundled_folder() {
        assert_eq!(
            assets_dir(None, &DataConfig::default()),
            PathBuf::from(DEFAULT_ASSETS_DIR)
        );
        assert_eq!(
            assets_dir(Some("/srv/media"), &DataConfig::default()),
            PathBuf::from("/srv/media")
        );
    }
}
