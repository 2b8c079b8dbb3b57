//! Configuration module for grok-cache
//!
//! Resolves where the statement file and the alias file live. Both default to
//! the platform's per-user directories and can be overridden on the command
//! line; the resolved paths are handed to the store and the alias loader
//! explicitly.

use config::ConfigError;
use std::path::PathBuf;

/// Directory name used under the platform data and config directories
pub const APP_DIR: &str = "grok-cache";

/// File name of the statement store
pub const STORE_FILE: &str = "cache.toml";

/// File name of the alias table
pub const ALIAS_FILE: &str = "aliases.ini";

/// Resolved file locations for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path to the TOML statement store
    pub store_path: PathBuf,

    /// Path to the INI alias table
    pub alias_path: PathBuf,
}

impl Settings {
    /// Build settings from optional overrides, filling gaps with defaults
    ///
    /// Platform directories are only consulted for paths that were not given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a default is needed and the system directory
    /// cannot be determined.
    pub fn resolve(
        store_override: Option<PathBuf>,
        alias_override: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let store_path = match store_override {
            Some(path) => path,
            None => Self::default_store_path()?,
        };
        let alias_path = match alias_override {
            Some(path) => path,
            None => Self::default_alias_path()?,
        };

        Ok(Self {
            store_path,
            alias_path,
        })
    }

    /// Get the default statement store path
    ///
    /// Returns `~/.local/share/grok-cache/cache.toml` on Linux
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_store_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;

        Ok(data_dir.join(APP_DIR).join(STORE_FILE))
    }

    /// Get the default alias table path
    ///
    /// Returns `~/.config/grok-cache/aliases.ini` on Linux
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn default_alias_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_DIR).join(ALIAS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let settings = Settings::resolve(
            Some(PathBuf::from("/tmp/store.toml")),
            Some(PathBuf::from("/tmp/aliases.ini")),
        )
        .unwrap();

        assert_eq!(settings.store_path, PathBuf::from("/tmp/store.toml"));
        assert_eq!(settings.alias_path, PathBuf::from("/tmp/aliases.ini"));
    }

    #[test]
    fn test_default_paths_use_app_dir() {
        if let Ok(path) = Settings::default_store_path() {
            assert!(path.ends_with("grok-cache/cache.toml"));
        }
        if let Ok(path) = Settings::default_alias_path() {
            assert!(path.ends_with("grok-cache/aliases.ini"));
        }
    }
}
