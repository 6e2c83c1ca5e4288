//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. An explicit path (the binary's `--config`)
//! 2. `$COMMANDANT_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/commandant/config.toml`
//! 4. `~/.commandant/config.toml`
//!
//! Missing files are not an error; defaults are used. An explicit path that
//! does not exist is an error.
//!
//! # Example
//!
//! ```no_run
//! use commandant::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Prompt: {}{}", config.name(), config.prompt());
//! ```

pub mod schema;

pub use schema::ShellConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing at a config file.
pub const CONFIG_ENV: &str = "COMMANDANT_CONFIG";

/// Default shell name.
pub const DEFAULT_NAME: &str = "commandant";

/// Default prompt symbol.
pub const DEFAULT_PROMPT: &str = ">";

/// Default first line of the `help` listing.
pub const DEFAULT_BANNER: &str = "List of commands:";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file not found: '{0}'")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub shell: ShellConfig,
    /// Path the config was read from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit path is missing, or if a config file
    /// exists but cannot be read, parsed or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from(path);
        }

        match Self::discover() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let shell: ShellConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        shell.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Config {
            shell,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in the default locations.
    fn discover() -> Option<PathBuf> {
        // 1. Check $COMMANDANT_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/commandant/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("commandant/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.commandant/config.toml
        dirs::home_dir()
            .map(|home| home.join(".commandant/config.toml"))
            .filter(|path| path.exists())
    }

    /// Shell name, defaults to `commandant`.
    pub fn name(&self) -> &str {
        self.shell.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    /// Prompt symbol, defaults to `>`.
    pub fn prompt(&self) -> &str {
        self.shell.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Banner for the `help` listing, defaults to `List of commands:`.
    pub fn banner(&self) -> &str {
        self.shell.banner.as_deref().unwrap_or(DEFAULT_BANNER)
    }

    /// Whether interactive sessions are allowed, defaults to `true`.
    pub fn interactive(&self) -> bool {
        self.shell.interactive.unwrap_or(true)
    }

    /// Path the configuration was loaded from, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.name(), "commandant");
        assert_eq!(config.prompt(), ">");
        assert_eq!(config.banner(), "List of commands:");
        assert!(config.interactive());
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            name = "inventory"
            interactive = false
            "#,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.name(), "inventory");
        assert_eq!(config.prompt(), ">");
        assert!(!config.interactive());
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(Some(&temp.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            name = "inventory"
            unknown_field = true
            "#,
        )
        .unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn invalid_values_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "prompt = \"\"").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
