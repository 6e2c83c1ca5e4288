//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: the shell name must be a usable single
//! word and the prompt symbol must not be empty.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Shell configuration.
///
/// # Example
///
/// ```toml
/// name = "inventory"
/// prompt = "$"
/// banner = "Available commands:"
/// interactive = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Name shown in the prompt
    pub name: Option<String>,

    /// Prompt symbol appended to the name
    pub prompt: Option<String>,

    /// First line of the `help` command listing
    pub banner: Option<String>,

    /// Whether an interactive session may start when no command is given
    pub interactive: Option<bool>,
}

impl ShellConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidValue("name cannot be empty".into()));
            }
            if name.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid name '{}': cannot contain whitespace",
                    name
                )));
            }
        }

        if let Some(prompt) = &self.prompt {
            if prompt.is_empty() {
                return Err(ConfigError::InvalidValue("prompt cannot be empty".into()));
            }
        }

        Ok(())
    }
}
