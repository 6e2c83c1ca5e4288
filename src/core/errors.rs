//! core::errors
//!
//! The error taxonomy shared by every dispatch operation.
//!
//! # Design
//!
//! All failures are variants of a single [`DispatchError`]. Each error renders
//! two ways:
//!
//! - [`DispatchError::diagnostic`] (also the `Display` impl) carries the
//!   detailed text intended for logs and developers.
//! - [`DispatchError::user_message`] is what a shell shows to the person typing
//!   commands. For unexpected failures it hides the underlying cause.
//!
//! # Example
//!
//! ```
//! use commandant::core::errors::DispatchError;
//!
//! let err = DispatchError::invalid_command("bogus");
//! assert_eq!(err.user_message(), "Invalid command: bogus");
//! assert_eq!(err.diagnostic(), "invalid command: bogus");
//! ```

use thiserror::Error;

/// Boxed lower-level cause of an [`DispatchError::Unexpected`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while registering, parsing or dispatching commands.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A command spec was malformed at registration time.
    #[error("{message}")]
    Setup { message: String },

    /// The requested command name is not registered.
    #[error("invalid command: {name}")]
    InvalidCommand { name: String },

    /// Input did not match the command's declared shape.
    #[error("invalid usage of command: {command}")]
    Usage {
        /// Name of the command that was misused
        command: String,
        /// Rendered help text for the command
        help: String,
    },

    /// A flag-looking token was not declared by the command.
    #[error("unrecognized flag {flag} for command {command}")]
    UnrecognizedFlag { command: String, flag: String },

    /// Domain failure raised by a handler; shown verbatim.
    #[error("{message}")]
    Command { message: String },

    /// Lower-level failure, such as a sink write error.
    #[error("{context}: {source}")]
    Unexpected {
        context: String,
        #[source]
        source: BoxedCause,
    },
}

impl DispatchError {
    /// Create a setup error.
    pub fn setup(message: impl Into<String>) -> Self {
        DispatchError::Setup {
            message: message.into(),
        }
    }

    /// Create an invalid-command error.
    pub fn invalid_command(name: impl Into<String>) -> Self {
        DispatchError::InvalidCommand { name: name.into() }
    }

    /// Create a handler-level error whose message is shown as-is.
    pub fn command(message: impl Into<String>) -> Self {
        DispatchError::Command {
            message: message.into(),
        }
    }

    /// Wrap a lower-level failure.
    pub fn unexpected(context: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        DispatchError::Unexpected {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Detailed text for logs and developers.
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }

    /// Text suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::Setup { message } => {
                format!("An error occurred during setup: {}", message)
            }
            DispatchError::InvalidCommand { name } => format!("Invalid command: {}", name),
            DispatchError::Usage { command, help } => {
                format!("Invalid usage of command: {}\n\n> {}: {}", command, command, help)
            }
            DispatchError::UnrecognizedFlag { command, flag } => {
                format!("Unrecognized flag {} for command {}", flag, command)
            }
            DispatchError::Command { message } => message.clone(),
            DispatchError::Unexpected { .. } => "An unexpected error occurred!".to_string(),
        }
    }

    /// Check if this error was caused by the user's input rather than setup or I/O.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DispatchError::InvalidCommand { .. }
                | DispatchError::Usage { .. }
                | DispatchError::UnrecognizedFlag { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_hides_cause_from_user() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = DispatchError::unexpected("failed to write output", io);

        assert_eq!(err.user_message(), "An unexpected error occurred!");
        assert_eq!(err.diagnostic(), "failed to write output: pipe closed");
    }

    #[test]
    fn setup_message_is_prefixed_for_users() {
        let err = DispatchError::setup("command name cannot be empty");
        assert_eq!(err.diagnostic(), "command name cannot be empty");
        assert_eq!(
            err.user_message(),
            "An error occurred during setup: command name cannot be empty"
        );
    }

    #[test]
    fn usage_includes_help_text() {
        let err = DispatchError::Usage {
            command: "greet".into(),
            help: "Greet someone by name.".into(),
        };
        assert_eq!(err.diagnostic(), "invalid usage of command: greet");
        assert!(err
            .user_message()
            .ends_with("> greet: Greet someone by name."));
    }

    #[test]
    fn command_error_is_verbatim() {
        let err = DispatchError::command("disk is full");
        assert_eq!(err.diagnostic(), "disk is full");
        assert_eq!(err.user_message(), "disk is full");
    }

    #[test]
    fn user_error_classification() {
        assert!(DispatchError::invalid_command("x").is_user_error());
        assert!(DispatchError::UnrecognizedFlag {
            command: "greet".into(),
            flag: "-x".into()
        }
        .is_user_error());
        assert!(!DispatchError::setup("bad").is_user_error());
        assert!(!DispatchError::command("boom").is_user_error());
    }
}
