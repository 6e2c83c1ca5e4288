//! cli::commands
//!
//! Built-in commands every shell registers, plus the binary's sample command.
//!
//! - [`exit_command`] - Terminate the process
//! - [`version_command`] - Show the configured version
//! - [`help_command`] - List commands or describe one
//! - [`echo_command`] - Write text back (registered by the binary only)

mod echo;
mod exit;
mod help;
mod version;

pub use echo::echo_command;
pub use exit::exit_command;
pub use help::help_command;
pub use version::version_command;
