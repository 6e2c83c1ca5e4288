//! exit command - Terminate the process

use crate::core::schema::CommandSpec;

/// Build the `exit` command.
///
/// The handler ends the process with status 0 and never returns.
pub fn exit_command() -> CommandSpec {
    CommandSpec::new("exit", "Exit the application.").handler(|_, _| {
        tracing::debug!("exit requested");
        std::process::exit(0)
    })
}
