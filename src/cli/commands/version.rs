//! version command - Show the configured version

use crate::core::errors::DispatchError;
use crate::core::schema::CommandSpec;
use crate::core::version::Version;

/// Build the `version` command for a semantic version string.
///
/// # Errors
///
/// Returns [`DispatchError::Setup`] if `version` is not `MAJOR.MINOR.PATCH`
/// with optional pre-release and build suffixes.
pub fn version_command(version: &str) -> Result<CommandSpec, DispatchError> {
    let version = Version::parse(version)?;
    Ok(
        CommandSpec::new("version", "Display the current version.")
            .handler(move |_, out| out.write(&version.to_string())),
    )
}
