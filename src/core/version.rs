//! core::version
//!
//! Validated semantic version strings for the `version` command.
//!
//! # Example
//!
//! ```
//! use commandant::core::version::Version;
//!
//! let v = Version::parse("1.2.3").unwrap();
//! assert_eq!(v.to_string(), "v1.2.3");
//!
//! // A leading `v` is accepted and not doubled.
//! assert_eq!(Version::parse("v2.0.0-rc.1+build.5").unwrap().to_string(), "v2.0.0-rc.1+build.5");
//!
//! assert!(Version::parse("1.2").is_err());
//! ```

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::DispatchError;

static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^v?(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(-[0-9A-Za-z.-]+)?(\+[0-9A-Za-z.-]+)?$")
        .expect("version pattern is valid")
});

/// A `MAJOR.MINOR.PATCH[-pre][+build]` version, stored without the `v` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Validate a version string.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Setup`] if the string is not a semantic version.
    pub fn parse(raw: &str) -> Result<Self, DispatchError> {
        if !VERSION_RE.is_match(raw) {
            return Err(DispatchError::setup(format!(
                "invalid version format '{}'. Expected format: MAJOR.MINOR.PATCH (e.g. 1.0.0 or v1.0.0)",
                raw
            )));
        }
        Ok(Self(raw.trim_start_matches('v').to_string()))
    }

    /// The version without the `v` prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
