//! R8 `--version` output parsing.
//!
//! R8 prints either `R8 <version> (build <build-info>)` for release builds or
//! a line containing `build engineering` for local builds, which carry no
//! version at all.

use std::fmt;

use crate::error::{Error, Result};

/// Marker R8 prints when it was built from a local checkout.
pub const ENGINEERING_MARKER: &str = "build engineering";

/// Build identity embedded in the map id template.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct VersionIdentifier(String);

impl VersionIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What `--version` told us.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VersionProbe {
    /// Local build; the identity has to come from version control
    Engineering,
    /// Release build with its version token
    Release(String),
}

/// Classifies R8's `--version` output.
///
/// The release token is positional (second word). Anything else in the line
/// is not looked at, so a reworded banner yields a wrong token rather than an
/// error; a semver check only warns about it.
pub fn parse_version_output(output: &str) -> Result<VersionProbe> {
    if output.contains(ENGINEERING_MARKER) {
        return Ok(VersionProbe::Engineering);
    }

    let token = output
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| Error::VersionFormat {
            output: output.to_string(),
        })?;

    if let Err(e) = semver::Version::parse(token) {
        log::warn!(
            "R8 version {:?} is not a semantic version ({}); using it anyway",
            token,
            e
        );
    }

    Ok(VersionProbe::Release(token.to_string()))
}
