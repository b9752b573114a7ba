//! Resolved JDK homes and the tools inside them.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use super::platform::Platform;

/// A JDK home directory (the one containing `bin/`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JdkHome(PathBuf);

impl JdkHome {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    /// `bin/<tool>` below this home, with the platform suffix.
    pub fn tool(&self, tool: &str, platform: Platform) -> PathBuf {
        self.0.join("bin").join(platform.executable_name(tool))
    }
}

impl AsRef<Path> for JdkHome {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for JdkHome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// A JDK tool to invoke.
///
/// `SearchPath` means no JDK home could be resolved and the bare command name
/// is left to the shell's `PATH`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Executable {
    Resolved(PathBuf),
    SearchPath(String),
}

impl Executable {
    /// Program to hand to the process layer.
    pub fn program(&self) -> OsString {
        match self {
            Self::Resolved(path) => path.as_os_str().to_owned(),
            Self::SearchPath(name) => OsString::from(name),
        }
    }
}

impl fmt::Display for Executable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(path) => write!(f, "{}", path.display()),
            Self::SearchPath(name) => write!(f, "{} (from PATH)", name),
        }
    }
}
