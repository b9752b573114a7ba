//! JDK home and executable resolution.

use std::path::PathBuf;

use super::executable::{Executable, JdkHome};
use super::layout::{self, BUNDLE_HOME};
use super::platform::{JdkGeneration, Platform};
use crate::error::{Error, Result};

/// Directory below the third-party root that holds every bundled JDK.
pub const OPENJDK_DIR: &str = "openjdk";

/// Java 8 runtime classes, relative to the openjdk directory.
pub const RUNTIME_LIBRARY: [&str; 2] = ["openjdk-rt-1.8", "rt.jar"];

/// Maps JDK generations onto the bundled JDK trees for one platform.
///
/// `JAVA_HOME` is read once, in [`JdkLocator::new`], and only consulted when the
/// platform has no bundled layout for the requested generation.
#[derive(Clone, Debug)]
pub struct JdkLocator {
    openjdk_dir: PathBuf,
    platform: Platform,
    java_home: Option<PathBuf>,
}

impl JdkLocator {
    /// Locator for the host platform, rooted at `third_party`.
    pub fn new(third_party: impl Into<PathBuf>) -> Self {
        let java_home = std::env::var_os("JAVA_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            openjdk_dir: third_party.into().join(OPENJDK_DIR),
            platform: Platform::current(),
            java_home,
        }
    }

    /// Overrides the detected platform.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Overrides the `JAVA_HOME` fallback.
    pub fn with_java_home(mut self, java_home: Option<PathBuf>) -> Self {
        self.java_home = java_home;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Installation root of `generation`.
    ///
    /// Falls back to `JAVA_HOME` when no layout is bundled for this platform.
    pub fn resolve_root(&self, generation: JdkGeneration) -> Result<JdkHome> {
        if let Some(layout) = layout::lookup(generation, self.platform) {
            return Ok(JdkHome::new(
                self.openjdk_dir
                    .join(generation.dir_name())
                    .join(layout.subdir),
            ));
        }

        match &self.java_home {
            Some(java_home) => {
                log::debug!(
                    "no bundled {} for {}, using JAVA_HOME={}",
                    generation,
                    self.platform,
                    java_home.display()
                );
                Ok(JdkHome::new(java_home.clone()))
            }
            None => Err(Error::JavaHomeUnset {
                generation,
                platform: self.platform,
            }),
        }
    }

    /// Home directory of `generation`, the one whose `bin/` holds `java`.
    ///
    /// Same as [`resolve_root`](Self::resolve_root) except for macOS bundles,
    /// which nest the home in `Contents/Home`.
    pub fn resolve_home(&self, generation: JdkGeneration) -> Result<JdkHome> {
        let root = self.resolve_root(generation)?;
        match layout::lookup(generation, self.platform) {
            Some(layout) if layout.bundle_home => Ok(JdkHome::new(
                BUNDLE_HOME
                    .iter()
                    .fold(root.path().to_path_buf(), |path, segment| path.join(segment)),
            )),
            _ => Ok(root),
        }
    }

    /// `java` below `home`, or below the default generation's home.
    pub fn java_executable(&self, home: Option<&JdkHome>) -> Executable {
        self.tool("java", home)
    }

    /// `javac` below `home`, or below the default generation's home.
    pub fn javac_executable(&self, home: Option<&JdkHome>) -> Executable {
        self.tool("javac", home)
    }

    /// The bundled Java 8 `rt.jar`, always passed to R8 as a library.
    pub fn runtime_library(&self) -> PathBuf {
        RUNTIME_LIBRARY
            .iter()
            .fold(self.openjdk_dir.clone(), |path, segment| path.join(segment))
    }

    fn tool(&self, name: &str, home: Option<&JdkHome>) -> Executable {
        let resolved = match home {
            Some(home) => Ok(home.clone()),
            None => self.resolve_home(JdkGeneration::default()),
        };

        match resolved {
            Ok(home) => Executable::Resolved(home.tool(name, self.platform)),
            Err(e) => {
                let bare = self.platform.executable_name(name);
                match which::which(&bare) {
                    Ok(path) => log::warn!("{}; using {} from PATH", e, path.display()),
                    Err(_) => log::warn!("{}; {} is not on PATH either", e, bare),
                }
                Executable::SearchPath(bare)
            }
        }
    }
}
