//! r8lib construction.
//!
//! Building r8lib is two sequential R8 runs on the bundled JDK 11:
//! 1. `--version` on the input jar, to learn the build identity
//! 2. the shrinking run itself, with that identity as the map id template
//!
//! See [`R8LibBuilder`].

mod orchestrator;
mod version;

pub use orchestrator::R8LibBuilder;
pub use version::{ENGINEERING_MARKER, VersionIdentifier, VersionProbe, parse_version_output};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// R8's command line entry point.
pub const R8_MAIN: &str = "com.android.tools.r8.R8";

/// R8 with its dependencies, as produced by the gradle build.
pub const DEFAULT_R8_WITH_DEPS: &str = "build/libs/r8_with_deps.jar";

/// Source file attribute template; R8 fills in the placeholders.
pub const SOURCE_FILE_TEMPLATE: &str = "R8_%MAP_ID_%MAP_HASH";

/// Heap for the shrinking run.
pub const MAX_HEAP: &str = "-Xmx8g";

/// What to shrink and where to put it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LibraryRequest {
    /// The R8 jar to compile
    pub r8jar: PathBuf,
    /// Output jar; the map goes next to it
    pub output: PathBuf,
    /// Keep configuration files, in order
    pub pg_confs: Vec<PathBuf>,
    /// Libraries besides the bundled rt.jar, in order
    pub libs: Vec<PathBuf>,
}

impl LibraryRequest {
    pub fn new(r8jar: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            r8jar: r8jar.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn pg_conf(mut self, path: impl Into<PathBuf>) -> Self {
        self.pg_confs.push(path.into());
        self
    }

    pub fn lib(mut self, path: impl Into<PathBuf>) -> Self {
        self.libs.push(path.into());
        self
    }

    /// `<output>.map`
    pub fn map_output(&self) -> PathBuf {
        map_path(&self.output)
    }
}

/// A finished r8lib build.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuiltLibrary {
    pub version: VersionIdentifier,
    pub jar: PathBuf,
    pub map: PathBuf,
}

fn map_path(output: &Path) -> PathBuf {
    let mut map: OsString = output.as_os_str().to_owned();
    map.push(".map");
    PathBuf::from(map)
}
