//! Bundled JDK directory layouts.
//!
//! Each row maps a (generation, platform) pair onto the subdirectory that
//! holds that JDK. Adding a platform or generation is a new row here.

use super::platform::{JdkGeneration, Platform};

/// Where one bundled JDK lives relative to the openjdk directory.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct JdkLayout {
    pub generation: JdkGeneration,
    pub platform: Platform,
    /// Platform directory below the generation directory
    pub subdir: &'static str,
    /// macOS bundles keep the JDK home in `Contents/Home`
    pub bundle_home: bool,
}

/// Segments appended to a bundle root to reach the JDK home.
pub const BUNDLE_HOME: [&str; 2] = ["Contents", "Home"];

const fn row(
    generation: JdkGeneration,
    platform: Platform,
    subdir: &'static str,
    bundle_home: bool,
) -> JdkLayout {
    JdkLayout {
        generation,
        platform,
        subdir,
        bundle_home,
    }
}

/// Every known layout. JDK 8 has no Windows build.
pub const LAYOUTS: &[JdkLayout] = &[
    row(JdkGeneration::Jdk8, Platform::Linux, "linux-x86", false),
    row(JdkGeneration::Jdk8, Platform::MacOs, "darwin-x86", false),
    row(JdkGeneration::Jdk9, Platform::Linux, "linux", false),
    row(JdkGeneration::Jdk9, Platform::MacOs, "osx", false),
    row(JdkGeneration::Jdk9, Platform::Windows, "windows", false),
    row(JdkGeneration::Jdk11, Platform::Linux, "linux", false),
    row(JdkGeneration::Jdk11, Platform::MacOs, "osx", true),
    row(JdkGeneration::Jdk11, Platform::Windows, "windows", false),
];

/// Layout for `generation` on `platform`, if one is bundled.
pub fn lookup(generation: JdkGeneration, platform: Platform) -> Option<&'static JdkLayout> {
    LAYOUTS
        .iter()
        .find(|layout| layout.generation == generation && layout.platform == platform)
}
