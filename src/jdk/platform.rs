//! Host platform and JDK generation types.

use std::fmt;

/// Operating system family, as far as JDK layouts care.
///
/// Resolved once from the compile target via [`Platform::current`]. Anything
/// that is not Linux, macOS or Windows is [`Platform::Other`] and falls back to
/// `JAVA_HOME`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Platform {
    Linux,
    #[value(name = "macos")]
    MacOs,
    Windows,
    Other,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// Suffix appended to executable names (`.exe` on Windows only).
    pub fn exe_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            _ => "",
        }
    }

    /// `name` with the platform executable suffix.
    pub fn executable_name(self, name: &str) -> String {
        format!("{}{}", name, self.exe_suffix())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Other => "unrecognized platform",
        };
        f.write_str(name)
    }
}

/// JDK major lineage shipped under `third_party/openjdk`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum JdkGeneration {
    #[value(name = "8")]
    Jdk8,
    #[value(name = "9")]
    Jdk9,
    #[default]
    #[value(name = "11")]
    Jdk11,
}

impl JdkGeneration {
    /// Installation directory name under the openjdk directory.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Jdk8 => "jdk8",
            Self::Jdk9 => "openjdk-9.0.4",
            Self::Jdk11 => "jdk-11",
        }
    }
}

impl fmt::Display for JdkGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let major = match self {
            Self::Jdk8 => 8,
            Self::Jdk9 => 9,
            Self::Jdk11 => 11,
        };
        write!(f, "JDK {}", major)
    }
}
