//! Builds `r8lib`: a shrunk, versioned R8 jar plus its symbol map.
//!
//! The crate has two halves:
//! - [`jdk`] maps a JDK generation and host platform onto the bundled JDK
//!   trees under `third_party/openjdk`
//! - [`r8lib`] asks R8 for its version, then runs R8 over itself with that
//!   version baked into the map id template
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod jdk;
pub mod process;
pub mod r8lib;
pub mod source;

// Re-export commonly used types
pub use error::{CliError, Error, Result};
