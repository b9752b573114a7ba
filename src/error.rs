//! Error types for JDK resolution and r8lib builds.
//!
//! Every failure is fatal to the run; nothing here is retried.

use std::path::PathBuf;
use thiserror::Error;

use crate::jdk::{JdkGeneration, Platform};

/// Result type alias for r8lib operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all r8lib operations
#[derive(Error, Debug)]
pub enum Error {
    /// No bundled layout matched and `JAVA_HOME` is not set
    #[error("no bundled {generation} for {platform} and JAVA_HOME is not set")]
    JavaHomeUnset {
        /// Requested JDK generation
        generation: JdkGeneration,
        /// Host platform
        platform: Platform,
    },

    /// The program could not be started at all
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Program that was spawned
        program: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("command failed ({status}): {command}")]
    ProcessFailed {
        /// Full command line
        command: String,
        /// Exit status description
        status: String,
    },

    /// `--version` output without a version token
    #[error("unrecognized --version output: {output:?}")]
    VersionFormat {
        /// Raw captured output
        output: String,
    },

    /// HEAD of the source checkout could not be read
    #[error("failed to read HEAD commit of {}: {source}", path.display())]
    Commit {
        /// Checkout that was queried
        path: PathBuf,
        /// Underlying gix error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}
