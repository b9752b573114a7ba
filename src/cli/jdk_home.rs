//! Arguments for the `jdk_home` binary.

use clap::Parser;
use std::path::PathBuf;

use crate::error::Result;
use crate::jdk::{JdkGeneration, JdkHome, JdkLocator, Platform};

/// Prints the home directory of a bundled JDK
#[derive(Parser, Debug)]
#[command(name = "jdk_home", version)]
pub struct JdkHomeArgs {
    /// JDK generation
    #[arg(long, value_enum, default_value_t = JdkGeneration::Jdk11)]
    pub generation: JdkGeneration,

    /// Platform layout to use instead of the host's
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Directory holding the bundled JDKs (`openjdk/...`)
    #[arg(long, value_name = "DIR", env = "R8_THIRD_PARTY", default_value = "third_party")]
    pub third_party: PathBuf,
}

impl JdkHomeArgs {
    pub fn locator(&self) -> JdkLocator {
        let locator = JdkLocator::new(&self.third_party);
        match self.platform {
            Some(platform) => locator.with_platform(platform),
            None => locator,
        }
    }

    pub fn resolve(&self) -> Result<JdkHome> {
        self.locator().resolve_home(self.generation)
    }
}
