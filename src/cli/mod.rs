//! Command line interface for the r8lib builder.

mod args;
mod jdk_home;

pub use args::Args;
pub use jdk_home::JdkHomeArgs;

use crate::error::{CliError, Result};
use crate::jdk::JdkLocator;
use crate::process::SystemRunner;
use crate::r8lib::R8LibBuilder;
use crate::source::GitCheckout;

/// Main CLI entry point
pub async fn run() -> Result<()> {
    let args = Args::parse_args();
    run_with(&args).await
}

/// Builds r8lib as described by `args`.
pub async fn run_with(args: &Args) -> Result<()> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let locator = JdkLocator::new(&args.third_party);
    let builder = R8LibBuilder::new(
        &locator,
        &args.r8_with_deps,
        SystemRunner,
        GitCheckout::new(&args.checkout),
    );

    let built = builder.build(&args.request()).await?;
    log::info!(
        "r8lib {} written to {} (map: {})",
        built.version,
        built.jar.display(),
        built.map.display()
    );
    Ok(())
}
