//! jdk_home - prints the home directory of a bundled JDK.

use anyhow::Context;
use clap::Parser;

use r8lib_builder::cli::JdkHomeArgs;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = JdkHomeArgs::parse();
    let home = args
        .resolve()
        .with_context(|| format!("cannot locate {}", args.generation))?;
    println!("{}", home);
    Ok(())
}
