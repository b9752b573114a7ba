//! create_r8lib - shrinks an R8 jar into r8lib.
//!
//! Resolves the R8 version, runs R8 on the bundled JDK 11 and writes the
//! output jar plus its `.map`.

use std::process::ExitCode;

use r8lib_builder::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = cli::run().await {
        log::debug!("create_r8lib failed: {:?}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
