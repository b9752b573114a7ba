//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

use crate::r8lib::{DEFAULT_R8_WITH_DEPS, LibraryRequest};

/// Shrinks an R8 jar into r8lib
#[derive(Parser, Debug)]
#[command(
    name = "create_r8lib",
    version,
    about = "Shrinks an R8 jar into a versioned r8lib jar and its map",
    long_about = "Runs R8 on the bundled JDK 11 to shrink an R8 jar into r8lib.

The R8 version (or the HEAD commit for engineering builds) is used as the map id.
The map is written next to the output jar with a .map suffix.

Usage:
  create_r8lib --r8jar build/libs/r8.jar --output build/libs/r8lib.jar --pg-conf src/main/keep.txt"
)]
pub struct Args {
    /// The R8 jar to compile
    #[arg(long, value_name = "PATH")]
    pub r8jar: PathBuf,

    /// The output path for the r8lib
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Keep configuration (repeatable, order preserved)
    #[arg(long = "pg-conf", value_name = "PATH")]
    pub pg_conf: Vec<PathBuf>,

    /// Additional libraries (JDK 1.8 rt.jar already included)
    #[arg(long, value_name = "PATH")]
    pub lib: Vec<PathBuf>,

    /// Directory holding the bundled JDKs (`openjdk/...`)
    #[arg(long, value_name = "DIR", env = "R8_THIRD_PARTY", default_value = "third_party")]
    pub third_party: PathBuf,

    /// R8 with dependencies, used to run the shrinking
    #[arg(long, value_name = "PATH", env = "R8_WITH_DEPS_JAR", default_value = DEFAULT_R8_WITH_DEPS)]
    pub r8_with_deps: PathBuf,

    /// Source checkout used for engineering build versions
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub checkout: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.r8jar.as_os_str().is_empty() {
            return Err("--r8jar cannot be empty".to_string());
        }
        if self.output.as_os_str().is_empty() {
            return Err("--output cannot be empty".to_string());
        }
        if self.r8jar == self.output {
            return Err(format!(
                "--output must differ from --r8jar ({})",
                self.output.display()
            ));
        }
        Ok(())
    }

    /// The build request these arguments describe.
    pub fn request(&self) -> LibraryRequest {
        LibraryRequest {
            r8jar: self.r8jar.clone(),
            output: self.output.clone(),
            pg_confs: self.pg_conf.clone(),
            libs: self.lib.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("create_r8lib").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn repeated_options_keep_order() {
        let args = parse(&[
            "--r8jar", "r8.jar", "--output", "r8lib.jar",
            "--pg-conf", "b.txt", "--lib", "l1.jar", "--pg-conf", "a.txt", "--lib", "l2.jar",
        ]);
        let request = args.request();
        assert_eq!(request.pg_confs, [PathBuf::from("b.txt"), PathBuf::from("a.txt")]);
        assert_eq!(request.libs, [PathBuf::from("l1.jar"), PathBuf::from("l2.jar")]);
    }

    #[test]
    fn defaults() {
        let args = parse(&["--r8jar", "r8.jar", "--output", "r8lib.jar"]);
        assert!(args.pg_conf.is_empty());
        assert!(args.lib.is_empty());
        assert_eq!(args.r8_with_deps, PathBuf::from(DEFAULT_R8_WITH_DEPS));
        assert_eq!(args.checkout, PathBuf::from("."));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn required_arguments() {
        assert!(Args::try_parse_from(["create_r8lib", "--r8jar", "r8.jar"]).is_err());
        assert!(Args::try_parse_from(["create_r8lib", "--output", "r8lib.jar"]).is_err());
    }

    #[test]
    fn output_must_not_overwrite_input() {
        let args = parse(&["--r8jar", "r8.jar", "--output", "r8.jar"]);
        assert!(args.validate().is_err());
    }
}
