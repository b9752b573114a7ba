//! Bundled JDK discovery.
//!
//! R8's build keeps several JDK generations checked in under
//! `third_party/openjdk`, one tree per host platform:
//!
//! ```text
//! third_party/openjdk/
//!     jdk-11/{linux,osx,windows}        (osx home is osx/Contents/Home)
//!     openjdk-9.0.4/{linux,osx,windows}
//!     jdk8/{linux-x86,darwin-x86}
//!     openjdk-rt-1.8/rt.jar
//! ```
//!
//! [`JdkLocator`] turns a [`JdkGeneration`] into a [`JdkHome`] and the `java`
//! and `javac` [`Executable`]s inside it. Nothing here touches the filesystem;
//! a missing JDK only shows up when the executable is spawned.
//!
//! # Example
//!
//! ```no_run
//! use r8lib_builder::jdk::{JdkGeneration, JdkLocator};
//!
//! # fn example() -> r8lib_builder::Result<()> {
//! let locator = JdkLocator::new("third_party");
//! let home = locator.resolve_home(JdkGeneration::Jdk9)?;
//! println!("java: {}", locator.java_executable(Some(&home)));
//! # Ok(())
//! # }
//! ```

mod executable;
mod layout;
mod locator;
mod platform;

pub use executable::{Executable, JdkHome};
pub use locator::JdkLocator;
pub use platform::{JdkGeneration, Platform};
