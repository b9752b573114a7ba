//! Argument vectors for external tools.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

/// One external command: a program and its arguments, in order.
///
/// Arguments are only ever appended; flag order matters to the tools we call.
/// Paths are kept as `OsString` so non-UTF-8 names reach the child unchanged.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Invocation {
    program: OsString,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Appends a path argument.
    pub fn path(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    /// Appends `flag` followed by `value`.
    pub fn flag(self, flag: &str, value: impl Into<OsString>) -> Self {
        self.arg(flag).arg(value)
    }

    /// Appends `flag <path>` once per path, preserving order.
    pub fn repeated<P: AsRef<Path>>(self, flag: &str, paths: &[P]) -> Self {
        paths
            .iter()
            .fold(self, |inv, path| inv.arg(flag).path(path.as_ref()))
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Index of the first `flag` immediately followed by `value`.
    pub fn position_of(&self, flag: &str, value: impl AsRef<OsStr>) -> Option<usize> {
        let value = value.as_ref();
        self.args
            .windows(2)
            .position(|pair| pair[0] == flag && pair[1].as_os_str() == value)
    }

    /// Argument following the first occurrence of `flag`.
    pub fn value_of(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .windows(2)
            .find(|pair| pair[0] == flag)
            .map(|pair| pair[1].as_os_str())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
