//! External process execution.
//!
//! The orchestrator only ever needs "run this argument vector and tell me the
//! exit status, optionally with stdout". [`ProcessRunner`] is that seam;
//! [`SystemRunner`] is the real implementation on top of `tokio::process`.
//!
//! No timeout is applied: a hung tool hangs the run.

mod invocation;

pub use invocation::Invocation;

use std::process::Stdio;

use crate::error::{Error, Result};

/// What to do with the child's stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputMode {
    /// Collect stdout as text
    Capture,
    /// Let the child write to our stdout
    Inherit,
}

/// Exit status and (if captured) stdout of a finished process.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// Captured stdout, empty for [`OutputMode::Inherit`]
    pub stdout: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Fails with [`Error::ProcessFailed`] unless the exit code was zero.
    pub fn check(self, invocation: &Invocation) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }
        let status = match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        Err(Error::ProcessFailed {
            command: invocation.to_string(),
            status,
        })
    }
}

/// Runs invocations to completion.
///
/// Implementations report the exit status as data; callers decide whether a
/// non-zero exit is fatal (see [`ProcessOutput::check`]).
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    async fn execute(&self, invocation: &Invocation, mode: OutputMode) -> Result<ProcessOutput>;
}

/// Spawns real child processes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn execute(&self, invocation: &Invocation, mode: OutputMode) -> Result<ProcessOutput> {
        log::debug!("Running: {}", invocation);

        let mut command = tokio::process::Command::new(invocation.program());
        command.args(invocation.get_args()).stderr(Stdio::inherit());

        let spawn_error = |source: std::io::Error| Error::Spawn {
            program: invocation.program().to_string_lossy().into_owned(),
            source,
        };

        match mode {
            OutputMode::Capture => {
                let output = command.output().await.map_err(spawn_error)?;
                Ok(ProcessOutput {
                    code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                })
            }
            OutputMode::Inherit => {
                let status = command
                    .stdout(Stdio::inherit())
                    .status()
                    .await
                    .map_err(spawn_error)?;
                Ok(ProcessOutput {
                    code: status.code(),
                    stdout: String::new(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_rejects_non_zero_exit() {
        let inv = Invocation::new("java").arg("-version");
        let err = ProcessOutput {
            code: Some(3),
            stdout: String::new(),
        }
        .check(&inv)
        .unwrap_err();
        match err {
            Error::ProcessFailed { command, status } => {
                assert_eq!(command, "java -version");
                assert_eq!(status, "exit code 3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn check_rejects_signal_termination() {
        let output = ProcessOutput {
            code: None,
            stdout: String::new(),
        };
        assert!(output.check(&Invocation::new("java")).is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn system_runner_captures_stdout() {
        let inv = Invocation::new("sh").args(["-c", "echo R8 1.2.3"]);
        let output = SystemRunner.execute(&inv, OutputMode::Capture).await.unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "R8 1.2.3\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn system_runner_reports_exit_code() {
        let inv = Invocation::new("sh").args(["-c", "exit 7"]);
        let output = SystemRunner.execute(&inv, OutputMode::Inherit).await.unwrap();
        assert_eq!(output.code, Some(7));
    }

    #[tokio::test]
    async fn system_runner_reports_spawn_failure() {
        let inv = Invocation::new("definitely_not_a_real_command_12345");
        let err = SystemRunner
            .execute(&inv, OutputMode::Capture)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Spawn { .. }));
    }
}
