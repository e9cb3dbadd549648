//! Process execution seam
//!
//! Every external tool goes through [`CommandRunner`] so the pipeline can be
//! driven by a scripted fake in tests. [`SystemRunner`] is the real thing.

use crate::bootstrap::error::{BootstrapError, CommandFailedSnafu, Step};
use std::io;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Result of a child process that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
}

#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `program` to completion with stdout captured. stderr is left
    /// attached to the terminal.
    async fn output(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;

    /// Run `program` with inherited stdio, returning whether it exited zero
    async fn status(&self, program: &str, args: &[&str]) -> io::Result<bool>;
}

/// Spawns real child processes via tokio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn output(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        debug!("running: {} {}", program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    async fn status(&self, program: &str, args: &[&str]) -> io::Result<bool> {
        debug!("running: {} {}", program, args.join(" "));
        let status = Command::new(program).args(args).status().await?;
        Ok(status.success())
    }
}

/// Run a command for `step` and fail the step unless it exits zero
pub async fn run_checked<R: CommandRunner>(
    runner: &R,
    step: Step,
    program: &str,
    args: &[&str],
) -> Result<(), BootstrapError> {
    match runner.output(program, args).await {
        Ok(output) if output.success => {
            let stdout = output.stdout.trim();
            if !stdout.is_empty() {
                debug!("{step}: {stdout}");
            }
            Ok(())
        }
        Ok(output) => {
            debug!("{step}: {program} exited with {:?}", output.code);
            CommandFailedSnafu { step }.fail()
        }
        Err(e) => {
            debug!("{step}: failed to execute {program}: {e}");
            CommandFailedSnafu { step }.fail()
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted runner that records invocations instead of spawning

    use super::{CommandOutput, CommandRunner};
    use std::cell::RefCell;
    use std::io;

    #[derive(Debug, Default)]
    pub(crate) struct ScriptedRunner {
        calls: RefCell<Vec<String>>,
        missing: Vec<String>,
        failing: Vec<String>,
        unspawnable: Vec<String>,
    }

    impl ScriptedRunner {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// `which <tool>` reports not found
        pub(crate) fn missing(mut self, tool: &str) -> Self {
            self.missing.push(tool.to_string());
            self
        }

        /// Any command line starting with `prefix` exits 1
        pub(crate) fn failing(mut self, prefix: &str) -> Self {
            self.failing.push(prefix.to_string());
            self
        }

        /// `program` cannot be started at all
        pub(crate) fn unspawnable(mut self, program: &str) -> Self {
            self.unspawnable.push(program.to_string());
            self
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub(crate) fn ran(&self, prefix: &str) -> bool {
            self.calls.borrow().iter().any(|c| c.starts_with(prefix))
        }

        fn record(&self, program: &str, args: &[&str]) -> io::Result<bool> {
            let line = std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            self.calls.borrow_mut().push(line.clone());

            if self.unspawnable.iter().any(|p| p == program) {
                return Err(io::Error::new(io::ErrorKind::NotFound, program.to_string()));
            }
            Ok(!self.failing.iter().any(|p| line.starts_with(p.as_str())))
        }
    }

    impl CommandRunner for ScriptedRunner {
        async fn output(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
            let success = self.record(program, args)?;

            if program == "which" {
                let tool = args.first().copied().unwrap_or_default();
                let found = success && !self.missing.iter().any(|m| m == tool);
                return Ok(CommandOutput {
                    success: found,
                    code: Some(i32::from(!found)),
                    stdout: if found {
                        format!("/usr/local/bin/{tool}\n")
                    } else {
                        String::new()
                    },
                });
            }

            Ok(CommandOutput {
                success,
                code: Some(i32::from(!success)),
                stdout: String::new(),
            })
        }

        async fn status(&self, program: &str, args: &[&str]) -> io::Result<bool> {
            let success = self.record(program, args)?;
            Ok(success)
        }
    }
}
