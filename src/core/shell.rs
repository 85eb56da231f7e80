//! Host shell execution.
//!
//! The runner executes arbitrary shell syntax: the command string is passed
//! unparsed to `sh -c` (or `cmd /C` on Windows). No quoting, sandboxing or
//! timeout is applied.

use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Error, Result};
use crate::utils::command::CapturedOutput;

/// Result of a command that was launched and ran to termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub output: CapturedOutput,
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub signal: Option<i32>,
}

impl CommandOutput {
    pub fn from_status(status: ExitStatus, output: CapturedOutput) -> Self {
        Self {
            output,
            success: status.success(),
            exit_code: status.code(),
            signal: termination_signal(&status),
        }
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}

/// Executes a command line in a shell and waits for it to finish.
pub trait ShellExecutor {
    /// `Err` only when the shell itself could not be started. A command
    /// that ran and failed is still `Ok` with a non-success output.
    fn run(&self, command: &str) -> Result<CommandOutput>;
}

/// The host's default command interpreter.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostShell;

impl HostShell {
    fn command(command: &str) -> Command {
        #[cfg(windows)]
        let cmd = {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        };

        #[cfg(not(windows))]
        let cmd = {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        };

        cmd
    }
}

impl ShellExecutor for HostShell {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        let out = Self::command(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::step_launch_failed(command, e.to_string()))?;

        Ok(CommandOutput::from_status(
            out.status,
            CapturedOutput::from_bytes(&out.stdout, &out.stderr),
        ))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_stderr_separately() {
        let result = HostShell.run("printf out; printf err 1>&2").unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert_eq!(result.output.stdout, "out");
        assert_eq!(result.output.stderr, "err");
    }

    #[test]
    fn reports_exit_code() {
        let result = HostShell.run("exit 3").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
        assert_eq!(result.signal, None);
    }

    #[test]
    fn reports_signal_termination() {
        let result = HostShell.run("kill -9 $$").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, None);
        assert_eq!(result.signal, Some(9));
    }

    #[test]
    fn missing_binary_is_a_shell_exit_not_a_launch_error() {
        let result = HostShell.run("nonexistent_command_xyz").unwrap();
        assert_eq!(result.exit_code, Some(127));
    }

    #[test]
    fn stdin_is_closed() {
        let result = HostShell.run("cat").unwrap();
        assert!(result.success);
        assert!(result.output.stdout.is_empty());
    }
}
