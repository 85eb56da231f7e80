//! Single-attempt step execution.
//!
//! A step runs exactly once: `Running -> Succeeded | Failed`. There is no
//! retry, backoff or timeout, and the outcome is returned to the caller
//! instead of being recorded in process-wide state.

use std::time::Instant;

use chrono::Utc;

use crate::error::{CommandFailedDetails, Error};
use crate::inputs::Inputs;
use crate::output::StepReport;
use crate::report::StepLog;
use crate::shell::{CommandOutput, ShellExecutor};
use crate::step::StepDescriptor;
use crate::utils::command::with_detail;

/// How a step ended.
#[derive(Debug)]
pub enum StepOutcome {
    Succeeded(StepReport),
    Failed {
        /// `None` when the step never got past input validation.
        report: Option<StepReport>,
        error: Error,
    },
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded(_))
    }

    pub fn report(&self) -> Option<&StepReport> {
        match self {
            StepOutcome::Succeeded(report) => Some(report),
            StepOutcome::Failed { report, .. } => report.as_ref(),
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            StepOutcome::Succeeded(_) => None,
            StepOutcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Resolve the step from its inputs and run it.
///
/// Missing inputs fail the step before any subprocess is launched.
pub fn run(inputs: &Inputs<'_>, shell: &dyn ShellExecutor, log: &mut dyn StepLog) -> StepOutcome {
    match StepDescriptor::from_inputs(inputs) {
        Ok(step) => run_step(&step, shell, log),
        Err(error) => fail(None, None, error, log),
    }
}

/// Run a validated step once through `shell`, reporting to `log`.
pub fn run_step(
    step: &StepDescriptor,
    shell: &dyn ShellExecutor,
    log: &mut dyn StepLog,
) -> StepOutcome {
    log_status!("step", "Starting '{}'", step.name());
    log.info(&format!("Running step: {}", step.name()));
    log.info(&format!("Command: {}", step.command()));

    let started = Instant::now();
    let mut report = StepReport::new(step, Utc::now());

    let result = shell.run(step.command());
    report.duration_ms = started.elapsed().as_millis().try_into().unwrap_or(u64::MAX);

    let result = match result {
        Ok(result) => result,
        Err(error) => return fail(Some(step), Some(report), error, log),
    };

    if !result.output.stdout.is_empty() {
        log.info(&result.output.stdout);
    }
    if !result.output.stderr.is_empty() {
        log.error(&result.output.stderr);
    }

    report.exit_code = result.exit_code;
    report.output = result.output.clone();

    if !result.success {
        let error = command_failed(step.command(), result);
        return fail(Some(step), Some(report), error, log);
    }

    report.success = true;
    log.info(&format!("Step '{}' succeeded", step.name()));
    StepOutcome::Succeeded(report)
}

fn fail(
    step: Option<&StepDescriptor>,
    report: Option<StepReport>,
    error: Error,
    log: &mut dyn StepLog,
) -> StepOutcome {
    match step {
        Some(step) => log.error(&format!("Step '{}' failed: {}", step.name(), error.message)),
        None => log.error(&format!("Step failed: {}", error.message)),
    }
    log.set_failed(&error.message);
    StepOutcome::Failed { report, error }
}

/// Build the error for a command that ran but did not exit with status 0.
pub fn command_failed(command: &str, result: CommandOutput) -> Error {
    let headline = match (result.exit_code, result.signal) {
        (Some(code), _) => format!("Command failed with exit code {}: {}", code, command),
        (None, Some(signal)) => format!("Command terminated by signal {}: {}", signal, command),
        (None, None) => format!("Command failed: {}", command),
    };
    let message = with_detail(headline, result.output.error_text());

    Error::step_command_failed(
        message,
        CommandFailedDetails {
            command: command.to_string(),
            exit_code: result.exit_code,
            signal: result.signal,
            stdout: result.output.stdout,
            stderr: result.output.stderr,
        },
    )
}
