//! Step log lines and the failure signal read by the CI host.
//!
//! Informational lines go to stdout, error lines to stderr. Failure is
//! signalled with an `::error::` workflow command on stdout.

use std::io::{self, Write};

/// Sink for everything a step reports.
pub trait StepLog {
    /// Informational stream.
    fn info(&mut self, line: &str);
    /// Error stream.
    fn error(&mut self, line: &str);
    /// Signal the step's failure to the CI host.
    fn set_failed(&mut self, message: &str);
}

/// Escape data for a workflow command value.
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format a workflow command with no properties, e.g. `::error::msg`.
pub fn workflow_command(name: &str, message: &str) -> String {
    format!("::{}::{}", name, escape_data(message))
}

/// Writes to the process's stdout and stderr.
#[derive(Debug, Default)]
pub struct ConsoleLog;

impl ConsoleLog {
    /// Write `line`, adding a newline only if it does not already end in one.
    fn write_line(mut handle: impl Write, line: &str) {
        let result = if line.ends_with('\n') {
            write!(handle, "{}", line)
        } else {
            writeln!(handle, "{}", line)
        };
        // Broken pipes are ignored; the exit code still carries the outcome.
        if let Err(e) = result {
            if e.kind() != io::ErrorKind::BrokenPipe {
                log_status!("step", "Failed to write log line: {}", e);
            }
        }
    }
}

impl StepLog for ConsoleLog {
    fn info(&mut self, line: &str) {
        Self::write_line(io::stdout().lock(), line);
    }

    fn error(&mut self, line: &str) {
        Self::write_line(io::stderr().lock(), line);
    }

    fn set_failed(&mut self, message: &str) {
        Self::write_line(io::stdout().lock(), &workflow_command("error", message));
    }
}

/// Which stream a recorded line went to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Info(String),
    Error(String),
    Failed(String),
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingLog {
    pub lines: Vec<LogLine>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                LogLine::Info(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn error_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|l| match l {
                LogLine::Error(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The failure signal, if one was raised.
    pub fn failure(&self) -> Option<&str> {
        self.lines.iter().find_map(|l| match l {
            LogLine::Failed(s) => Some(s.as_str()),
            _ => None,
        })
    }
}

impl StepLog for RecordingLog {
    fn info(&mut self, line: &str) {
        self.lines.push(LogLine::Info(line.to_string()));
    }

    fn error(&mut self, line: &str) {
        self.lines.push(LogLine::Error(line.to_string()));
    }

    fn set_failed(&mut self, message: &str) {
        self.lines.push(LogLine::Failed(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_data_encodes_percent_first() {
        assert_eq!(escape_data("100%\n"), "100%25%0A");
        assert_eq!(escape_data("a\r\nb"), "a%0D%0Ab");
    }

    #[test]
    fn escape_data_leaves_plain_text() {
        assert_eq!(escape_data("Command failed: make"), "Command failed: make");
    }

    #[test]
    fn workflow_command_formats_error() {
        assert_eq!(
            workflow_command("error", "exit 1\nboom"),
            "::error::exit 1%0Aboom"
        );
    }

    #[test]
    fn recording_log_separates_streams() {
        let mut log = RecordingLog::new();
        log.info("one");
        log.error("two");
        log.set_failed("three");
        assert_eq!(log.info_lines(), vec!["one"]);
        assert_eq!(log.error_lines(), vec!["two"]);
        assert_eq!(log.failure(), Some("three"));
    }
}
