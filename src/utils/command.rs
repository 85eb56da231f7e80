//! Captured process output and the text helpers built on it.

use serde::Serialize;

/// Captured output from command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapturedOutput {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stdout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub stderr: String,
}

impl CapturedOutput {
    pub fn new(stdout: String, stderr: String) -> Self {
        Self { stdout, stderr }
    }

    /// Decode raw process buffers, replacing invalid UTF-8.
    pub fn from_bytes(stdout: &[u8], stderr: &[u8]) -> Self {
        Self::new(
            String::from_utf8_lossy(stdout).into_owned(),
            String::from_utf8_lossy(stderr).into_owned(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }

    /// Extract error text from the captured output.
    ///
    /// Prefers stderr, falls back to stdout if stderr is empty.
    pub fn error_text(&self) -> &str {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            stderr
        } else {
            self.stdout.trim()
        }
    }
}

/// Append a detail block to a headline, skipping it when blank.
pub fn with_detail(headline: String, detail: &str) -> String {
    if detail.is_empty() {
        headline
    } else {
        format!("{}\n{}", headline, detail)
    }
}
