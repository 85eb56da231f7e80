//! Public output types for step results.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::step::StepDescriptor;
use crate::utils::command::CapturedOutput;

/// Serializable summary of one step invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub step_name: String,
    pub command: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(flatten)]
    pub output: CapturedOutput,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl StepReport {
    pub fn new(step: &StepDescriptor, started_at: DateTime<Utc>) -> Self {
        Self {
            step_name: step.name().to_string(),
            command: step.command().to_string(),
            success: false,
            exit_code: None,
            output: CapturedOutput::default(),
            started_at,
            duration_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_and_skips_empty_output() {
        let step = StepDescriptor::new("build", "echo done").unwrap();
        let mut report = StepReport::new(&step, Utc::now());
        report.success = true;
        report.exit_code = Some(0);
        report.output.stdout = "done\n".to_string();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["stepName"], "build");
        assert_eq!(json["exitCode"], 0);
        assert_eq!(json["stdout"], "done\n");
        assert!(json.get("stderr").is_none());
        assert!(json.get("startedAt").is_some());
    }
}
