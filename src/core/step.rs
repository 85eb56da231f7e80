use serde::Serialize;

use crate::error::{Error, Result};
use crate::inputs::{self, Inputs};
use crate::utils::validation;

/// One named unit of CI work: a label and a shell command line.
///
/// The command is opaque here; it is handed to the host shell as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptor {
    name: String,
    command: String,
}

impl StepDescriptor {
    /// Build a descriptor, rejecting a blank name or command.
    pub fn new(name: &str, command: &str) -> Result<Self> {
        let name = require(name, inputs::STEP_NAME)?;
        let command = require(command, inputs::COMMAND)?;
        Ok(Self {
            name: name.to_string(),
            command: command.to_string(),
        })
    }

    /// Resolve both required inputs. The step name is checked first.
    pub fn from_inputs(resolved: &Inputs<'_>) -> Result<Self> {
        let name = resolved.require(inputs::STEP_NAME)?;
        let command = resolved.require(inputs::COMMAND)?;
        Self::new(&name, &command)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

fn require<'a>(value: &'a str, input: &str) -> Result<&'a str> {
    validation::require_non_empty(Some(value), || {
        Error::config_missing_input(input, inputs::env_var_name(input))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::collections::HashMap;

    #[test]
    fn new_trims_fields() {
        let step = StepDescriptor::new(" build ", " echo done ").unwrap();
        assert_eq!(step.name(), "build");
        assert_eq!(step.command(), "echo done");
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = StepDescriptor::new("  ", "echo done").unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigMissingInput);
        assert_eq!(err.details["input"], "step_name");
    }

    #[test]
    fn new_rejects_blank_command() {
        let err = StepDescriptor::new("build", "").unwrap_err();
        assert_eq!(err.details["input"], "command");
    }

    #[test]
    fn from_inputs_checks_step_name_first() {
        let env: HashMap<String, String> = HashMap::new();
        let err = StepDescriptor::from_inputs(&Inputs::new(&env)).unwrap_err();
        assert_eq!(err.details["input"], "step_name");
    }

    #[test]
    fn from_inputs_reads_environment_names() {
        let env: HashMap<String, String> = [
            ("INPUT_STEP_NAME".to_string(), "lint".to_string()),
            ("INPUT_COMMAND".to_string(), "cargo fmt --check".to_string()),
        ]
        .into_iter()
        .collect();
        let step = StepDescriptor::from_inputs(&Inputs::new(&env)).unwrap();
        assert_eq!(step.name(), "lint");
        assert_eq!(step.command(), "cargo fmt --check");
    }
}
