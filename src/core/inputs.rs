//! Step inputs as supplied by the CI host.
//!
//! The host passes each action input through the environment as
//! `INPUT_<NAME>`, upper-cased with spaces turned into underscores.
//! Command-line values win over the environment.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::utils::validation;

pub const STEP_NAME: &str = "step_name";
pub const COMMAND: &str = "command";

/// Environment variable the host uses for an input.
pub fn env_var_name(input: &str) -> String {
    format!("INPUT_{}", input.replace(' ', "_").to_uppercase())
}

/// Where input values come from.
pub trait InputSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Reads inputs from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvInputs;

impl InputSource for EnvInputs {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl InputSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolves named inputs, letting explicit values override a source.
pub struct Inputs<'a> {
    source: &'a dyn InputSource,
    overrides: HashMap<&'static str, String>,
}

impl<'a> Inputs<'a> {
    pub fn new(source: &'a dyn InputSource) -> Self {
        Self {
            source,
            overrides: HashMap::new(),
        }
    }

    /// Override an input with an explicit value (e.g. from a CLI flag).
    pub fn with_override(mut self, input: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.overrides.insert(input, value);
        }
        self
    }

    /// Trimmed value of an input; blank counts as absent.
    pub fn get(&self, input: &str) -> Option<String> {
        let raw = match self.overrides.get(input) {
            Some(value) => Some(value.clone()),
            None => self.source.lookup(&env_var_name(input)),
        };
        validation::non_blank(raw.as_deref()).map(str::to_string)
    }

    /// Value of a required input, or a missing-input error naming it.
    pub fn require(&self, input: &str) -> Result<String> {
        self.get(input)
            .ok_or_else(|| Error::config_missing_input(input, env_var_name(input)))
    }
}
