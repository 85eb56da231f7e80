//! Generic utility primitives with zero domain knowledge.
//!
//! - `command` - Captured process output and error text extraction
//! - `validation` - Input validation helpers

pub mod command;
pub mod validation;
