// Public modules
pub mod error;
pub mod inputs;
pub mod output;
pub mod report;
pub mod runner;
pub mod shell;
pub mod step;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::StepReport;
pub use runner::StepOutcome;
pub use step::StepDescriptor;
