/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Diagnostics only: CI logs are not terminals, so they carry nothing but the
/// step's own report lines.
///
/// Usage:
/// ```ignore
/// log_status!("step", "Starting '{}'", name);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `step_runner::runner` instead of `step_runner::core::runner`
pub use self::core::*;
pub use self::utils::*;
