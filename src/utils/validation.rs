//! Input validation primitives.
//!
//! Blank values (empty or whitespace-only) count as absent everywhere in
//! this crate, so both helpers trim before checking.

use crate::error::Result;

/// Trim a value and drop it if nothing is left.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Require a value to be present and non-blank.
///
/// Returns the trimmed value on success, or the error built by `missing`.
/// ```ignore
/// validation::require_non_empty(raw, || Error::config_missing_input("command", "INPUT_COMMAND"))?
/// ```
pub fn require_non_empty<'a>(
    value: Option<&'a str>,
    missing: impl FnOnce() -> crate::error::Error,
) -> Result<&'a str> {
    non_blank(value).ok_or_else(missing)
}
