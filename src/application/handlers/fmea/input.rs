//! Shared input checks for FMEA commands and queries.

use super::errors::FmeaError;
use crate::domain::foundation::ValidationError;

/// Rejects blank or oversized problem/decision text.
///
/// Blank means empty after trimming whitespace. Length is counted in
/// characters.
pub fn validate_input(problem: &str, decision: &str, max_chars: usize) -> Result<(), FmeaError> {
    if problem.trim().is_empty() {
        return Err(FmeaError::MissingInput { field: "problem" });
    }
    if decision.trim().is_empty() {
        return Err(FmeaError::MissingInput { field: "decision" });
    }

    for (field, text) in [("problem", problem), ("decision", decision)] {
        let len = text.chars().count();
        if len > max_chars {
            return Err(ValidationError::too_long(field, max_chars, len).into());
        }
    }

    Ok(())
}
