//! Errors raised by FMEA application handlers.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Input problems caught before the engine runs.
///
/// The engine itself never fails; these exist only at the caller boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FmeaError {
    #[error("Please provide both Problem and Decision taken by CEO.")]
    MissingInput { field: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FmeaError {
    /// Returns the error code for API responses.
    pub fn code(&self) -> ErrorCode {
        match self {
            FmeaError::MissingInput { .. } => ErrorCode::EmptyField,
            FmeaError::Validation(err) => err.code(),
        }
    }
}
