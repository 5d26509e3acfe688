//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the leadership FMEA domain.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::AnalysisId;
pub use score::Score;
pub use timestamp::Timestamp;
