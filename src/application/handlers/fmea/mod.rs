//! FMEA handlers - full runs and single-persona evaluations.
//!
//! These handlers own the caller-side duties the engine leaves out:
//! rejecting blank input and walking the styles in display order.

mod errors;
mod evaluate_persona;
mod input;
mod run_leadership_fmea;

pub use errors::FmeaError;
pub use evaluate_persona::{EvaluatePersonaHandler, EvaluatePersonaQuery, PersonaEvaluation};
pub use input::validate_input;
pub use run_leadership_fmea::{
    RunLeadershipFmeaCommand, RunLeadershipFmeaHandler, RunLeadershipFmeaResult,
};
