//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod fmea;

pub use fmea::{
    EvaluatePersonaHandler, EvaluatePersonaQuery, FmeaError, PersonaEvaluation,
    RunLeadershipFmeaCommand, RunLeadershipFmeaHandler, RunLeadershipFmeaResult,
};
