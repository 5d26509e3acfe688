//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer validates caller input and orchestrates the pure FMEA engine.

pub mod handlers;

pub use handlers::{
    EvaluatePersonaHandler, EvaluatePersonaQuery, FmeaError, PersonaEvaluation,
    RunLeadershipFmeaCommand, RunLeadershipFmeaHandler, RunLeadershipFmeaResult,
};
