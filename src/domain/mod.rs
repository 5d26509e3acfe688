//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `leadership` - The ten leadership personas and their scoring bias
//! - `fmea` - Pure scoring engine, narrative text and report types

pub mod fmea;
pub mod foundation;
pub mod leadership;
