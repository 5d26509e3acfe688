//! Leadership FMEA - Rule-based risk scoring across leadership personas
//!
//! This crate scores a business problem and a CEO decision with a
//! Failure Mode and Effects Analysis (Severity, Occurrence, Detection,
//! Risk Priority Number) once for each of ten leadership styles, and
//! serves the results over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
