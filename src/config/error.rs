//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Agent delay exceeds maximum allowed (3000ms)")]
    AgentDelayTooLong,

    #[error("max_input_chars must be greater than zero")]
    InvalidMaxInputChars,

    #[error("Pauses across a full run ({run_delay_ms}ms) reach the request timeout ({timeout_secs}s)")]
    RunDelayExceedsTimeout { run_delay_ms: u64, timeout_secs: u64 },
}
