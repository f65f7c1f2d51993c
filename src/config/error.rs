//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error(
        "Request timeout of {request_secs}s must exceed the AI call budget of {ai_budget_secs}s"
    )]
    RequestTimeoutBelowAiBudget { request_secs: u64, ai_budget_secs: u64 },

    #[error("Invalid AI base URL")]
    InvalidBaseUrl,

    #[error("AI penalties must be between -2.0 and 2.0")]
    InvalidPenalty,

    #[error("AI max_tokens must be positive")]
    InvalidMaxTokens,

    #[error("Storage data_dir cannot be blank")]
    InvalidDataDir,

    #[error("Invalid conversation settings: {0}")]
    Conversation(#[from] crate::domain::foundation::ValidationError),
}
