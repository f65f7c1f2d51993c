//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WINGMAN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use wingman::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod ai;
mod error;
mod server;
mod storage;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

use crate::domain::conversation::ConversationConfig;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Text generation configuration (OpenAI)
    #[serde(default)]
    pub ai: AiConfig,

    /// Conversation engine thresholds
    #[serde(default)]
    pub conversation: ConversationConfig,

    /// Context storage
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WINGMAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WINGMAN__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WINGMAN__AI__OPENAI_API_KEY=...` -> `ai.openai_api_key = ...`
    /// - `WINGMAN__CONVERSATION__TEMPERATURE_BY_STAGE__CLOSING=0.4`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WINGMAN")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.conversation.validate()?;
        self.storage.validate()?;

        let ai_budget = self.ai.call_budget();
        if self.server.request_timeout() <= ai_budget {
            return Err(ValidationError::RequestTimeoutBelowAiBudget {
                request_secs: self.server.request_timeout_secs,
                ai_budget_secs: ai_budget.as_secs(),
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
