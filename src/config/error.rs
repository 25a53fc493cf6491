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

    #[error("Invalid bind address: {0}")]
    InvalidHost(String),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("VAPID subject must start with mailto: or https:")]
    InvalidVapidSubject,

    #[error("Messaging recipient must contain digits only")]
    InvalidRecipient,

    #[error("Invalid messaging API base URL")]
    InvalidApiBaseUrl,

    #[error("Channel timeout must be between 1 and 120 seconds")]
    InvalidChannelTimeout,

    #[error("Broadcast capacity must be greater than zero")]
    InvalidCapacity,
}
