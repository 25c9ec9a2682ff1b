//! Error types for the contact service.

use crate::contact::form::FieldError;

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Contact pipeline error: {0}")]
    Contact(#[from] ContactError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Submission pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// The submitted record violated one or more field rules.
    /// Entries follow field order; the first is shown to the user.
    #[error("validation failed on field '{}'", .0.first().map_or("?", |e| e.field))]
    Validation(Vec<FieldError>),

    /// The operator notification could not be delivered.
    #[error("delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Transactional-email provider errors.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("provider rejected the send (HTTP {status}): {body}")]
    Provider { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
