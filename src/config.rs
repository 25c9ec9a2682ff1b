//! Environment-driven configuration.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Fallback operator recipient when `EMAIL_RECIPIENT` is not set.
pub const DEFAULT_RECIPIENT: &str = "hola@novaxis.com";

/// Fallback sender identity when `EMAIL_FROM` is not set.
pub const DEFAULT_FROM: &str = "Novaxis <onboarding@resend.dev>";

const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";
const DEFAULT_PORT: u16 = 8080;

/// Contact service configuration, built from environment variables.
#[derive(Debug)]
pub struct ContactConfig {
    /// Resend API key (required).
    pub resend_api_key: SecretString,
    /// Where operator notifications are delivered.
    pub recipient: String,
    /// Sender identity for both outbound emails.
    pub from_address: String,
    /// HTTP bind port.
    pub bind_port: u16,
    /// Provider base URL (overridable so tests can point at a stub).
    pub resend_base_url: String,
}

impl ContactConfig {
    /// Build config from environment variables.
    ///
    /// `RESEND_API_KEY` is required; everything else has a fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let resend_api_key = std::env::var("RESEND_API_KEY")
            .map(SecretString::from)
            .map_err(|_| ConfigError::MissingEnvVar("RESEND_API_KEY".to_string()))?;

        let recipient =
            std::env::var("EMAIL_RECIPIENT").unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string());

        let from_address =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_FROM.to_string());

        let bind_port = match std::env::var("CONTACT_BIND_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CONTACT_BIND_PORT".to_string(),
                message: format!("not a valid port: {raw}"),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let resend_base_url = std::env::var("RESEND_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_RESEND_BASE_URL.to_string());

        Ok(Self {
            resend_api_key,
            recipient,
            from_address,
            bind_port,
            resend_base_url,
        })
    }
}

// ── Tests ───────────────────────────────────────────────────────────
