//! Transactional-email delivery.
//!
//! `DeliveryClient` is the seam between the pipeline and the provider, so
//! tests can substitute a recording stub. `ResendClient` is the production
//! implementation over the Resend HTTP API.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::error::DeliveryError;

/// One outbound email. Field names match the Resend wire format.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Provider acknowledgement for a sent message.
#[derive(Debug, Clone, Default)]
pub struct DeliveryReceipt {
    pub id: Option<String>,
}

/// Sends a single email through the transactional-email provider.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Resend HTTP API client.
pub struct ResendClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl ResendClient {
    pub fn new(api_key: SecretString, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    fn send_url(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Default, Deserialize)]
struct SendResponse {
    id: Option<String>,
}

#[async_trait]
impl DeliveryClient for ResendClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let resp = self
            .client
            .post(self.send_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(email)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DeliveryError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SendResponse = resp.json().await.unwrap_or_default();
        tracing::debug!(id = ?parsed.id, "Provider accepted email");
        Ok(DeliveryReceipt { id: parsed.id })
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn email(reply_to: Option<&str>) -> OutgoingEmail {
        OutgoingEmail {
            from: "Novaxis <onboarding@resend.dev>".to_string(),
            to: "hola@novaxis.com".to_string(),
            reply_to: reply_to.map(str::to_string),
            subject: "Contacto Novaxis: prueba".to_string(),
            html: "<p>hola</p>".to_string(),
            text: "hola".to_string(),
        }
    }

    #[test]
    fn wire_format_includes_reply_to_when_set() {
        let json = serde_json::to_value(email(Some("ana@example.com"))).unwrap();
        assert_eq!(json["reply_to"], "ana@example.com");
        assert_eq!(json["from"], "Novaxis <onboarding@resend.dev>");
    }

    #[test]
    fn wire_format_omits_reply_to_when_absent() {
        let json = serde_json::to_value(email(None)).unwrap();
        assert!(json.get("reply_to").is_none());
    }

    #[test]
    fn send_url_handles_trailing_slash() {
        let client = ResendClient::new(SecretString::from("re_test"), "https://api.resend.com/");
        assert_eq!(client.send_url(), "https://api.resend.com/emails");
    }
}
