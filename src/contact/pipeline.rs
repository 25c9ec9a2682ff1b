//! Pipeline controller — validate → format → notify → (best-effort) confirm.
//!
//! **Core invariant: the confirmation send is best-effort.** Once the
//! operator notification went out, the submission has succeeded from the
//! user's perspective; a confirmation failure is logged and recorded on the
//! receipt but never turns the result into an error. A notification failure,
//! by contrast, aborts the flow before any confirmation is attempted.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};

use crate::contact::form::{self, ContactSubmission};
use crate::contact::format;
use crate::delivery::{DeliveryClient, DeliveryReceipt};
use crate::error::ContactError;

/// Outcome of the best-effort confirmation send.
#[derive(Debug, Clone)]
pub enum ConfirmationStatus {
    Sent(DeliveryReceipt),
    /// The send failed. Already logged; the submission still succeeded.
    Failed,
}

/// Result of one successful submission: the notification receipt plus the
/// confirmation outcome.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub notification: DeliveryReceipt,
    pub confirmation: ConfirmationStatus,
}

/// Stateless controller for contact submissions. One instance serves all
/// requests; the delivery client is constructor-injected so tests can swap
/// in a double.
pub struct ContactPipeline {
    delivery: Arc<dyn DeliveryClient>,
    recipient: String,
    from_address: String,
}

impl ContactPipeline {
    pub fn new(delivery: Arc<dyn DeliveryClient>, recipient: String, from_address: String) -> Self {
        Self {
            delivery,
            recipient,
            from_address,
        }
    }

    /// Process one raw submission end to end.
    ///
    /// Flow: `Received → Validated → NotificationSent → ConfirmationAttempted`,
    /// or `Rejected` on invalid input (no send attempted), or `DeliveryFailed`
    /// if the notification send fails (confirmation not attempted).
    pub async fn submit(&self, raw: &Value) -> Result<SubmissionReceipt, ContactError> {
        let submission = form::validate(raw).map_err(ContactError::Validation)?;
        info!(email = %submission.email, "Contact submission validated");

        let notification =
            format::notification_email(&self.from_address, &self.recipient, &submission, Utc::now());
        let receipt = self.delivery.send(&notification).await?;
        info!(id = ?receipt.id, to = %self.recipient, "Notification email sent");

        let confirmation = self.confirm(&submission).await;

        Ok(SubmissionReceipt {
            notification: receipt,
            confirmation,
        })
    }

    /// Best-effort confirmation to the submitter.
    async fn confirm(&self, submission: &ContactSubmission) -> ConfirmationStatus {
        let email = format::confirmation_email(&self.from_address, submission);
        match self.delivery.send(&email).await {
            Ok(receipt) => {
                info!(id = ?receipt.id, to = %submission.email, "Confirmation email sent");
                ConfirmationStatus::Sent(receipt)
            }
            Err(e) => {
                warn!(error = %e, to = %submission.email, "Confirmation email failed; submission already succeeded");
                ConfirmationStatus::Failed
            }
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────
