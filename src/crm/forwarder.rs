//! Contact-form forwarding pipeline.
//!
//! Fixed sequence: verify CAPTCHA, validate required fields, create a person,
//! create a deal, attach the message as a note. Any failure before the note
//! short-circuits; a note failure is logged and ignored.

use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::crm::captcha::CaptchaVerifier;
use crate::crm::pipedrive::CrmGateway;
use crate::error::{PromoError, PromoResult};

/// A contact-form submission from the website.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ContactSubmission {
    /// Contact name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Optional free-text message.
    #[serde(default)]
    pub message: Option<String>,
    /// CAPTCHA response token.
    #[serde(default)]
    pub token: String,
}

/// Result of a successful forward: the created CRM records.
#[derive(Debug, Clone)]
pub struct ContactOutcome {
    pub person: Value,
    pub deal: Value,
}

/// Relays contact-form submissions into the CRM.
#[derive(Clone)]
pub struct ContactForwarder {
    captcha: Arc<dyn CaptchaVerifier>,
    crm: Arc<dyn CrmGateway>,
}

impl ContactForwarder {
    pub fn new(captcha: Arc<dyn CaptchaVerifier>, crm: Arc<dyn CrmGateway>) -> Self {
        Self { captcha, crm }
    }

    /// Run the forwarding pipeline for one submission.
    pub async fn forward(&self, submission: &ContactSubmission) -> PromoResult<ContactOutcome> {
        if !self.captcha.verify(&submission.token).await? {
            return Err(PromoError::BadRequest(
                "reCAPTCHA verification failed".to_string(),
            ));
        }

        if submission.name.trim().is_empty() || submission.email.trim().is_empty() {
            return Err(PromoError::BadRequest(
                "Name and email are required".to_string(),
            ));
        }

        let person = self
            .crm
            .create_person(
                &submission.name,
                &submission.email,
                submission.phone.as_deref(),
            )
            .await?;

        tracing::info!(person_id = person.id, "CRM person created");

        let deal_title = format!("Deal from Website - {}", submission.name);
        let deal = self.crm.create_deal(&deal_title, person.id).await?;

        tracing::info!(deal_id = deal.id, "CRM deal created");

        // Best-effort: a failed note must not fail the submission
        if let Some(message) = submission.message.as_deref().filter(|m| !m.trim().is_empty()) {
            if let Err(e) = self.crm.add_note(message, person.id, deal.id).await {
                tracing::warn!(error = %e, "Failed to attach note to deal");
            }
        }

        Ok(ContactOutcome {
            person: person.data,
            deal: deal.data,
        })
    }
}
