//! Pipedrive API client.
//!
//! Thin wrapper over the v1 REST API: create a person, create a deal tied to
//! that person, attach a note. Remote error detail is surfaced when the API
//! provides one.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::CrmConfig;
use crate::error::{PromoError, PromoResult};

/// A record returned by the CRM, with its numeric id extracted.
#[derive(Debug, Clone)]
pub struct CrmRecord {
    pub id: i64,
    pub data: Value,
}

/// Outbound CRM operations used by the contact forwarder.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    async fn create_person(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> PromoResult<CrmRecord>;

    async fn create_deal(&self, title: &str, person_id: i64) -> PromoResult<CrmRecord>;

    async fn add_note(&self, content: &str, person_id: i64, deal_id: i64) -> PromoResult<()>;
}

/// Standard Pipedrive response envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the Pipedrive v1 API.
pub struct PipedriveClient {
    base_url: String,
    api_token: String,
    client: Client,
}

impl PipedriveClient {
    /// Create a new client from configuration.
    pub fn new(config: &CrmConfig) -> PromoResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PromoError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            client,
        })
    }

    /// POST a JSON body to an endpoint and unwrap the response envelope.
    async fn post(&self, path: &str, body: Value, failure: &str) -> PromoResult<Value> {
        let url = format!("{}/{}?api_token={}", self.base_url, path, self.api_token);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PromoError::Upstream(format!("{}: {}", failure, e)))?;

        let status = response.status();
        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| PromoError::Upstream(format!("{}: {}", failure, e)))?;

        if !status.is_success() {
            // Pass the remote error detail through when present
            let detail = envelope.error.unwrap_or_else(|| failure.to_string());
            return Err(PromoError::Upstream(detail));
        }

        envelope
            .data
            .ok_or_else(|| PromoError::Upstream(failure.to_string()))
    }

    /// Person payload; the `phone` key is present only when a phone was given.
    fn person_body(name: &str, email: &str, phone: Option<&str>) -> Value {
        let mut body = json!({
            "name": name,
            "email": email,
        });
        if let Some(phone) = phone {
            body["phone"] = json!(phone);
        }
        body
    }

    fn extract_id(data: &Value, failure: &str) -> PromoResult<i64> {
        data.get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| PromoError::Upstream(format!("{}: missing id in response", failure)))
    }
}

#[async_trait]
impl CrmGateway for PipedriveClient {
    async fn create_person(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> PromoResult<CrmRecord> {
        let body = Self::person_body(name, email, phone);

        let data = self.post("persons", body, "Failed to create person").await?;
        let id = Self::extract_id(&data, "Failed to create person")?;

        Ok(CrmRecord { id, data })
    }

    async fn create_deal(&self, title: &str, person_id: i64) -> PromoResult<CrmRecord> {
        let body = json!({
            "title": title,
            "person_id": person_id,
            "value": 0,
            "currency": "USD",
        });

        let data = self.post("deals", body, "Failed to create deal").await?;
        let id = Self::extract_id(&data, "Failed to create deal")?;

        Ok(CrmRecord { id, data })
    }

    async fn add_note(&self, content: &str, person_id: i64, deal_id: i64) -> PromoResult<()> {
        let body = json!({
            "content": content,
            "person_id": person_id,
            "deal_id": deal_id,
        });

        self.post("notes", body, "Failed to add note").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_error_detail() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "Invalid token"}"#).unwrap();
        assert_eq!(envelope.error.as_deref(), Some("Invalid token"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_person_body_omits_absent_phone() {
        let body = PipedriveClient::person_body("Jane", "jane@example.com", None);
        assert_eq!(body["name"], "Jane");
        assert!(body.get("phone").is_none());

        let with_phone = PipedriveClient::person_body("Jane", "jane@example.com", Some("+100"));
        assert_eq!(with_phone["phone"], "+100");
    }

    #[test]
    fn test_extract_id() {
        let data = json!({"id": 42, "name": "Jane"});
        assert_eq!(PipedriveClient::extract_id(&data, "fail").unwrap(), 42);

        let missing = json!({"name": "Jane"});
        assert!(PipedriveClient::extract_id(&missing, "fail").is_err());
    }
}
