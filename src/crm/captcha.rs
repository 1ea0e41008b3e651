//! reCAPTCHA token verification.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::CaptchaConfig;
use crate::error::{PromoError, PromoResult};

/// Verifies CAPTCHA response tokens.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    /// Check a token against the verification service.
    ///
    /// Returns Ok(false) when the service rejects the token; Err only on
    /// transport or protocol failures.
    async fn verify(&self, token: &str) -> PromoResult<bool>;
}

/// Response body of the siteverify endpoint.
#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Google reCAPTCHA verifier.
pub struct RecaptchaVerifier {
    secret_key: String,
    verify_url: String,
    client: Client,
}

impl RecaptchaVerifier {
    /// Create a new verifier from configuration.
    pub fn new(config: &CaptchaConfig) -> PromoResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PromoError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            secret_key: config.secret_key.clone(),
            verify_url: config.verify_url.clone(),
            client,
        })
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: &str) -> PromoResult<bool> {
        let params = [("secret", self.secret_key.as_str()), ("response", token)];

        let response = self
            .client
            .post(&self.verify_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| PromoError::Upstream(format!("CAPTCHA verification failed: {}", e)))?;

        let verification: SiteverifyResponse = response
            .json()
            .await
            .map_err(|e| PromoError::Upstream(format!("Invalid CAPTCHA response: {}", e)))?;

        if !verification.success {
            tracing::info!(
                error_codes = ?verification.error_codes,
                "reCAPTCHA rejected token"
            );
        }

        Ok(verification.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_response() {
        let parsed: SiteverifyResponse =
            serde_json::from_str(r#"{"success": true, "hostname": "example.com"}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.error_codes.is_empty());
    }

    #[test]
    fn test_parse_rejection_response() {
        let parsed: SiteverifyResponse = serde_json::from_str(
            r#"{"success": false, "error-codes": ["invalid-input-response"]}"#,
        )
        .unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error_codes, vec!["invalid-input-response"]);
    }
}
