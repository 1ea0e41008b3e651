//! Configuration module for the promo admin service.
//!
//! Loads configuration from YAML files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub captcha: CaptchaConfig,
    #[serde(default)]
    pub crm: CrmConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// reCAPTCHA verification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptchaConfig {
    /// Secret key for the siteverify call.
    #[serde(default)]
    pub secret_key: String,
    /// Verification endpoint. Overridable for tests.
    #[serde(default = "default_captcha_url")]
    pub verify_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Pipedrive CRM configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CrmConfig {
    /// API token appended to every request.
    #[serde(default)]
    pub api_token: String,
    /// Base URL of the Pipedrive v1 API.
    #[serde(default = "default_crm_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_captcha_url() -> String {
    "https://www.google.com/recaptcha/api/siteverify".to_string()
}

fn default_crm_url() -> String {
    "https://prowork.pipedrive.com/api/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PROMO_*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(false))
            // Layer on local overrides
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables with PROMO_ prefix
            .add_source(
                Environment::with_prefix("PROMO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for CaptchaConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            verify_url: default_captcha_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: default_crm_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_captcha_config() {
        let config = CaptchaConfig::default();
        assert!(config.secret_key.is_empty());
        assert!(config.verify_url.contains("siteverify"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_default_crm_config() {
        let config = CrmConfig::default();
        assert!(config.base_url.ends_with("/api/v1"));
    }
}
