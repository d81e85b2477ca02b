use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::app_config::{ServiceConfig, TranslationService};
use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Sogou client for the deliver translate endpoint
///
/// Like Baidu, requests are MD5-signed with a salted pid/key pair and errors
/// are reported in-band through an error code field.
#[derive(Debug)]
pub struct SogouTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
    /// Partner id issued by the service
    app_id: String,
    /// Signing key issued by the service
    api_key: String,
}

impl SogouTranslate {
    /// Create a new Sogou client
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: if config.endpoint.is_empty() {
                "https://fanyi.sogou.com/reventondc/api/sogouTranslate".to_string()
            } else {
                config.endpoint.clone()
            },
            app_id: config.app_id.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn sign(&self, text: &str, salt: u32) -> String {
        let digest = md5::compute(format!("{}{}{}{}", self.app_id, text, salt, self.api_key));
        format!("{:x}", digest)
    }
}

#[async_trait]
impl TranslationBackend for SogouTranslate {
    fn service(&self) -> TranslationService {
        TranslationService::Sogou
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        if self.app_id.is_empty() || self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Sogou pid and key are not configured".to_string(),
            ));
        }

        let salt: u32 = rand::random();
        let sign = self.sign(text, salt);
        let salt = salt.to_string();
        let params = [
            ("q", text),
            ("from", source),
            ("to", target),
            ("pid", self.app_id.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
            ("charset", "utf-8"),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Sogou translate error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        if let Some(code) = json.get("errorCode").and_then(|v| v.as_str()) {
            if code != "0" {
                let message = json
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("unknown error")
                    .to_string();
                error!("Sogou API error {}: {}", code, message);
                return Err(match code {
                    "1003" | "1004" => ProviderError::AuthenticationError(message),
                    "1008" => ProviderError::RateLimitExceeded(message),
                    _ => ProviderError::RequestFailed(format!(
                        "Sogou error {}: {}",
                        code, message
                    )),
                });
            }
        }

        json.get("translation")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| ProviderError::ParseError("No translation in response".to_string()))
    }

    async fn check_availability(&self) -> Result<(), ProviderError> {
        self.translate("hello", "en", "zh").await.map(|_| ())
    }
}
