use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::app_config::{ServiceConfig, TranslationService};
use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Google Translate client using the public web endpoint
///
/// The gtx endpoint needs no credentials. The response is a nested JSON
/// array whose first element holds the translated segments, one per source
/// sentence.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Endpoint URL
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new Google Translate client
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent("Mozilla/5.0")
                .build()
                .unwrap_or_default(),
            endpoint: if config.endpoint.is_empty() {
                "https://translate.googleapis.com/translate_a/single".to_string()
            } else {
                config.endpoint.clone()
            },
        }
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslate {
    fn service(&self) -> TranslationService {
        TranslationService::Google
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            self.endpoint,
            source,
            target,
            urlencoding::encode(text)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Google translate error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        let mut translated = String::new();
        if let Some(segments) = json.get(0).and_then(|v| v.as_array()) {
            for segment in segments {
                if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                    translated.push_str(part);
                }
            }
        }

        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "No translation segments in response".to_string(),
            ));
        }
        Ok(translated)
    }

    async fn check_availability(&self) -> Result<(), ProviderError> {
        self.translate("hello", "en", "es").await.map(|_| ())
    }
}
