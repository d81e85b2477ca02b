use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::app_config::{ServiceConfig, TranslationService};
use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Bing client for the Microsoft Translator API
#[derive(Debug)]
pub struct BingTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
    /// Subscription key for authentication
    api_key: String,
}

/// One element of the request body
#[derive(Debug, Serialize)]
struct BingRequestItem<'a> {
    /// Text to translate
    #[serde(rename = "Text")]
    text: &'a str,
}

/// One element of the response body
#[derive(Debug, Deserialize)]
struct BingResponseItem {
    /// Translations of the corresponding request item
    translations: Vec<BingTranslation>,
}

/// A single translation in a Bing response
#[derive(Debug, Deserialize)]
struct BingTranslation {
    /// The translated text
    text: String,
}

impl BingTranslate {
    /// Create a new Bing client
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: if config.endpoint.is_empty() {
                "https://api.cognitive.microsofttranslator.com".to_string()
            } else {
                config.endpoint.clone()
            },
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl TranslationBackend for BingTranslate {
    fn service(&self) -> TranslationService {
        TranslationService::Bing
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Bing subscription key is not configured".to_string(),
            ));
        }

        let url = format!(
            "{}/translate?api-version=3.0&from={}&to={}",
            self.endpoint.trim_end_matches('/'),
            source,
            target
        );
        let body = vec![BingRequestItem { text }];

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Bing translate error ({}): {}", status, message);
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::AuthenticationError(message),
                429 => ProviderError::RateLimitExceeded(message),
                code => ProviderError::ApiError {
                    status_code: code,
                    message,
                },
            });
        }

        let items: Vec<BingResponseItem> = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        items
            .first()
            .and_then(|item| item.translations.first())
            .map(|translation| translation.text.clone())
            .ok_or_else(|| {
                ProviderError::ParseError("No translations in response".to_string())
            })
    }

    async fn check_availability(&self) -> Result<(), ProviderError> {
        self.translate("hello", "en", "es").await.map(|_| ())
    }
}
