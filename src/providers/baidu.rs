use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::app_config::{ServiceConfig, TranslationService};
use crate::errors::ProviderError;
use crate::providers::TranslationBackend;

/// Baidu client for the fanyi-api translate endpoint
///
/// Requests carry an MD5 signature over app id, query, salt and key. The
/// response splits the input into per-line segments, which are rejoined with
/// newlines to reconstruct the blob.
#[derive(Debug)]
pub struct BaiduTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
    /// Application id issued by the service
    app_id: String,
    /// Signing key issued by the service
    api_key: String,
}

impl BaiduTranslate {
    /// Create a new Baidu client
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: if config.endpoint.is_empty() {
                "https://fanyi-api.baidu.com/api/trans/vip/translate".to_string()
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
impl TranslationBackend for BaiduTranslate {
    fn service(&self) -> TranslationService {
        TranslationService::Baidu
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError> {
        if self.app_id.is_empty() || self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Baidu app id and key are not configured".to_string(),
            ));
        }

        let salt: u32 = rand::random();
        let sign = self.sign(text, salt);
        let salt = salt.to_string();
        let params = [
            ("q", text),
            ("from", source),
            ("to", target),
            ("appid", self.app_id.as_str()),
            ("salt", salt.as_str()),
            ("sign", sign.as_str()),
        ];

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Baidu translate error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        // Errors come back in-band with HTTP 200
        if let Some(code) = json.get("error_code") {
            let code = code.to_string().trim_matches('"').to_string();
            let message = json
                .get("error_msg")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown error")
                .to_string();
            error!("Baidu API error {}: {}", code, message);
            return Err(match code.as_str() {
                "54003" => ProviderError::RateLimitExceeded(message),
                "52003" | "54001" => ProviderError::AuthenticationError(message),
                _ => ProviderError::RequestFailed(format!("Baidu error {}: {}", code, message)),
            });
        }

        let segments = json
            .get("trans_result")
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                ProviderError::ParseError("No trans_result in response".to_string())
            })?;

        let translated: Vec<&str> = segments
            .iter()
            .filter_map(|segment| segment.get("dst").and_then(|v| v.as_str()))
            .collect();
        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "Empty trans_result in response".to_string(),
            ));
        }
        Ok(translated.join("\n"))
    }

    async fn check_availability(&self) -> Result<(), ProviderError> {
        self.translate("hello", "en", "zh").await.map(|_| ())
    }
}
