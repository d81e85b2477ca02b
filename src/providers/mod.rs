/*!
 * Backend implementations for the supported translation services.
 *
 * This module contains client implementations for the online services the
 * application can translate with:
 * - Google: public web translate endpoint, no credentials
 * - Bing: Microsoft Translator API, subscription key
 * - Baidu: fanyi-api, MD5-signed app id and key
 * - Sogou: MD5-signed pid and key
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::{ServiceConfig, TranslationConfig, TranslationService};
use crate::errors::ProviderError;

/// Common trait for all translation backends
///
/// This trait is the capability the translation engine is handed: a single
/// text-in, text-out operation plus an availability precondition. Backends
/// receive language codes already remapped for their service.
#[async_trait]
pub trait TranslationBackend: Send + Sync + Debug {
    /// The service this backend talks to
    fn service(&self) -> TranslationService;

    /// Translate text between two languages
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source` - Service-specific source language code
    /// * `target` - Service-specific target language code
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, ProviderError>;

    /// Check that the service is reachable and credentials are accepted
    ///
    /// Run before translating; a failure here is a setup problem to surface
    /// to the user, not a per-request fault.
    async fn check_availability(&self) -> Result<(), ProviderError>;
}

/// Build the backend for the configured service
pub fn create_backend(config: &TranslationConfig) -> Box<dyn TranslationBackend> {
    let service_config = config
        .get_active_service_config()
        .cloned()
        .unwrap_or_else(|| ServiceConfig::new(config.service));

    match config.service {
        TranslationService::Google => Box::new(google::GoogleTranslate::new(&service_config)),
        TranslationService::Bing => Box::new(bing::BingTranslate::new(&service_config)),
        TranslationService::Baidu => Box::new(baidu::BaiduTranslate::new(&service_config)),
        TranslationService::Sogou => Box::new(sogou::SogouTranslate::new(&service_config)),
    }
}

pub mod google;
pub mod bing;
pub mod baidu;
pub mod sogou;
pub mod mock;
