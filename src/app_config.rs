use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use url::Url;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// Translation config
    pub translation: TranslationConfig,

    /// UI language toggle config
    #[serde(default)]
    pub toggle: ToggleConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslationService {
    /// Google Translate
    #[default]
    Google,
    /// Microsoft Bing Translate
    Bing,
    /// Baidu Translate
    Baidu,
    /// Sogou Translate
    Sogou,
}

impl TranslationService {
    /// Capitalized service name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google",
            Self::Bing => "Bing",
            Self::Baidu => "Baidu",
            Self::Sogou => "Sogou",
        }
    }

    /// Lowercase service identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Google => "google".to_string(),
            Self::Bing => "bing".to_string(),
            Self::Baidu => "baidu".to_string(),
            Self::Sogou => "sogou".to_string(),
        }
    }

    /// All supported services
    pub fn all() -> &'static [TranslationService] {
        &[Self::Google, Self::Bing, Self::Baidu, Self::Sogou]
    }
}

// Implement Display trait for TranslationService
impl std::fmt::Display for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for TranslationService
impl std::str::FromStr for TranslationService {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "bing" => Ok(Self::Bing),
            "baidu" => Ok(Self::Baidu),
            "sogou" => Ok(Self::Sogou),
            _ => Err(anyhow!("Invalid service type: {}", s)),
        }
    }
}

/// Per-service configuration wrapper
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Service type identifier
    #[serde(rename = "type")]
    pub service_type: String,

    /// Service endpoint URL, empty for the service default
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// API or signing key
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Application/partner id for services that require one
    #[serde(default = "String::new")]
    pub app_id: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ServiceConfig {
    /// Service config with defaults for the given service
    pub fn new(service: TranslationService) -> Self {
        Self {
            service_type: service.to_lowercase_string(),
            endpoint: String::new(),
            api_key: String::new(),
            app_id: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Translation settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Active translation service
    #[serde(default)]
    pub service: TranslationService,

    /// Replace destination buffer content instead of prepending to it
    #[serde(default)]
    pub overwrite: bool,

    /// Per-service settings
    #[serde(default = "default_available_services")]
    pub available_services: Vec<ServiceConfig>,
}

impl TranslationConfig {
    /// Get the active service configuration from the available_services array
    pub fn get_active_service_config(&self) -> Option<&ServiceConfig> {
        let service_str = self.service.to_lowercase_string();
        self.available_services
            .iter()
            .find(|s| s.service_type == service_str)
    }

    /// Get a specific service configuration by type
    pub fn get_service_config(&self, service: &TranslationService) -> Option<&ServiceConfig> {
        let service_str = service.to_lowercase_string();
        self.available_services
            .iter()
            .find(|s| s.service_type == service_str)
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            service: TranslationService::default(),
            overwrite: false,
            available_services: default_available_services(),
        }
    }
}

/// UI language toggle settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToggleConfig {
    /// First toggle language; also the fallback when the current UI
    /// language matches neither configured locale
    #[serde(default = "default_toggle_lang1")]
    pub lang1: String,

    /// Second toggle language
    #[serde(default = "default_toggle_lang2")]
    pub lang2: String,

    /// Current UI language
    #[serde(default = "default_toggle_lang1")]
    pub ui_language: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            lang1: default_toggle_lang1(),
            lang2: default_toggle_lang2(),
            ui_language: default_toggle_lang1(),
        }
    }
}

/// Log level for the application
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Normal output
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_toggle_lang1() -> String {
    "en_US".to_string()
}

fn default_toggle_lang2() -> String {
    "zh_CN".to_string()
}

fn default_available_services() -> Vec<ServiceConfig> {
    TranslationService::all()
        .iter()
        .map(|service| ServiceConfig::new(*service))
        .collect()
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Validate languages
        let _source = crate::language_registry::validate_code(&self.source_language)?;
        let _target = crate::language_registry::validate_code(&self.target_language)?;

        // Validate credentials for services that require them
        if let Some(service_config) = self.translation.get_active_service_config() {
            match self.translation.service {
                TranslationService::Bing => {
                    if service_config.api_key.is_empty() {
                        return Err(anyhow!("An API key is required for the Bing service"));
                    }
                }
                TranslationService::Baidu | TranslationService::Sogou => {
                    if service_config.api_key.is_empty() || service_config.app_id.is_empty() {
                        return Err(anyhow!(
                            "An app id and API key are required for the {} service",
                            self.translation.service.display_name()
                        ));
                    }
                }
                TranslationService::Google => {}
            }

            if !service_config.endpoint.is_empty() {
                Url::parse(&service_config.endpoint).context(format!(
                    "Invalid endpoint URL for service {}: {}",
                    service_config.service_type, service_config.endpoint
                ))?;
            }
        }

        // Validate toggle locales
        for locale in [&self.toggle.lang1, &self.toggle.lang2] {
            if !crate::ui_locale::is_known_locale(locale) {
                return Err(anyhow!("Unknown toggle language: {}", locale));
            }
        }

        Ok(())
    }

    /// Write the configuration as pretty JSON to the given path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path.as_ref(), json)
            .context(format!("Failed to write config to file: {:?}", path.as_ref()))?;
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "en".to_string(),
            target_language: "zh".to_string(),
            translation: TranslationConfig::default(),
            toggle: ToggleConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
