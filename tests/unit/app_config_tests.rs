/*!
 * Tests for app configuration
 */

use std::str::FromStr;

use textlate::app_config::{Config, ServiceConfig, TranslationService};

use crate::common;

/// Test the default configuration is valid
#[test]
fn test_defaultConfig_shouldValidate() {
    let config = Config::default();
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "zh");
    assert_eq!(config.translation.service, TranslationService::Google);
    assert!(!config.translation.overwrite);
    assert!(config.validate().is_ok());
}

/// Test service enum string conversions
#[test]
fn test_translationService_withStrings_shouldRoundTrip() {
    for service in TranslationService::all() {
        let parsed = TranslationService::from_str(&service.to_string()).unwrap();
        assert_eq!(parsed, *service);
    }

    assert_eq!(TranslationService::from_str("GOOGLE").unwrap(), TranslationService::Google);
    assert_eq!(TranslationService::Baidu.display_name(), "Baidu");
    assert!(TranslationService::from_str("deepl").is_err());
}

/// Test serde round trip keeps all settings
#[test]
fn test_config_withSerdeRoundTrip_shouldKeepSettings() {
    let mut config = Config::default();
    config.translation.service = TranslationService::Baidu;
    config.translation.overwrite = true;
    config.toggle.ui_language = "zh_CN".to_string();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.translation.service, TranslationService::Baidu);
    assert!(parsed.translation.overwrite);
    assert_eq!(parsed.toggle.ui_language, "zh_CN");
    assert_eq!(parsed.translation.available_services.len(), 4);
}

/// Test missing optional fields fall back to defaults
#[test]
fn test_config_withMinimalJson_shouldApplyDefaults() {
    let json = r#"{
        "source_language": "fr",
        "target_language": "de",
        "translation": {}
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.source_language, "fr");
    assert_eq!(config.translation.service, TranslationService::Google);
    assert_eq!(config.toggle.lang1, "en_US");
    assert_eq!(config.toggle.lang2, "zh_CN");
    assert_eq!(config.toggle.ui_language, "en_US");
    assert!(config.validate().is_ok());
}

/// Test services requiring credentials fail validation without them
#[test]
fn test_validate_withMissingCredentials_shouldFail() {
    let mut config = Config::default();
    config.translation.service = TranslationService::Bing;
    assert!(config.validate().is_err());

    config.translation.service = TranslationService::Baidu;
    assert!(config.validate().is_err());

    config.translation.service = TranslationService::Sogou;
    assert!(config.validate().is_err());

    // Credentials present makes them pass
    for entry in &mut config.translation.available_services {
        entry.api_key = "key".to_string();
        entry.app_id = "id".to_string();
    }
    for service in TranslationService::all() {
        config.translation.service = *service;
        assert!(config.validate().is_ok(), "{} should validate", service);
    }
}

/// Test unregistered languages fail validation
#[test]
fn test_validate_withBadLanguages_shouldFail() {
    let mut config = Config::default();
    config.source_language = "xx".to_string();
    assert!(config.validate().is_err());

    config.source_language = "en".to_string();
    config.target_language = "it".to_string();
    assert!(config.validate().is_err());
}

/// Test malformed endpoint URLs fail validation
#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = Config::default();
    if let Some(entry) = config.translation.available_services.get_mut(0) {
        entry.endpoint = "not a url".to_string();
    }
    assert!(config.validate().is_err());
}

/// Test unknown toggle locales fail validation
#[test]
fn test_validate_withUnknownToggleLocale_shouldFail() {
    let mut config = Config::default();
    config.toggle.lang2 = "de_DE".to_string();
    assert!(config.validate().is_err());
}

/// Test the active service config lookup
#[test]
fn test_getActiveServiceConfig_shouldMatchService() {
    let mut config = Config::default();
    config.translation.service = TranslationService::Sogou;

    let active = config.translation.get_active_service_config().unwrap();
    assert_eq!(active.service_type, "sogou");

    let by_type = config
        .translation
        .get_service_config(&TranslationService::Bing)
        .unwrap();
    assert_eq!(by_type.service_type, "bing");
}

/// Test fresh service configs carry defaults
#[test]
fn test_serviceConfig_withNew_shouldCarryDefaults() {
    let entry = ServiceConfig::new(TranslationService::Baidu);
    assert_eq!(entry.service_type, "baidu");
    assert!(entry.endpoint.is_empty());
    assert!(entry.api_key.is_empty());
    assert_eq!(entry.timeout_secs, 30);
}

/// Test saving writes parseable JSON
#[test]
fn test_save_shouldWriteParseableJson() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("textlate.json");

    let config = Config::default();
    config.save(&path).unwrap();

    let loaded: Config = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.source_language, config.source_language);
    assert_eq!(loaded.translation.service, config.translation.service);
}
