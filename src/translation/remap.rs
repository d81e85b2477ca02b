use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::app_config::TranslationService;

/// Per-service language-code substitution.
///
/// Some services accept non-standard language codes. Before a request is
/// handed to a backend, each code is passed through that service's remap
/// table; codes without an entry pass through unchanged. Tables are data so
/// a new service registers its substitutions here instead of branching in
/// the engine.
/// Baidu's deviations from ISO 639-1.
pub const BAIDU_CODE_REMAP: &[(&str, &str)] = &[
    ("ar", "ara"),
    ("fr", "fra"),
    ("es", "spa"),
    ("ja", "jp"),
    ("ko", "kor"),
    ("vi", "vie"),
];

static BAIDU_REMAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BAIDU_CODE_REMAP.iter().copied().collect());

static EMPTY_REMAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(HashMap::new);

/// The remap table for a service
pub fn remap_table(service: TranslationService) -> &'static HashMap<&'static str, &'static str> {
    match service {
        TranslationService::Baidu => &BAIDU_REMAP,
        TranslationService::Google | TranslationService::Bing | TranslationService::Sogou => {
            &EMPTY_REMAP
        }
    }
}

/// Translate a language code into the form a service expects
///
/// Codes not present in the service's table are returned unchanged.
pub fn apply_remap<'a>(service: TranslationService, code: &'a str) -> &'a str {
    remap_table(service).get(code).copied().unwrap_or(code)
}
