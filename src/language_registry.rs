use anyhow::{Result, anyhow};
use isolang::Language;

/// Registry of translatable languages
///
/// This module owns the closed set of languages the application can translate
/// between. Every source or target code used in a translation request must
/// resolve through this table; codes outside it are rejected before any
/// service is contacted.
/// Registered language codes and their display names.
///
/// The display name doubles as the identity of the destination buffer that
/// receives translations into that language.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("zh", "Chinese"),
    ("es", "Spanish"),
    ("ar", "Arabic"),
    ("de", "German"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("fr", "French"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("vi", "Vietnamese"),
    ("pa", "Punjabi"),
    ("hi", "Hindi"),
];

/// Check whether a code is registered for translation
pub fn is_registered(code: &str) -> bool {
    let normalized = code.trim().to_lowercase();
    LANGUAGES.iter().any(|(c, _)| *c == normalized)
}

/// Resolve a language code to its display name
///
/// Returns `None` for codes outside the registry, including codes that are
/// valid ISO 639-1 but not supported by any configured service.
pub fn display_name(code: &str) -> Option<&'static str> {
    let normalized = code.trim().to_lowercase();
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == normalized)
        .map(|(_, name)| *name)
}

/// Validate a language code and return its normalized form
///
/// Validation is two-stage: the code must be a well-formed ISO 639-1 code,
/// and it must be present in the registry. Both failures surface the raw
/// input so the message points at what the user typed.
pub fn validate_code(code: &str) -> Result<String> {
    let normalized = code.trim().to_lowercase();

    if normalized.len() != 2 || Language::from_639_1(&normalized).is_none() {
        return Err(anyhow!("Invalid language code: {}", code));
    }
    if !is_registered(&normalized) {
        return Err(anyhow!("Unsupported language code: {}", code));
    }

    Ok(normalized)
}

/// Get the ISO name for a registered code, falling back to the registry name
///
/// The registry's display names follow the original service listings; isolang
/// spells a few of them differently (e.g. Panjabi). The registry wins, since
/// buffer identities are derived from it.
pub fn iso_name(code: &str) -> Result<String> {
    let normalized = validate_code(code)?;
    let lang = Language::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;
    Ok(lang.to_name().to_string())
}

/// Iterate over all registered (code, display name) pairs
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGES.iter().copied()
}
