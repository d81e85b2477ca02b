/*!
 * Tests for the language registry
 */

use textlate::language_registry::{all, display_name, is_registered, iso_name, validate_code};

/// Test resolution of registered codes to display names
#[test]
fn test_display_name_withRegisteredCodes_shouldReturnNames() {
    assert_eq!(display_name("en"), Some("English"));
    assert_eq!(display_name("zh"), Some("Chinese"));
    assert_eq!(display_name("pa"), Some("Punjabi"));
    assert_eq!(display_name("vi"), Some("Vietnamese"));

    // Whitespace and case tests
    assert_eq!(display_name(" EN "), Some("English"));
    assert_eq!(display_name("Zh"), Some("Chinese"));
}

/// Test that unregistered codes do not resolve
#[test]
fn test_display_name_withUnregisteredCodes_shouldReturnNone() {
    // Valid ISO 639-1 but not registered
    assert_eq!(display_name("it"), None);
    assert_eq!(display_name("nl"), None);

    // Not a language code at all
    assert_eq!(display_name("xyz"), None);
    assert_eq!(display_name(""), None);
}

/// Test registry membership checks
#[test]
fn test_is_registered_withMixedCodes_shouldMatchRegistry() {
    for (code, _) in all() {
        assert!(is_registered(code), "expected '{}' to be registered", code);
    }
    assert!(!is_registered("it"));
    assert!(!is_registered("xyz"));
}

/// Test validation of language codes
#[test]
fn test_validate_code_withValidCodes_shouldNormalize() {
    assert_eq!(validate_code("en").unwrap(), "en");
    assert_eq!(validate_code(" FR ").unwrap(), "fr");
    assert_eq!(validate_code("Ja").unwrap(), "ja");
}

/// Test rejection of malformed and unsupported codes
#[test]
fn test_validate_code_withBadCodes_shouldFail() {
    // Malformed
    assert!(validate_code("").is_err());
    assert!(validate_code("e").is_err());
    assert!(validate_code("eng").is_err());
    assert!(validate_code("q1").is_err());

    // Well-formed ISO 639-1 but not in the registry
    let err = validate_code("it").unwrap_err();
    assert!(err.to_string().contains("Unsupported"));
}

/// Test ISO name lookup for registered codes
#[test]
fn test_iso_name_withRegisteredCode_shouldReturnIsoName() {
    assert_eq!(iso_name("en").unwrap(), "English");
    assert!(iso_name("xyz").is_err());
}

/// Test the registry covers the expected language set
#[test]
fn test_all_shouldContainThirteenLanguages() {
    let languages: Vec<_> = all().collect();
    assert_eq!(languages.len(), 13);

    // Display names double as buffer identities, so they must be unique
    let mut names: Vec<_> = languages.iter().map(|(_, name)| *name).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 13);
}
