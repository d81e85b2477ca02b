/*!
 * UI language toggle.
 *
 * The application remembers a UI language and can flip it between two
 * configured locales with a single action. Locales use the host-style
 * underscore form (e.g. "en_US") rather than translation codes.
 */

/// Locales the UI language can be toggled between.
pub const UI_LOCALES: &[(&str, &str)] = &[
    ("en_US", "English"),
    ("zh_CN", "Chinese"),
    ("vi_VN", "Vietnamese"),
    ("sk_SK", "Slovak"),
    ("es", "Spanish"),
    ("fr_FR", "French"),
    ("ja_JP", "Japanese"),
];

/// Check whether a locale identifier is known to the toggle table
pub fn is_known_locale(locale: &str) -> bool {
    UI_LOCALES.iter().any(|(id, _)| *id == locale)
}

/// Display name for a UI locale, if known
pub fn locale_name(locale: &str) -> Option<&'static str> {
    UI_LOCALES
        .iter()
        .find(|(id, _)| *id == locale)
        .map(|(_, name)| *name)
}

/// Flip the UI language between two configured locales.
///
/// Returns `lang2` when the current value is `lang1`, and `lang1` otherwise.
/// A current value matching neither configured locale therefore lands on
/// `lang1`; callers rely on that fallback to recover from a stale or
/// hand-edited preference.
pub fn toggle<'a>(current: &str, lang1: &'a str, lang2: &'a str) -> &'a str {
    if current == lang1 { lang2 } else { lang1 }
}
