//! Localized default wishlist titles.
//!
//! Locales are matched on their language part: `hr-HR`, `hr_HR` and `HR`
//! all resolve to `hr`. Unknown locales fall back to [`FALLBACK_LOCALE`].

/// Locale used when the requested one has no translation.
pub const FALLBACK_LOCALE: &str = "en";

/// Default title per language.
const DEFAULT_TITLES: &[(&str, &str)] = &[
    ("de", "Meine Wunschliste"),
    ("en", "My Wishlist"),
    ("fr", "Ma liste de souhaits"),
    ("hr", "Moja lista želja"),
];

/// Default wishlist title for a locale.
#[must_use]
pub fn default_title(locale: &str) -> &'static str {
    lookup(&language(locale))
        .or_else(|| lookup(FALLBACK_LOCALE))
        .unwrap_or("My Wishlist")
}

/// Whether a translation exists for the locale's language.
#[must_use]
pub fn is_supported(locale: &str) -> bool {
    lookup(&language(locale)).is_some()
}

fn language(locale: &str) -> String {
    locale
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn lookup(language: &str) -> Option<&'static str> {
    DEFAULT_TITLES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, title)| *title)
}
