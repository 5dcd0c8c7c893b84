//! Locale catalogs.
//!
//! Locale identifiers are case-insensitive and surrounding whitespace is
//! ignored: every identifier is normalized (trimmed, lower-cased) when it
//! enters the catalog and when it is looked up.

use std::collections::HashMap;

/// The locale whose pack every resolution starts from.
pub const COMMON_LOCALE: &str = "common";

/// Templates for one locale, keyed by translation key.
pub type LanguagePack = HashMap<String, String>;

/// Normalizes a locale identifier: trimmed and lower-cased.
///
/// # Examples
///
/// ```
/// use simple_i18n_locale::normalize_locale;
///
/// assert_eq!(normalize_locale("  EN-uk "), "en-uk");
/// assert_eq!(normalize_locale(""), "");
/// ```
pub fn normalize_locale(locale: &str) -> String {
    locale.trim().to_lowercase()
}

/// Language packs keyed by normalized locale identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleCatalog {
    packs: HashMap<String, LanguagePack>,
}

impl LocaleCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the pack for `locale`.
    ///
    /// If another identifier already normalized to the same locale, its pack
    /// is replaced.
    pub fn insert(&mut self, locale: &str, pack: LanguagePack) {
        self.packs.insert(normalize_locale(locale), pack);
    }

    /// Returns the pack for `locale`, if any.
    pub fn get(&self, locale: &str) -> Option<&LanguagePack> {
        self.packs.get(&normalize_locale(locale))
    }

    /// Returns `true` if a pack exists for `locale`.
    pub fn contains(&self, locale: &str) -> bool {
        self.packs.contains_key(&normalize_locale(locale))
    }

    /// Looks up a pack by an identifier that is already normalized.
    pub(crate) fn get_normalized(&self, locale: &str) -> Option<&LanguagePack> {
        self.packs.get(locale)
    }

    /// Returns all locale identifiers, normalized and sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.packs.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.packs.len()
    }

    /// Whether the catalog has no locales.
    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }
}

impl<K: AsRef<str>> FromIterator<(K, LanguagePack)> for LocaleCatalog {
    fn from_iter<I: IntoIterator<Item = (K, LanguagePack)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (locale, pack) in iter {
            catalog.insert(locale.as_ref(), pack);
        }
        catalog
    }
}
