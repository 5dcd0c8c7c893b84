//! Locale resolution.
//!
//! # Algorithm
//!
//! For a requested locale, normalized and split on `-` into segments:
//!
//! 1. Start from a copy of the `common` pack (or nothing).
//! 2. For each prefix of the segments, shortest first (`en`, then `en-uk`),
//!    merge the pack of that identifier over the accumulator, if it exists.
//!    A `common` prefix was already merged in step 1 and is skipped.
//!
//! # Invariants
//!
//! - Keys from a more specific locale always win over inherited ones.
//! - A locale that matches nothing resolves to exactly the `common` pack
//!   (or an empty table when there is no `common` pack).
//! - Resolution is synchronous; the table is rebuilt on every locale change.

use std::collections::HashMap;

use simple_i18n_core::lookup::RawLookup;
use tracing::debug;

use crate::catalog::{normalize_locale, LocaleCatalog, COMMON_LOCALE};

/// The flattened key -> template table of the active locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLanguage {
    entries: HashMap<String, String>,
    chain: Vec<String>,
}

impl ResolvedLanguage {
    /// Returns the raw template for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present (an empty template counts).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns all keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The catalog locales that contributed, in merge order.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The underlying table.
    pub const fn as_map(&self) -> &HashMap<String, String> {
        &self.entries
    }

    fn merge(&mut self, locale: &str, catalog: &LocaleCatalog) {
        if let Some(pack) = catalog.get_normalized(locale) {
            self.entries
                .extend(pack.iter().map(|(k, v)| (k.clone(), v.clone())));
            self.chain.push(locale.to_string());
        }
    }
}

impl RawLookup for ResolvedLanguage {
    fn raw(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

/// Resolves `locale` against `catalog`.
///
/// # Examples
///
/// ```
/// use simple_i18n_locale::{resolve, LanguagePack, LocaleCatalog};
///
/// let catalog: LocaleCatalog = [
///     ("common", LanguagePack::from([("foo".to_string(), "common".to_string())])),
///     ("en", LanguagePack::from([("foo".to_string(), "en".to_string())])),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(resolve(&catalog, "en-us").get("foo"), Some("en"));
/// assert_eq!(resolve(&catalog, "de").get("foo"), Some("common"));
/// assert_eq!(resolve(&catalog, "en-us").chain(), ["common", "en"]);
/// ```
pub fn resolve(catalog: &LocaleCatalog, locale: &str) -> ResolvedLanguage {
    let mut resolved = ResolvedLanguage::default();
    resolved.merge(COMMON_LOCALE, catalog);

    let locale = normalize_locale(locale);
    let segments: Vec<&str> = locale.split('-').collect();
    for i in 0..=segments.len() {
        let prefix = segments[..i].join("-");
        if !prefix.is_empty() && prefix != COMMON_LOCALE {
            resolved.merge(&prefix, catalog);
        }
    }

    debug!(
        locale = locale.as_str(),
        chain = ?resolved.chain,
        keys = resolved.len(),
        "resolved language"
    );
    resolved
}

/// Owns a catalog and the resolution of the active locale.
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    catalog: LocaleCatalog,
    locale: String,
    resolved: ResolvedLanguage,
}

impl LocaleResolver {
    /// Creates a resolver over `catalog` with no locale selected, which
    /// resolves to the `common` pack.
    pub fn new(catalog: LocaleCatalog) -> Self {
        let resolved = resolve(&catalog, "");
        Self {
            catalog,
            locale: String::new(),
            resolved,
        }
    }

    /// Selects `locale` and recomputes the resolved language.
    ///
    /// Locales that match nothing are accepted; they resolve to `common`.
    pub fn set_locale(&mut self, locale: &str) {
        self.locale = normalize_locale(locale);
        self.resolved = resolve(&self.catalog, &self.locale);
    }

    /// The active locale, normalized.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The resolved language of the active locale.
    pub const fn resolved(&self) -> &ResolvedLanguage {
        &self.resolved
    }

    /// The catalog being resolved against.
    pub const fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }
}
