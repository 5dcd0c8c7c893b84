//! The [`I18n`] façade.
//!
//! An `I18n` starts uninitialized. [`I18n::initialize`] builds the locale
//! resolver and the rule registry from an [`I18nConfig`] and selects the
//! initial locale; it may be called again to start over with a new catalog.
//! Until the first initialization every catalog-dependent operation returns
//! [`I18nError::NotInitialized`].
//!
//! An `I18n` holds mutable state (the active locale) and does no internal
//! locking. Share one per logical session, or wrap a shared one in a lock as
//! [`crate::global`] does.

use simple_i18n_core::error::{I18nError, I18nResult};
use simple_i18n_core::lookup::RawLookup;
use simple_i18n_core::settings::Settings;
use simple_i18n_core::value::{Args, Value};
use simple_i18n_locale::{loaders, LocaleCatalog, LocaleResolver, ResolvedLanguage};
use simple_i18n_template::{Rule, RuleRegistry, TemplateProcessor};
use tracing::{debug, info};

/// Prefix of the marker returned for keys that have no translation.
pub const MISSING_PREFIX: &str = "missing.i18n.translation";

/// Formats the missing-translation marker for `key`.
///
/// # Examples
///
/// ```
/// use simple_i18n::missing_translation;
///
/// assert_eq!(missing_translation("bar"), "[missing.i18n.translation:'bar']");
/// ```
pub fn missing_translation(key: &str) -> String {
    format!("[{MISSING_PREFIX}:'{key}']")
}

/// Everything [`I18n::initialize`] needs.
///
/// All parts are optional: no locale selects only `common`, no languages
/// means every key is missing, and no rules leaves just the built-in
/// `string` rule.
#[derive(Debug, Clone, Default)]
pub struct I18nConfig {
    locale: String,
    languages: LocaleCatalog,
    rules: Vec<(String, Rule)>,
}

impl I18nConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from [`Settings`]: the initial locale, and the
    /// catalog at `settings.catalog_path` when one is set.
    pub fn from_settings(settings: &Settings) -> I18nResult<Self> {
        let languages = match &settings.catalog_path {
            Some(path) => loaders::from_path(path)?,
            None => LocaleCatalog::new(),
        };
        Ok(Self::new().locale(&settings.locale).languages(languages))
    }

    /// Sets the initial locale.
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Sets the catalog.
    #[must_use]
    pub fn languages(mut self, languages: LocaleCatalog) -> Self {
        self.languages = languages;
        self
    }

    /// Adds a rule. A later rule with the same name wins, and a rule named
    /// `string` replaces the built-in fallback.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.rules.push((name.into(), rule));
        self
    }

    /// Adds a `(value, name) -> String` rule.
    #[must_use]
    pub fn rule_fn<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Option<&Value>, &str) -> String + Send + Sync + 'static,
    {
        self.rule(name, Rule::new(func))
    }

    /// Adds a rule that can read raw templates of the active language.
    #[must_use]
    pub fn rule_with_lookup<F>(self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(Option<&Value>, &str, &dyn RawLookup) -> String + Send + Sync + 'static,
    {
        self.rule(name, Rule::with_lookup(func))
    }
}

#[derive(Debug, Clone)]
struct Session {
    resolver: LocaleResolver,
    processor: TemplateProcessor,
}

/// Translation façade: locale state plus template processing.
#[derive(Debug, Clone, Default)]
pub struct I18n {
    session: Option<Session>,
}

impl I18n {
    /// Creates an uninitialized instance.
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Creates an instance and initializes it with `config`.
    pub fn with_config(config: I18nConfig) -> Self {
        let mut i18n = Self::new();
        i18n.initialize(config);
        i18n
    }

    /// Initializes (or re-initializes) from `config`.
    ///
    /// Any previous catalog, rules and locale are discarded.
    pub fn initialize(&mut self, config: I18nConfig) {
        let I18nConfig {
            locale,
            languages,
            rules,
        } = config;

        let rules = RuleRegistry::with_overrides(rules);
        info!(
            locale = locale.as_str(),
            locales = ?languages.locales(),
            rules = ?rules.names(),
            "initializing simple-i18n"
        );

        let mut resolver = LocaleResolver::new(languages);
        resolver.set_locale(&locale);
        self.session = Some(Session {
            resolver,
            processor: TemplateProcessor::new(rules),
        });
    }

    /// Returns `true` once [`initialize`](Self::initialize) has been called.
    pub const fn is_initialized(&self) -> bool {
        self.session.is_some()
    }

    fn session(&self) -> I18nResult<&Session> {
        self.session.as_ref().ok_or(I18nError::NotInitialized)
    }

    /// Switches the active locale. The catalog and rules are kept.
    pub fn set_locale(&mut self, locale: &str) -> I18nResult<()> {
        let session = self.session.as_mut().ok_or(I18nError::NotInitialized)?;
        session.resolver.set_locale(locale);
        Ok(())
    }

    /// The active locale, normalized.
    pub fn locale(&self) -> I18nResult<&str> {
        Ok(self.session()?.resolver.locale())
    }

    /// The resolved language of the active locale.
    pub fn resolved(&self) -> I18nResult<&ResolvedLanguage> {
        Ok(self.session()?.resolver.resolved())
    }

    /// Translates `key` with `args`.
    ///
    /// A key absent from the active language renders as the
    /// [missing-translation marker](missing_translation). An empty template
    /// is a valid translation and renders as the empty string.
    pub fn translate(&self, key: &str, args: Option<&Args>) -> I18nResult<String> {
        let session = self.session()?;
        let resolved = session.resolver.resolved();
        let Some(template) = resolved.get(key) else {
            debug!(
                key,
                locale = session.resolver.locale(),
                "missing translation"
            );
            return Ok(missing_translation(key));
        };
        Ok(session
            .processor
            .process_with_lookup(template, args, resolved))
    }

    /// Returns the unprocessed template for `key`.
    pub fn raw_lookup(&self, key: &str) -> I18nResult<Option<&str>> {
        Ok(self.session()?.resolver.resolved().get(key))
    }

    /// Returns `true` if `key` exists in the active language.
    pub fn has_key(&self, key: &str) -> I18nResult<bool> {
        Ok(self.session()?.resolver.resolved().contains_key(key))
    }

    /// Processes `template` directly, without a catalog lookup.
    ///
    /// Rules still see the active language through their lookup.
    pub fn process(&self, template: &str, args: Option<&Args>) -> I18nResult<String> {
        let session = self.session()?;
        Ok(session
            .processor
            .process_with_lookup(template, args, session.resolver.resolved()))
    }

    /// The keys of the active language, sorted.
    pub fn keys(&self) -> I18nResult<Vec<&str>> {
        Ok(self.session()?.resolver.resolved().keys())
    }

    /// The registered rules.
    pub fn rules(&self) -> I18nResult<&RuleRegistry> {
        Ok(self.session()?.processor.rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_i18n_core::value::args;
    use simple_i18n_locale::LanguagePack;

    fn catalog(entries: &[(&str, &[(&str, &str)])]) -> LocaleCatalog {
        entries
            .iter()
            .map(|(locale, pack)| {
                let pack: LanguagePack = pack
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect();
                (*locale, pack)
            })
            .collect()
    }

    fn initialized(entries: &[(&str, &[(&str, &str)])], locale: &str) -> I18n {
        I18n::with_config(I18nConfig::new().locale(locale).languages(catalog(entries)))
    }

    // ── lifecycle ───────────────────────────────────────────────────

    #[test]
    fn test_uninitialized_operations_fail() {
        let mut i18n = I18n::new();
        assert!(!i18n.is_initialized());
        assert!(i18n.translate("foo", None).unwrap_err().is_not_initialized());
        assert!(i18n.process("foo", None).unwrap_err().is_not_initialized());
        assert!(i18n.raw_lookup("foo").unwrap_err().is_not_initialized());
        assert!(i18n.has_key("foo").unwrap_err().is_not_initialized());
        assert!(i18n.set_locale("en").unwrap_err().is_not_initialized());
        assert!(i18n.locale().is_err());
        assert!(i18n.keys().is_err());
    }

    #[test]
    fn test_initialize_with_unknown_locale() {
        let i18n = initialized(&[("en", &[])], "de");
        assert!(i18n.is_initialized());
        assert_eq!(i18n.locale().unwrap(), "de");
        assert!(i18n.keys().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_empty_config() {
        let i18n = I18n::with_config(I18nConfig::new());
        assert_eq!(i18n.translate("foo", None).unwrap(), missing_translation("foo"));
        assert_eq!(i18n.process("foo", None).unwrap(), "foo");
        assert_eq!(i18n.rules().unwrap().names(), vec!["string"]);
    }

    #[test]
    fn test_reinitialize_replaces_everything() {
        let mut i18n = I18n::with_config(
            I18nConfig::new()
                .locale("en")
                .languages(catalog(&[("en", &[("foo", "{x,up}")])]))
                .rule_fn("up", |v, _| v.map(|v| v.to_string().to_uppercase()).unwrap_or_default()),
        );
        assert_eq!(i18n.translate("foo", Some(&args([("x", "a")]))).unwrap(), "A");

        i18n.initialize(
            I18nConfig::new()
                .locale("de")
                .languages(catalog(&[("de", &[("foo", "{x,up}")])])),
        );
        assert_eq!(i18n.locale().unwrap(), "de");
        assert!(!i18n.rules().unwrap().contains("up"));
        assert_eq!(i18n.translate("foo", Some(&args([("x", "a")]))).unwrap(), "a");
    }

    // ── translate ───────────────────────────────────────────────────

    #[test]
    fn test_missing_key_marker() {
        let i18n = initialized(&[("en", &[("foo", "static string")])], "en");
        assert_eq!(
            i18n.translate("bar", None).unwrap(),
            "[missing.i18n.translation:'bar']"
        );
    }

    #[test]
    fn test_static_and_empty_strings() {
        let i18n = initialized(&[("en", &[("foo", "static string"), ("blank", "")])], "en");
        assert_eq!(i18n.translate("foo", None).unwrap(), "static string");
        assert_eq!(i18n.translate("blank", None).unwrap(), "");
    }

    #[test]
    fn test_translate_missing_argument() {
        let i18n = initialized(&[("en", &[("foo", "Hello {firtName}, how are you?")])], "en");
        let out = i18n.translate("foo", Some(&args([("lastName", "Smith")]))).unwrap();
        assert_eq!(out, "Hello , how are you?");
    }

    #[test]
    fn test_translate_whitespace_placeholder_untouched() {
        let i18n = initialized(&[("en", &[("foo", "{ name, string }")])], "en");
        let out = i18n.translate("foo", Some(&args([("name", "Bob")]))).unwrap();
        assert_eq!(out, "{ name, string }");
    }

    // ── raw / has_key ───────────────────────────────────────────────

    #[test]
    fn test_raw_lookup() {
        let i18n = initialized(&[("en", &[("foo", "String with {variable}")])], "en");
        assert_eq!(i18n.raw_lookup("foo").unwrap(), Some("String with {variable}"));
        assert_eq!(i18n.raw_lookup("bar").unwrap(), None);
    }

    #[test]
    fn test_has_key() {
        let i18n = initialized(&[("en", &[("foo", "abc")]), ("de", &[("hello", "world")])], "de");
        assert!(!i18n.has_key("foo").unwrap());
        assert!(i18n.has_key("hello").unwrap());
    }

    // ── locale switching ────────────────────────────────────────────

    #[test]
    fn test_switch_locale() {
        let mut i18n = initialized(
            &[("en", &[("foo", "Hi {firstName}")]), ("de", &[("foo", "Hallo {firstName}")])],
            "en",
        );
        let a = args([("firstName", "Bob")]);
        assert_eq!(i18n.translate("foo", Some(&a)).unwrap(), "Hi Bob");
        i18n.set_locale("de").unwrap();
        assert_eq!(i18n.translate("foo", Some(&a)).unwrap(), "Hallo Bob");
        i18n.set_locale("fr").unwrap();
        assert_eq!(i18n.translate("foo", Some(&a)).unwrap(), missing_translation("foo"));
    }

    // ── settings ────────────────────────────────────────────────────

    #[test]
    fn test_config_from_settings_without_catalog() {
        let settings = Settings {
            locale: "en".to_string(),
            ..Settings::default()
        };
        let i18n = I18n::with_config(I18nConfig::from_settings(&settings).unwrap());
        assert_eq!(i18n.locale().unwrap(), "en");
        assert!(i18n.keys().unwrap().is_empty());
    }

    #[test]
    fn test_config_from_settings_bad_catalog_path() {
        let settings = Settings {
            catalog_path: Some("/definitely/not/here.json".into()),
            ..Settings::default()
        };
        assert!(I18nConfig::from_settings(&settings).is_err());
    }
}
