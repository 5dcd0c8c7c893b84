//! # simple-i18n
//!
//! Key-based string templating with locale fallback.
//!
//! Hand [`I18n`] a catalog of locale -> key -> template, optionally some
//! rules, and a starting locale; then render keys:
//!
//! ```
//! use simple_i18n::{args, I18n, I18nConfig, LanguagePack, LocaleCatalog};
//!
//! let catalog: LocaleCatalog = [
//!     ("en", LanguagePack::from([("foo".to_string(), "Hi {name}".to_string())])),
//!     ("en-uk", LanguagePack::from([("bar".to_string(), "Alright?".to_string())])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut i18n = I18n::new();
//! i18n.initialize(I18nConfig::new().locale("en-uk").languages(catalog));
//!
//! assert_eq!(i18n.translate("foo", Some(&args([("name", "Bob")])))?, "Hi Bob");
//! assert_eq!(i18n.translate("bar", None)?, "Alright?");
//! assert_eq!(i18n.translate("baz", None)?, "[missing.i18n.translation:'baz']");
//! # Ok::<(), simple_i18n::I18nError>(())
//! ```
//!
//! The crate re-exports the building blocks:
//!
//! - [`core`] - errors, values, settings, logging
//! - [`template`] - placeholder parsing, rules, the template processor
//! - [`locale`] - catalogs, loaders, locale resolution
//!
//! [`global`] offers one process-wide instance for applications that want it.

/// Errors, dynamic values, settings, and logging.
pub use simple_i18n_core as core;

/// Placeholder parsing, rules, and template processing.
pub use simple_i18n_template as template;

/// Locale catalogs, catalog loaders, and locale resolution.
pub use simple_i18n_locale as locale;

pub mod global;
pub mod session;

pub use session::{missing_translation, I18n, I18nConfig, MISSING_PREFIX};
pub use simple_i18n_core::{args, Args, I18nError, I18nResult, RawLookup, Settings, Value};
pub use simple_i18n_locale::{LanguagePack, LocaleCatalog, ResolvedLanguage};
pub use simple_i18n_template::{Rule, RuleRegistry};
