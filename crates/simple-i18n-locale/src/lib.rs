//! # simple-i18n-locale
//!
//! Locale catalogs and their resolution into one flat key -> template table.
//!
//! A [`LocaleCatalog`] maps locale identifiers to [`LanguagePack`]s. The
//! [`LocaleResolver`] merges, for a requested locale such as `en-uk`, the
//! `common` pack, then `en`, then `en-uk`, each more specific pack overriding
//! keys of the ones before it. [`loaders`] reads catalogs from JSON or TOML.
//!
//! ```
//! use simple_i18n_locale::{LanguagePack, LocaleCatalog, LocaleResolver};
//!
//! let mut catalog = LocaleCatalog::new();
//! catalog.insert("en", LanguagePack::from([("foo".to_string(), "Hi".to_string())]));
//! catalog.insert("en-uk", LanguagePack::from([("bar".to_string(), "Alright?".to_string())]));
//!
//! let mut resolver = LocaleResolver::new(catalog);
//! resolver.set_locale("en-UK");
//! assert_eq!(resolver.resolved().get("foo"), Some("Hi"));
//! assert_eq!(resolver.resolved().get("bar"), Some("Alright?"));
//! ```

pub mod catalog;
pub mod loaders;
pub mod resolver;

pub use catalog::{normalize_locale, LanguagePack, LocaleCatalog, COMMON_LOCALE};
pub use resolver::{resolve, LocaleResolver, ResolvedLanguage};
