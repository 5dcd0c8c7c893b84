//! Catalog loaders.
//!
//! Read a [`LocaleCatalog`] from a JSON or TOML document shaped as
//! `{ locale: { key: template } }`:
//!
//! ```json
//! {
//!   "common": { "app-name": "Demo" },
//!   "en":     { "greeting": "Hello {name}" },
//!   "en-uk":  { "greeting": "Alright {name}?" }
//! }
//! ```
//!
//! A locale entry that is not a table is an error. A template that is not a
//! string is skipped with a warning, so one bad entry does not take the whole
//! catalog down.

use std::path::Path;

use simple_i18n_core::error::{I18nError, I18nResult};
use simple_i18n_core::settings_loader::toml_to_json;
use tracing::{debug, warn};

use crate::catalog::{LanguagePack, LocaleCatalog};

/// Loads a catalog from a JSON string.
///
/// # Examples
///
/// ```
/// use simple_i18n_locale::loaders;
///
/// let catalog = loaders::from_json_str(r#"{"EN": {"foo": "bar"}}"#).unwrap();
/// assert_eq!(catalog.get("en").unwrap()["foo"], "bar");
/// ```
pub fn from_json_str(json_str: &str) -> I18nResult<LocaleCatalog> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| I18nError::CatalogError(format!("Invalid JSON: {e}")))?;
    from_value(value)
}

/// Loads a catalog from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> I18nResult<LocaleCatalog> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_json_str(&content)
}

/// Loads a catalog from a TOML string.
pub fn from_toml_str(toml_str: &str) -> I18nResult<LocaleCatalog> {
    let value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| I18nError::CatalogError(format!("Invalid TOML: {e}")))?;
    from_value(toml_to_json(value))
}

/// Loads a catalog from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> I18nResult<LocaleCatalog> {
    let content = std::fs::read_to_string(path.as_ref())?;
    from_toml_str(&content)
}

/// Loads a catalog from a file, choosing the format by extension.
///
/// `.json` and `.toml` are supported (case-insensitive).
pub fn from_path(path: impl AsRef<Path>) -> I18nResult<LocaleCatalog> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => from_json_file(path),
        Some("toml") => from_toml_file(path),
        _ => Err(I18nError::CatalogError(format!(
            "Unsupported catalog format for '{}': expected .json or .toml",
            path.display()
        ))),
    }
}

/// Builds a catalog from an already-parsed document.
pub fn from_value(value: serde_json::Value) -> I18nResult<LocaleCatalog> {
    let serde_json::Value::Object(locales) = value else {
        return Err(I18nError::CatalogError(
            "catalog root must be a table of locales".to_string(),
        ));
    };

    let mut catalog = LocaleCatalog::new();
    for (locale, entries) in locales {
        let serde_json::Value::Object(entries) = entries else {
            return Err(I18nError::CatalogError(format!(
                "locale '{locale}' must be a table of templates"
            )));
        };

        let mut pack = LanguagePack::with_capacity(entries.len());
        for (key, template) in entries {
            match template {
                serde_json::Value::String(s) => {
                    pack.insert(key, s);
                }
                other => {
                    warn!(
                        locale = locale.as_str(),
                        key = key.as_str(),
                        kind = json_kind(&other),
                        "skipping non-string template"
                    );
                }
            }
        }
        debug!(locale = locale.as_str(), keys = pack.len(), "loaded language pack");
        catalog.insert(&locale, pack);
    }

    Ok(catalog)
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
