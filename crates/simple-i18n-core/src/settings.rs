//! Runtime settings for simple-i18n.
//!
//! [`Settings`] covers what an application decides once at startup: where the
//! catalog lives, which locale to start in, and how verbose logging is.
//! Rules are code, so they are not part of the settings; they are supplied
//! through the façade's configuration builder.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The complete set of runtime settings.
///
/// # Examples
///
/// ```
/// use simple_i18n_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(!settings.debug);
/// assert_eq!(settings.log_level, "info");
/// assert!(settings.locale.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode (pretty log output) is enabled.
    pub debug: bool,
    /// The log filter (e.g. "info", "debug", "`simple_i18n_template=trace`").
    pub log_level: String,

    // ── Internationalization ─────────────────────────────────────────

    /// The initial locale identifier (e.g. "en-uk"). Empty selects `common` only.
    pub locale: String,
    /// Path to a catalog document (`.json` or `.toml`).
    pub catalog_path: Option<PathBuf>,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
            locale: String::new(),
            catalog_path: None,
            extra: HashMap::new(),
        }
    }
}
