//! Error types for simple-i18n.
//!
//! Only a handful of things can actually fail. Rendering never does: a missing
//! key, a missing argument, an unknown rule or a malformed placeholder each
//! degrade to a defined fallback instead of producing an [`I18nError`].

use thiserror::Error;

/// The error type shared by all simple-i18n crates.
#[derive(Error, Debug)]
pub enum I18nError {
    // ── Lifecycle ────────────────────────────────────────────────────

    /// A catalog-dependent operation was called before `initialize`.
    #[error("simple-i18n has not been initialized: call initialize() first")]
    NotInitialized,

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Catalogs ─────────────────────────────────────────────────────

    /// A catalog document does not have the locale -> key -> template shape.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl I18nError {
    /// Returns `true` for the lifecycle error raised before initialization.
    pub const fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized)
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, I18nError>`.
pub type I18nResult<T> = Result<T, I18nError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_display() {
        let err = I18nError::NotInitialized;
        assert!(err.to_string().contains("initialize()"));
        assert!(err.is_not_initialized());
    }

    #[test]
    fn test_other_errors_are_not_lifecycle_errors() {
        assert!(!I18nError::CatalogError("x".into()).is_not_initialized());
        assert!(!I18nError::ConfigurationError("x".into()).is_not_initialized());
    }

    #[test]
    fn test_catalog_error_display() {
        let err = I18nError::CatalogError("locale 'en' is not an object".into());
        assert_eq!(err.to_string(), "Catalog error: locale 'en' is not an object");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: I18nError = io_err.into();
        assert!(matches!(err, I18nError::IoError(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: I18nError = json_err.into();
        assert!(matches!(err, I18nError::SerializationError(_)));
    }
}
