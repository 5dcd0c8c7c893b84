//! # simple-i18n-core
//!
//! Core types, settings, and error types for the simple-i18n workspace.
//! Every other crate builds on these; this crate has no workspace dependencies.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`value`] - Dynamic argument values handed to templates and rules
//! - [`lookup`] - Read-only access to a resolved key/template table
//! - [`settings`] - Runtime settings with defaults
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod lookup;
pub mod settings;
pub mod settings_loader;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use error::{I18nError, I18nResult};
pub use lookup::RawLookup;
pub use settings::Settings;
pub use value::{args, Args, Value};
