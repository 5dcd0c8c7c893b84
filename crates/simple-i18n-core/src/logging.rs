//! Logging integration for simple-i18n.
//!
//! The library crates only emit [`tracing`] events. Applications (and the CLI)
//! call [`setup_logging`] once to install a subscriber configured from
//! [`Settings`](crate::settings::Settings).

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "info",
/// "`simple_i18n_locale=trace`"). In debug mode a pretty, human-readable format
/// is used; otherwise a structured JSON format. Installing a second subscriber
/// is a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span scoped to one locale.
///
/// # Examples
///
/// ```
/// use simple_i18n_core::logging::locale_span;
///
/// let span = locale_span("en-uk");
/// let _guard = span.enter();
/// tracing::debug!("rendering");
/// ```
pub fn locale_span(locale: &str) -> tracing::Span {
    tracing::debug_span!("locale", locale)
}
