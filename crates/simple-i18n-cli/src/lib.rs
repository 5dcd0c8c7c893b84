//! # simple-i18n-cli
//!
//! Command-line access to a simple-i18n catalog.
//!
//! ```text
//! simple-i18n-cli [--config FILE] [--catalog FILE] [--locale LOCALE] <COMMAND>
//!
//!   translate KEY [--arg NAME=VALUE]...    print a translation (exit 1 if missing)
//!   process TEMPLATE [--arg NAME=VALUE]... substitute placeholders directly
//!   keys [--raw]                           list the keys of the active locale
//!   check KEY                              exit 0 if KEY exists, 1 otherwise
//! ```
//!
//! Settings are read from `--config` (TOML or JSON) with `SIMPLE_I18N_*`
//! environment overrides; `--catalog` and `--locale` override both.
//!
//! ```rust
//! use simple_i18n_cli::command::CommandRegistry;
//! use simple_i18n_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//! assert!(registry.list_commands().contains(&"translate"));
//! ```

pub mod command;
pub mod commands;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use simple_i18n::{I18n, I18nConfig, Settings};
use simple_i18n_core::logging::setup_logging;
use simple_i18n_core::settings_loader;

pub use command::{CommandRegistry, I18nCommand, Outcome};

/// Creates a registry holding the built-in subcommands.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    commands::register_builtin_commands(&mut registry);
    registry
}

/// Resolves the settings for a parsed command line.
///
/// # Errors
///
/// Returns an error if the `--config` file cannot be read or parsed.
pub fn load_settings(matches: &clap::ArgMatches) -> anyhow::Result<Settings> {
    let mut settings = match matches.get_one::<PathBuf>("config") {
        Some(path) => settings_loader::from_file_with_env(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => settings_loader::from_env(),
    };

    if let Some(catalog) = matches.get_one::<PathBuf>("catalog") {
        settings.catalog_path = Some(catalog.clone());
    }
    if let Some(locale) = matches.get_one::<String>("locale") {
        settings.locale.clone_from(locale);
    }
    Ok(settings)
}

/// Runs a parsed command line, writing command output to `out`.
///
/// # Errors
///
/// Returns an error if the settings or the catalog cannot be loaded, or if
/// writing the output fails.
pub fn run(
    registry: &CommandRegistry,
    matches: &clap::ArgMatches,
    out: &mut dyn Write,
) -> anyhow::Result<Outcome> {
    let settings = load_settings(matches)?;
    setup_logging(&settings);

    let config = I18nConfig::from_settings(&settings).with_context(|| match &settings.catalog_path {
        Some(path) => format!("failed to load catalog {}", path.display()),
        None => "failed to build configuration".to_string(),
    })?;
    let i18n = I18n::with_config(config);

    Ok(registry.execute(matches, &i18n, out)?)
}

/// Parses `argv` and runs it.
///
/// # Errors
///
/// Returns an error for an invalid command line as well as for everything
/// [`run`] can fail on.
pub fn run_from<I, T>(argv: I, out: &mut dyn Write) -> anyhow::Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let registry = default_registry();
    let matches = registry.build_cli().try_get_matches_from(argv)?;
    run(&registry, &matches, out)
}
