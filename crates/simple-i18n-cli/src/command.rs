//! Command framework for the simple-i18n CLI.
//!
//! Each subcommand implements [`I18nCommand`]; the [`CommandRegistry`] builds
//! the `clap` command line from the registered commands and dispatches the
//! parsed matches to the right handler.
//!
//! ## Defining a Custom Command
//!
//! ```rust
//! use std::io::Write;
//!
//! use simple_i18n::{I18n, I18nResult};
//! use simple_i18n_cli::command::{CommandRegistry, I18nCommand, Outcome};
//!
//! struct LocaleCommand;
//!
//! impl I18nCommand for LocaleCommand {
//!     fn name(&self) -> &'static str { "locale" }
//!     fn help(&self) -> &'static str { "Print the active locale" }
//!
//!     fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         i18n: &I18n,
//!         out: &mut dyn Write,
//!     ) -> I18nResult<Outcome> {
//!         writeln!(out, "{}", i18n.locale()?)?;
//!         Ok(Outcome::Success)
//!     }
//! }
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(Box::new(LocaleCommand));
//! assert_eq!(registry.list_commands(), vec!["locale"]);
//! ```

use std::collections::HashMap;
use std::io::Write;
use std::process::ExitCode;

use simple_i18n::{I18n, I18nError, I18nResult};
use simple_i18n_core::logging::locale_span;
use tracing::debug;

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Success,
    /// The command ran, but the answer is negative (e.g. a missing key).
    Failure,
}

impl Outcome {
    /// The process exit code for this outcome.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::Failure => ExitCode::FAILURE,
        }
    }
}

impl From<bool> for Outcome {
    fn from(ok: bool) -> Self {
        if ok {
            Self::Success
        } else {
            Self::Failure
        }
    }
}

/// A subcommand of the CLI.
pub trait I18nCommand: Send + Sync {
    /// The subcommand name.
    fn name(&self) -> &'static str;

    /// A short help description.
    fn help(&self) -> &'static str;

    /// Adds the subcommand's arguments. The default adds none.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Runs the subcommand against an initialized translator, writing its
    /// output to `out`.
    fn handle(
        &self,
        matches: &clap::ArgMatches,
        i18n: &I18n,
        out: &mut dyn Write,
    ) -> I18nResult<Outcome>;
}

/// A registry of CLI subcommands.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn I18nCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command, replacing any command with the same name.
    pub fn register(&mut self, command: Box<dyn I18nCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Returns the command with the given name.
    pub fn get(&self, name: &str) -> Option<&dyn I18nCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns all command names, sorted.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level `clap::Command`, global options included.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("simple-i18n-cli")
            .about("Translate keys and process templates from a simple-i18n catalog")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                clap::Arg::new("config")
                    .long("config")
                    .short('c')
                    .global(true)
                    .value_name("FILE")
                    .value_parser(clap::value_parser!(std::path::PathBuf))
                    .help("Settings file (.toml or .json)"),
            )
            .arg(
                clap::Arg::new("catalog")
                    .long("catalog")
                    .global(true)
                    .value_name("FILE")
                    .value_parser(clap::value_parser!(std::path::PathBuf))
                    .help("Catalog file (.toml or .json); overrides the settings"),
            )
            .arg(
                clap::Arg::new("locale")
                    .long("locale")
                    .short('l')
                    .global(true)
                    .value_name("LOCALE")
                    .help("Locale to translate in; overrides the settings"),
            );

        let mut entries: Vec<_> = self.commands.iter().collect();
        entries.sort_by_key(|(name, _)| **name);

        for (name, cmd) in entries {
            let subcmd = clap::Command::new(*name).about(cmd.help());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Dispatches the parsed subcommand.
    pub fn execute(
        &self,
        matches: &clap::ArgMatches,
        i18n: &I18n,
        out: &mut dyn Write,
    ) -> I18nResult<Outcome> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            I18nError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self.get(name).ok_or_else(|| {
            I18nError::ConfigurationError(format!("Unknown command: {name}"))
        })?;

        let _span = locale_span(i18n.locale()?).entered();
        debug!(command = name, "running command");
        cmd.handle(sub_matches, i18n, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simple_i18n::I18nConfig;

    struct EchoCommand {
        cmd_name: &'static str,
    }

    impl I18nCommand for EchoCommand {
        fn name(&self) -> &'static str {
            self.cmd_name
        }

        fn help(&self) -> &'static str {
            "Echo the word"
        }

        fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
            cmd.arg(clap::Arg::new("word").required(true))
        }

        fn handle(
            &self,
            matches: &clap::ArgMatches,
            _i18n: &I18n,
            out: &mut dyn Write,
        ) -> I18nResult<Outcome> {
            let word = matches.get_one::<String>("word").map_or("", String::as_str);
            writeln!(out, "{word}")?;
            Ok(Outcome::from(word == "yes"))
        }
    }

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(Box::new(EchoCommand { cmd_name: "echo" }));
        registry.register(Box::new(EchoCommand { cmd_name: "alpha" }));
        registry
    }

    #[test]
    fn test_registry_lists_sorted() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert_eq!(registry.list_commands(), vec!["alpha", "echo"]);
        assert!(registry.get("echo").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = registry();
        registry.register(Box::new(EchoCommand { cmd_name: "echo" }));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_build_cli_has_subcommands_and_globals() {
        let app = registry().build_cli();
        let names: Vec<&str> = app.get_subcommands().map(clap::Command::get_name).collect();
        assert_eq!(names, vec!["alpha", "echo"]);
        assert!(app.get_arguments().any(|a| a.get_id() == "catalog"));
    }

    #[test]
    fn test_execute_dispatches() {
        let registry = registry();
        let matches = registry
            .build_cli()
            .try_get_matches_from(["simple-i18n-cli", "echo", "yes"])
            .unwrap();
        let i18n = I18n::with_config(I18nConfig::new());
        let mut out = Vec::new();
        let outcome = registry.execute(&matches, &i18n, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(String::from_utf8(out).unwrap(), "yes\n");
    }

    #[test]
    fn test_execute_requires_initialized_translator() {
        let registry = registry();
        let matches = registry
            .build_cli()
            .try_get_matches_from(["simple-i18n-cli", "echo", "no"])
            .unwrap();
        let err = registry
            .execute(&matches, &I18n::new(), &mut Vec::<u8>::new())
            .unwrap_err();
        assert!(err.is_not_initialized());
    }

    #[test]
    fn test_outcome_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Success);
        assert_eq!(Outcome::from(false), Outcome::Failure);
    }
}
