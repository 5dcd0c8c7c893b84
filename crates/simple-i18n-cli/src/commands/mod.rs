//! Built-in subcommands.

pub mod check;
pub mod keys;
pub mod process;
pub mod translate;

pub use check::CheckCommand;
pub use keys::KeysCommand;
pub use process::ProcessCommand;
pub use translate::TranslateCommand;

use simple_i18n::{Args, Value};

use crate::command::CommandRegistry;

/// Registers all built-in subcommands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(TranslateCommand));
    registry.register(Box::new(ProcessCommand));
    registry.register(Box::new(KeysCommand));
    registry.register(Box::new(CheckCommand));
}

/// Parses one `--arg name=value` pair.
///
/// The value is read as JSON when it parses as JSON (`3`, `true`, `"3"`,
/// `[1,2]`), otherwise it is taken as a plain string.
///
/// # Examples
///
/// ```
/// use simple_i18n::Value;
/// use simple_i18n_cli::commands::parse_arg;
///
/// assert_eq!(parse_arg("name=Bob").unwrap(), ("name".to_string(), Value::from("Bob")));
/// assert_eq!(parse_arg("count=3").unwrap().1, Value::from(3));
/// assert!(parse_arg("oops").is_err());
/// ```
pub fn parse_arg(raw: &str) -> Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("missing argument name in '{raw}'"));
    }
    let value = serde_json::from_str::<serde_json::Value>(value)
        .map_or_else(|_| Value::from(value), Value::from);
    Ok((name.to_string(), value))
}

/// The repeatable `--arg name=value` option.
pub(crate) fn template_args_arg() -> clap::Arg {
    clap::Arg::new("arg")
        .long("arg")
        .short('a')
        .value_name("NAME=VALUE")
        .action(clap::ArgAction::Append)
        .value_parser(parse_arg)
        .help("Template argument; the value is parsed as JSON if possible")
}

/// Collects the `--arg` values. Later values for the same name win.
pub(crate) fn template_args(matches: &clap::ArgMatches) -> Args {
    matches
        .get_many::<(String, Value)>("arg")
        .into_iter()
        .flatten()
        .cloned()
        .collect()
}
