//! The `check` subcommand.

use std::io::Write;

use simple_i18n::{I18n, I18nResult};

use crate::command::{I18nCommand, Outcome};

/// Reports whether a key exists in the active locale.
///
/// The exit status carries the answer: 0 when present, 1 when missing.
pub struct CheckCommand;

impl I18nCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Check whether a key exists in the active locale"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("key")
                .required(true)
                .value_name("KEY")
                .help("Translation key"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        i18n: &I18n,
        out: &mut dyn Write,
    ) -> I18nResult<Outcome> {
        let key = matches.get_one::<String>("key").map_or("", String::as_str);
        let present = i18n.has_key(key)?;
        writeln!(out, "{key}: {}", if present { "present" } else { "missing" })?;
        Ok(Outcome::from(present))
    }
}
