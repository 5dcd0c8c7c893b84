//! The `translate` subcommand.

use std::io::Write;

use simple_i18n::{I18n, I18nResult};

use super::{template_args, template_args_arg};
use crate::command::{I18nCommand, Outcome};

/// Prints the translation of a key, or the missing-translation marker.
///
/// Fails (exit status 1) when the key is missing.
pub struct TranslateCommand;

impl I18nCommand for TranslateCommand {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn help(&self) -> &'static str {
        "Translate a key in the active locale"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("key")
                .required(true)
                .value_name("KEY")
                .help("Translation key"),
        )
        .arg(template_args_arg())
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        i18n: &I18n,
        out: &mut dyn Write,
    ) -> I18nResult<Outcome> {
        let key = matches.get_one::<String>("key").map_or("", String::as_str);
        let args = template_args(matches);
        writeln!(out, "{}", i18n.translate(key, Some(&args))?)?;
        Ok(Outcome::from(i18n.has_key(key)?))
    }
}
