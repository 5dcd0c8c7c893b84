//! The `keys` subcommand.

use std::io::Write;

use simple_i18n::{I18n, I18nResult};

use crate::command::{I18nCommand, Outcome};

/// Lists the keys of the active locale, one per line, sorted.
pub struct KeysCommand;

impl I18nCommand for KeysCommand {
    fn name(&self) -> &'static str {
        "keys"
    }

    fn help(&self) -> &'static str {
        "List the keys available in the active locale"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("raw")
                .long("raw")
                .action(clap::ArgAction::SetTrue)
                .help("Also print each unprocessed template"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        i18n: &I18n,
        out: &mut dyn Write,
    ) -> I18nResult<Outcome> {
        let with_raw = matches.get_flag("raw");
        let resolved = i18n.resolved()?;
        for key in resolved.keys() {
            if with_raw {
                writeln!(out, "{key} = {}", resolved.get(key).unwrap_or_default())?;
            } else {
                writeln!(out, "{key}")?;
            }
        }
        Ok(Outcome::Success)
    }
}
