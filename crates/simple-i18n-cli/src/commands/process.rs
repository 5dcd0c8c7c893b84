//! The `process` subcommand.

use std::io::Write;

use simple_i18n::{I18n, I18nResult};

use super::{template_args, template_args_arg};
use crate::command::{I18nCommand, Outcome};

/// Substitutes placeholders in a template given on the command line.
pub struct ProcessCommand;

impl I18nCommand for ProcessCommand {
    fn name(&self) -> &'static str {
        "process"
    }

    fn help(&self) -> &'static str {
        "Process a template without a catalog lookup"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("template")
                .required(true)
                .value_name("TEMPLATE")
                .help("Template text, e.g. 'Hi {name}'"),
        )
        .arg(template_args_arg())
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        i18n: &I18n,
        out: &mut dyn Write,
    ) -> I18nResult<Outcome> {
        let template = matches
            .get_one::<String>("template")
            .map_or("", String::as_str);
        let args = template_args(matches);
        writeln!(out, "{}", i18n.process(template, Some(&args))?)?;
        Ok(Outcome::Success)
    }
}
