use std::process::ExitCode;

use simple_i18n_cli::{default_registry, run};

fn main() -> anyhow::Result<ExitCode> {
    let registry = default_registry();
    let matches = registry.build_cli().get_matches();

    let stdout = std::io::stdout();
    let outcome = run(&registry, &matches, &mut stdout.lock())?;
    Ok(outcome.exit_code())
}
