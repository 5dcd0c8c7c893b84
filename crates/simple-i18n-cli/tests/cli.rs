//! Running the CLI end to end against catalog files.

use std::io::Write;

use simple_i18n_cli::{run_from, Outcome};
use tempfile::NamedTempFile;

fn catalog() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "common": {{ "app": "Demo" }},
            "en": {{ "greeting": "Hi {{name}}", "items": "{{count}} items" }},
            "en-uk": {{ "greeting": "Alright {{name}}?" }}
        }}"#
    )
    .unwrap();
    file
}

fn run(argv: &[&str]) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = run_from(argv.iter().copied(), &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_translate_with_args() {
    let file = catalog();
    let path = file.path().to_str().unwrap();
    let (outcome, out) = run(&[
        "simple-i18n-cli",
        "--catalog",
        path,
        "--locale",
        "en-UK",
        "translate",
        "greeting",
        "--arg",
        "name=Bob",
    ]);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(out, "Alright Bob?\n");
}

#[test]
fn test_global_options_after_subcommand() {
    let file = catalog();
    let path = file.path().to_str().unwrap();
    let (outcome, out) = run(&[
        "simple-i18n-cli",
        "translate",
        "items",
        "-a",
        "count=3",
        "--catalog",
        path,
        "-l",
        "en",
    ]);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(out, "3 items\n");
}

#[test]
fn test_translate_missing_key_fails_with_marker() {
    let file = catalog();
    let path = file.path().to_str().unwrap();
    let (outcome, out) = run(&["simple-i18n-cli", "--catalog", path, "translate", "nope"]);
    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(out, "[missing.i18n.translation:'nope']\n");
}

#[test]
fn test_process_without_catalog() {
    let (outcome, out) = run(&[
        "simple-i18n-cli",
        "process",
        "{a} + {b} = {c}",
        "--arg",
        "a=1",
        "--arg",
        "b=2",
    ]);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(out, "1 + 2 = \n");
}

#[test]
fn test_keys_lists_resolved_keys() {
    let file = catalog();
    let path = file.path().to_str().unwrap();
    let (_, out) = run(&["simple-i18n-cli", "--catalog", path, "--locale", "en", "keys"]);
    assert_eq!(out, "app\ngreeting\nitems\n");

    let (_, out) = run(&["simple-i18n-cli", "--catalog", path, "--locale", "de", "keys", "--raw"]);
    assert_eq!(out, "app = Demo\n");
}

#[test]
fn test_check_exit_status() {
    let file = catalog();
    let path = file.path().to_str().unwrap();
    let (outcome, out) = run(&["simple-i18n-cli", "--catalog", path, "-l", "en", "check", "items"]);
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(out, "items: present\n");

    let (outcome, out) = run(&["simple-i18n-cli", "--catalog", path, "check", "items"]);
    assert_eq!(outcome, Outcome::Failure);
    assert_eq!(out, "items: missing\n");
}

#[test]
fn test_config_file_supplies_catalog_and_locale() {
    let file = catalog();
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        config,
        "locale = \"en\"\ncatalog_path = {:?}",
        file.path().to_str().unwrap()
    )
    .unwrap();
    let config_path = config.path().to_str().unwrap();

    let (_, out) = run(&[
        "simple-i18n-cli",
        "--config",
        config_path,
        "translate",
        "greeting",
        "--arg",
        "name=Ann",
    ]);
    assert_eq!(out, "Hi Ann\n");

    let (_, out) = run(&[
        "simple-i18n-cli",
        "--config",
        config_path,
        "--locale",
        "en-uk",
        "translate",
        "greeting",
        "--arg",
        "name=Ann",
    ]);
    assert_eq!(out, "Alright Ann?\n");
}

#[test]
fn test_bad_catalog_is_an_error() {
    let mut out = Vec::new();
    let err = run_from(
        ["simple-i18n-cli", "--catalog", "/definitely/not/here.json", "keys"],
        &mut out,
    )
    .unwrap_err();
    assert!(err.to_string().contains("failed to load catalog"));
}

#[test]
fn test_invalid_arg_rejected() {
    let mut out = Vec::new();
    assert!(run_from(["simple-i18n-cli", "process", "{a}", "--arg", "oops"], &mut out).is_err());
    assert!(run_from(["simple-i18n-cli"], &mut out).is_err());
}
