use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_print_hit() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.print_command().arg("hello").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hi\n");

    Ok(())
}

#[test]
fn test_print_missing_key_returns_key() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.print_command().arg("missing.key").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "missing.key\n");

    Ok(())
}

#[test]
fn test_print_formats_missing_key() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.print_command().args(["Hello %s", "World"]).output()?;

    assert_eq!(stdout(&output), "Hello World\n");

    Ok(())
}

#[test]
fn test_print_formatted_hit() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.print_command().args(["greet", "Ann"]).output()?;

    assert_eq!(stdout(&output), "Hi Ann\n");

    Ok(())
}

#[test]
fn test_print_trailing_language_override() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.print_command().args(["hello", "fr"]).output()?;
    assert_eq!(stdout(&output), "Bonjour\n");

    let output = test.print_command().args(["greet", "Ann", "fr"]).output()?;
    assert_eq!(stdout(&output), "Salut Ann\n");

    Ok(())
}

#[test]
fn test_print_explicit_language() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .print_command()
        .args(["greet", "fr", "--in", "en"])
        .output()?;

    // With --in the trailing "fr" is a plain argument.
    assert_eq!(stdout(&output), "Hi fr\n");

    Ok(())
}

#[test]
fn test_print_numeric_namespace_needs_explicit_language() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("locales/2024.json", r#"{ "hello": "Hi 2024" }"#)?;

    // A trailing "2024" is a number, not a language.
    let output = test.print_command().args(["hello", "2024"]).output()?;
    assert_eq!(stdout(&output), "Hi\n");

    let output = test
        .print_command()
        .args(["hello", "--in", "2024"])
        .output()?;
    assert_eq!(stdout(&output), "Hi 2024\n");

    Ok(())
}

#[test]
fn test_print_namespaced_language() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .print_command()
        .args(["hello", "--lang", "admin/es"])
        .output()?;

    assert_eq!(stdout(&output), "Hola\n");

    Ok(())
}

#[test]
fn test_print_uses_config_file() -> Result<()> {
    let test = CliTest::with_file("i18n/de.json", r#"{ "hello": "Hallo" }"#)?;
    test.write_file(
        ".glossarc.json",
        r#"{ "catalogRoot": "i18n", "defaultLanguage": "de" }"#,
    )?;

    let output = test.print_command().arg("hello").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hallo\n");

    Ok(())
}

#[test]
fn test_print_flags_override_config() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(".glossarc.json", r#"{ "defaultLanguage": "de" }"#)?;

    let output = test
        .print_command()
        .args(["hello", "--lang", "fr"])
        .output()?;

    assert_eq!(stdout(&output), "Bonjour\n");

    Ok(())
}

#[test]
fn test_print_catalog_root_flag() -> Result<()> {
    let test = CliTest::with_file("elsewhere/en.json", r#"{ "hello": "Hey" }"#)?;

    let output = test
        .print_command()
        .args(["hello", "--catalog-root", "elsewhere"])
        .output()?;

    assert_eq!(stdout(&output), "Hey\n");

    Ok(())
}

#[test]
fn test_print_debug_logs_missing_translation() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test
        .print_command()
        .args(["nope", "--debug"])
        .output()?;

    assert_eq!(stdout(&output), "nope\n");
    let err = stderr(&output);
    assert!(err.contains("missing translation"), "stderr: {}", err);
    assert!(err.contains("nope"));

    Ok(())
}

#[test]
fn test_print_without_debug_is_quiet() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.print_command().arg("nope").output()?;

    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_print_missing_catalog_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.print_command().arg("hello").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to load catalog"), "stderr: {}", err);
    assert!(err.contains("does not exist"));

    Ok(())
}

#[test]
fn test_print_with_malformed_file_still_resolves() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("locales/zh.json", "{ invalid json }")?;

    let output = test.print_command().arg("hello").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "Hi\n");
    assert!(stderr(&output).contains("1 catalog problem found"));

    Ok(())
}
