use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .glossarc.json"));
    assert!(test.root().join(".glossarc.json").exists());

    let content = test.read_file(".glossarc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["catalogRoot"], "./locales");
    assert_eq!(parsed["defaultLanguage"], "en");
    assert_eq!(parsed["debug"], false);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glossarc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".glossarc.json already exists"));
    assert_eq!(test.read_file(".glossarc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("locales/en.json", r#"{ "hello": "Hi" }"#)?;

    let output = test.print_command().arg("hello").output()?;
    assert!(
        output.status.success(),
        "print should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Hi\n");

    Ok(())
}
