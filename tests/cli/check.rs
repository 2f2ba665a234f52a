use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_catalog()?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Checked 3 catalog files (3 namespaces)"), "{}", out);
    assert!(out.contains("no issues found"));

    Ok(())
}

#[test]
fn test_check_reports_problems() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("locales/zh.json", "{ invalid json }")?;
    test.write_file("locales/de.json", r#"{ "hello": "Hallo", "count": 3 }"#)?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("warning: failed to parse"), "{}", out);
    assert!(out.contains("zh.json"));
    assert!(out.contains("warning: skipped [de] count: expected a string, found a number"));
    assert!(out.contains("2 problems found in 5 catalog files"));

    Ok(())
}

#[test]
fn test_check_ignored_files_are_not_reported() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file("locales/drafts/zh.json", "{ invalid json }")?;
    test.write_file(".glossarc.json", r#"{ "ignores": ["drafts/**"] }"#)?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(0));

    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_catalog()?;
    test.write_file(".glossarc.json", r#"{ "ignores": ["[oops"] }"#)?;

    let output = test.command().arg("check").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).contains("Invalid glob pattern"));

    Ok(())
}
