use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const KEYS: [&str; 3] = ["items.zero", "items.one", "items.many"];

fn plural(test: &CliTest, count: &str, values: &[&str]) -> Result<String> {
    let output = test
        .plural_command()
        .arg(count)
        .args(KEYS)
        .args(values)
        .output()?;
    assert!(output.status.success());
    Ok(stdout(&output))
}

#[test]
fn test_plural_buckets() -> Result<()> {
    let test = CliTest::with_catalog()?;

    assert_eq!(plural(&test, "0", &[""])?, "no items\n");
    assert_eq!(plural(&test, "1", &[""])?, "1 item\n");
    assert_eq!(plural(&test, "5", &[""])?, "5 items\n");

    Ok(())
}

#[test]
fn test_plural_negative_count_is_zero_bucket() -> Result<()> {
    let test = CliTest::with_catalog()?;

    assert_eq!(plural(&test, "-3", &[])?, "no items\n");

    Ok(())
}

#[test]
fn test_plural_without_values() -> Result<()> {
    let test = CliTest::with_catalog()?;

    assert_eq!(plural(&test, "12", &[])?, "12 items\n");

    Ok(())
}

#[test]
fn test_plural_language_override() -> Result<()> {
    let test = CliTest::with_catalog()?;

    assert_eq!(plural(&test, "3", &["", "fr"])?, "3 articles\n");

    Ok(())
}
