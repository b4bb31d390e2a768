use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

fn lookup(test: &CliTest, key: &str) -> Result<std::process::Output> {
    Ok(test.command().args(["lookup", key]).output()?)
}

#[test]
fn test_lookup_nested_key() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = lookup(&test, "ERROR.TIMEOUT")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Timed out\n");

    Ok(())
}

#[test]
fn test_lookup_flat_dotted_entry() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = lookup(&test, "FLAT.KEY")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Flat entry\n");

    Ok(())
}

#[test]
fn test_lookup_missing_key() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = lookup(&test, "ERROR.GONE")?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Key ERROR.GONE not found"));

    Ok(())
}

#[test]
fn test_lookup_group_key() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = lookup(&test, "ERROR")?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "{\"NOT_FOUND\":\"Not found\",\"TIMEOUT\":\"Timed out\"}\n"
    );

    Ok(())
}

#[test]
fn test_lookup_empty_group_key() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("i18n/en.json", r#"{"ERROR": {}}"#)?;

    let output = lookup(&test, "ERROR")?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Key ERROR is an empty group of keys"));

    Ok(())
}

#[test]
fn test_lookup_empty_segment() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("i18n/en.json", r#"{"ERROR..TIMEOUT": "flat", "ERROR": {"TIMEOUT": "x"}}"#)?;

    let output = lookup(&test, "ERROR..TIMEOUT")?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");

    Ok(())
}

#[test]
fn test_lookup_from_subdirectory_finds_config() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("src/deep/.keep", "")?;

    let output = test
        .command()
        .current_dir(test.root().join("src/deep"))
        .args(["lookup", "WARN.SLOW"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Slow\n");

    Ok(())
}
