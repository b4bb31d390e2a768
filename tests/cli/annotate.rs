use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const APP_TS: &str = r#"export function load() {
  fail("ERROR.NOT_FOUND");
  const retries = 3;
  warn('WARN.SLOW', "ERROR.TIMEOUT");
  log("NOT.A.KEY");
}
"#;

#[test]
fn test_annotate_after_mode() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("src/app.ts", APP_TS)?;

    let output = test.annotate_command().arg("src/app.ts").output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        concat!(
            "src/app.ts\n",
            "2 |   fail(\"ERROR.NOT_FOUND\");  → Not found\n",
            "4 |   warn('WARN.SLOW', \"ERROR.TIMEOUT\");  → Slow  → Timed out\n",
            "✓ Resolved 3 keys in 1 file\n",
        )
    );

    Ok(())
}

#[test]
fn test_annotate_codelens_mode() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("src/app.ts", APP_TS)?;

    let output = test
        .annotate_command()
        .args(["--mode", "codelens", "src/app.ts"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        concat!(
            "src/app.ts\n",
            "  | ", "       Not found\n",
            "2 |   fail(\"ERROR.NOT_FOUND\");\n",
            "  | ", "       Slow | Timed out\n",
            "4 |   warn('WARN.SLOW', \"ERROR.TIMEOUT\");\n",
            "✓ Resolved 3 keys in 1 file\n",
        )
    );

    Ok(())
}

#[test]
fn test_annotate_hover_mode_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keylensrc.json",
        r#"{ "translationFile": "en.json", "displayMode": "hover" }"#,
    )?;
    test.write_file("en.json", r#"{"GREETING": {"HELLO": "Hello"}}"#)?;
    test.write_file("main.py", "print(t('GREETING.HELLO'))\n")?;

    let output = test.annotate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        concat!(
            "main.py:1:9 GREETING.HELLO\n",
            "  **Translation:** Hello\n",
            "✓ Resolved 1 key in 1 file\n",
        )
    );

    Ok(())
}

#[test]
fn test_annotate_walks_project_and_skips_ignored() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("src/a.ts", "fail('ERROR.NOT_FOUND');\n")?;
    test.write_file("src/b.ts", "const x = 1;\n")?;
    test.write_file("node_modules/lib/index.js", "fail('ERROR.TIMEOUT');\n")?;
    test.write_file("notes.txt", "'WARN.SLOW'\n")?;

    let output = test.annotate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        concat!(
            "src/a.ts\n",
            "1 | fail('ERROR.NOT_FOUND');  → Not found\n",
            "✓ Resolved 1 key in 2 files\n",
        )
    );

    Ok(())
}

#[test]
fn test_annotate_strict_quotes() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("src/app.ts", "a(\"WARN.SLOW'); b('ERROR.TIMEOUT');\n")?;

    let loose = test.annotate_command().arg("src/app.ts").output()?;
    assert!(stdout(&loose).contains("→ Slow  → Timed out"));

    let strict = test
        .annotate_command()
        .args(["--strict-quotes", "src/app.ts"])
        .output()?;
    let strict_out = stdout(&strict);
    assert!(!strict_out.contains("Slow"));
    assert!(strict_out.contains("→ Timed out"));

    Ok(())
}

#[test]
fn test_annotate_translation_file_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("other.json", r#"{"WARN": {"SLOW": "Slow"}}"#)?;
    test.write_file("app.js", "warn('WARN.SLOW');\n")?;

    let output = test
        .annotate_command()
        .args(["--translation-file", "other.json", "app.js"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("1 | warn('WARN.SLOW');  → Slow"));

    Ok(())
}

#[test]
fn test_annotate_missing_translation_file_degrades() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".keylensrc.json",
        r#"{ "translationFile": "missing.json" }"#,
    )?;
    test.write_file("app.js", "warn('WARN.SLOW');\n")?;

    let output = test.annotate_command().arg("app.js").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "✓ Resolved 0 keys in 1 file\n");
    assert!(stderr(&output).contains("Translation file not found"));

    Ok(())
}

#[test]
fn test_annotate_no_files() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.annotate_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No files to annotate.\n");

    Ok(())
}

#[test]
fn test_annotate_unreadable_explicit_file_is_error() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.annotate_command().arg("does/not/exist.ts").output()?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keylensrc.json", r#"{ "displayMode": "popup" }"#)?;

    let output = test.annotate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}
