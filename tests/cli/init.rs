use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Created .i18nunusedrc.json\n");

    let content = test.read_file(".i18nunusedrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    for field in ["localesDir", "supportedExtensions", "locales", "folder"] {
        assert!(parsed.get(field).is_some(), "Config should have '{}'", field);
    }

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nunusedrc.json", "{}")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains(".i18nunusedrc.json already exists"));
    assert_eq!(test.read_file(".i18nunusedrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    test.write_file("src/app.tsx", r#"export const App = () => <div>{t("app.title")}</div>;"#)?;
    test.write_file(
        "locales/en.json",
        r#"{"app": {"title": "Title", "unused": "Unused"}}"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\n    app.unused\n"));

    Ok(())
}

#[test]
fn test_init_respects_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/.keep", "")?;

    let output = run({
        let mut cmd = test.command();
        cmd.arg("init").arg("--root").arg("web");
        cmd
    })?;

    assert_eq!(output.code, Some(0));
    assert!(test.root().join("web/.i18nunusedrc.json").exists());
    assert!(!test.root().join(".i18nunusedrc.json").exists());

    Ok(())
}
