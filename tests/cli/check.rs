use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_reports_unused_nested_keys() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file(
        "src/app.tsx",
        r#"
  export function Greeting() {
      return <p>{t("a.b")}</p>;
  }
  "#,
    )?;
    test.write_file("locales/en.json", r#"{"a": {"b": "hi", "c": "yo"}}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error: Locales file en.json has unused keys:  unused-keys"));
    assert!(output.stdout.contains("locales/en.json"));
    assert!(output.stdout.contains("\n    a.c\n"));
    assert!(!output.stdout.contains("a.b\n"));
    assert!(output.stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_intermediate_and_leaf_keys_reported_in_order() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/index.js", "export const noop = () => {};")?;
    test.write_file("locales/en.json", r#"{"a": {"b": {"c": "x"}}, "title": "T"}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\n    a.b\n    a.b.c\n"));
    assert!(!output.stdout.contains("title"));

    Ok(())
}

#[test]
fn test_success_is_silent() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file(
        "src/nav.ts",
        r#"export const labels = [t("nav.home"), t("nav.about")];"#,
    )?;
    test.write_file(
        "locales/en.json",
        r#"{"title": "Top level", "nav": {"home": "Home", "about": "About"}}"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_incomplete_config_does_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nunusedrc.json",
        r#"{"localesDir": "./locales", "supportedExtensions": ["ts"], "folder": "./src"}"#,
    )?;
    test.write_file("src/a.ts", "export {};")?;
    test.write_file("locales/en.json", r#"{"a": {"b": "never used"}}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_no_config_does_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.json", r#"{"a": {"b": "never used"}}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");

    Ok(())
}

#[test]
fn test_only_offending_locale_is_reported() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/a.ts", r#"t("nav.home");"#)?;
    test.write_file("locales/en.json", r#"{"nav": {"home": "Home"}}"#)?;
    test.write_file(
        "locales/fr.json",
        r#"{"nav": {"home": "Accueil", "old": "Vieux"}}"#,
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("Locales file fr.json has unused keys:"));
    assert!(!output.stdout.contains("Locales file en.json"));
    assert!(output.stdout.contains("\n    nav.old\n"));

    Ok(())
}

#[test]
fn test_dynamic_keys_do_not_count_as_used() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file(
        "src/a.ts",
        r#"
  const k = "a.b";
  t(k);
  t(`a.b`);
  i18n.t("a.b");
  "#,
    )?;
    test.write_file("locales/en.json", r#"{"a": {"b": "x"}}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\n    a.b\n"));

    Ok(())
}

#[test]
fn test_broken_catalog_is_an_error() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/a.ts", r#"t("a.b");"#)?;
    test.write_file("locales/de.json", "{ not json")?;
    test.write_file("locales/en.json", r#"{"a": {"b": "x", "c": "y"}}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("locales/de.json"));
    assert!(output.stdout.contains("Locales file en.json has unused keys:"));
    assert!(output.stdout.contains("\n    a.c\n"));

    Ok(())
}

#[test]
fn test_broken_source_is_skipped() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/broken.ts", "const = ;")?;
    test.write_file("src/ok.ts", r#"t("a.b");"#)?;
    test.write_file("locales/en.json", r#"{"a": {"b": "x"}}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "");
    assert!(
        output
            .stderr
            .contains("warning: 1 file(s) could not be parsed (use -v for details)")
    );

    Ok(())
}

#[test]
fn test_broken_source_listed_when_verbose() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/broken.ts", "const = ;")?;
    test.write_file("locales/en.json", r#"{"a": {"b": "x"}}"#)?;

    let mut cmd = test.check_command();
    cmd.arg("--verbose");
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("warning: "));
    assert!(output.stdout.contains("src/broken.ts"));
    assert!(!output.stderr.contains("could not be parsed (use -v"));

    Ok(())
}

#[test]
fn test_cli_options_without_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/page.jsx", r#"export default () => <h1>{t("home.title")}</h1>;"#)?;
    test.write_file(
        "i18n/en.json",
        r#"{"home": {"title": "Home", "subtitle": "Sub"}}"#,
    )?;

    let mut cmd = test.check_command();
    cmd.args([
        "--locales-dir",
        "i18n",
        "--supported-extensions",
        "jsx",
        "--locales",
        "en",
        "--folder",
        "app",
    ]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\n    home.subtitle\n"));

    Ok(())
}

#[test]
fn test_extensions_outside_list_are_ignored() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/a.ts", r#"t("a.b");"#)?;
    test.write_file("src/b.vue", r#"t("a.c");"#)?;
    test.write_file("locales/en.json", r#"{"a": {"b": "x", "c": "y"}}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\n    a.c\n"));

    Ok(())
}

#[test]
fn test_root_option() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/a.ts", r#"t("a.b");"#)?;
    test.write_file("locales/en.json", r#"{"a": {"b": "x", "c": "y"}}"#)?;

    let mut cmd = test.command();
    cmd.current_dir(std::env::temp_dir());
    cmd.arg("check").arg("--root").arg(test.root());
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("\n    a.c\n"));

    Ok(())
}

#[test]
fn test_missing_locales_dir_fails() -> Result<()> {
    let test = CliTest::configured()?;
    test.write_file("src/a.ts", r#"t("a.b");"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("does not exist"));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nunusedrc.json", r#"{"unknownOption": true}"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_help_without_command() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage:"));

    Ok(())
}
