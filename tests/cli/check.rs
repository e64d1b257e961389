use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_english_text_reported() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"
export function render(el) {
    el.textContent = "Some message text";
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"
console.log("Informational message");
throw new Error("Error message");
var x = {"Object key": 42};
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_multiple_files_sorted() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("b.ts", "const label: string = \"Second file text\";\n")?;
    test.write_file(
        "a.jsx",
        "function A() { return fallback || `Loading ${name} now`; }\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_exclude_flag() -> Result<()> {
    let test = CliTest::with_file(
        "app.js",
        r#"
Sentry.captureMessage("Error message here");
Sentry.otherFunction("Error message here");
"#,
    )?;

    assert_cmd_snapshot!(
        test.check_command()
            .args(["--exclude", "Sentry.captureMessage"])
    );

    Ok(())
}

#[test]
fn test_options_json() -> Result<()> {
    let test = CliTest::with_file("app.js", "logger.info(\"Started the server\");\n")?;

    assert_cmd_snapshot!(
        test.check_command()
            .args(["--options", r#"{"excludes": ["logger"]}"#])
    );

    Ok(())
}

#[test]
fn test_excludes_from_env() -> Result<()> {
    let test = CliTest::with_file("app.js", "t(\"Hello world\");\nlog(\"Hello world\");\n")?;

    assert_cmd_snapshot!(test.check_command().env("NO_EN_EXCLUDES", "t,log"));

    Ok(())
}

#[test]
fn test_invalid_options_is_an_error() -> Result<()> {
    let test = CliTest::with_file("app.js", "x = 1;\n")?;

    let mut settings = test.settings();
    settings.add_filter(r"at line \d+ column \d+", "at [POSITION]");
    let _guard = settings.bind_to_scope();

    assert_cmd_snapshot!(
        test.check_command()
            .args(["--options", r#"{"excludes": [1]}"#])
    );

    Ok(())
}

#[test]
fn test_ignore_pattern_and_node_modules() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "x = 1;\n")?;
    test.write_file("src/generated/api.js", "x = \"Generated text here\";\n")?;
    test.write_file("node_modules/pkg/index.js", "x = \"Vendor text here\";\n")?;

    assert_cmd_snapshot!(test.check_command().args(["--ignore", "**/generated/**"]));

    Ok(())
}

#[test]
fn test_explicit_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/app.js", "x = \"Checked text here\";\n")?;
    test.write_file("lib/other.js", "x = \"Unchecked text here\";\n")?;

    let _guard = test.settings().bind_to_scope();
    assert_cmd_snapshot!(test.check_command().arg(test.root().join("src")));

    Ok(())
}

#[test]
fn test_parse_error_reported() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("ok.js", "x = 1;\n")?;
    test.write_file("broken.js", "function (\n")?;

    let _guard = test.settings().bind_to_scope();
    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_verbose_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app.js", "t(\"Hello world\");\nx = \"Some text here\";\n")?;
    test.write_file("broken.js", "function (\n")?;

    let _guard = test.settings().bind_to_scope();
    assert_cmd_snapshot!(test.check_command().args(["--exclude", "t", "-v"]));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command());

    Ok(())
}
