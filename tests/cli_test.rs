//! Integration tests for the dryg binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dryg(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("dryg"));
    cmd.env("DRYG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bang redirects"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_shows_landing_page() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dryg Search"))
        .stdout(predicate::str::contains("https://search.dryg.net?q=%s"));
    Ok(())
}

#[test]
fn cli_bare_query_prints_with_flag() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["--print", "!gh", "tokio"])
        .assert()
        .success()
        .stdout("https://github.com/search?q=tokio\n");
    Ok(())
}

#[test]
fn cli_search_reads_query_from_url() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["search", "--print", "--url", "https://search.dryg.net/?q=%21yt+lofi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lofi"))
        .stdout(predicate::str::contains("youtube.com"));
    Ok(())
}

#[test]
fn cli_open_browser_false_prints() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    fs::write(home.path().join("config.yml"), "open_browser: false\n")?;
    dryg(&home)
        .args(["search", "!ghr", "tokio-rs/tokio"])
        .assert()
        .success()
        .stdout("https://github.com/tokio-rs/tokio\n");
    Ok(())
}

#[test]
fn cli_malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    fs::write(home.path().join("config.yml"), "open_browser: [nope")?;
    dryg(&home)
        .args(["resolve", "rust"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config.yml"));
    Ok(())
}

#[test]
fn cli_resolve_prints_destination() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["resolve", "rust", "book"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=rust%20book\n");
    Ok(())
}

#[test]
fn cli_resolve_json() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["resolve", "--json", "!w", "ferris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"trigger\": \"w\""))
        .stdout(predicate::str::contains("\"source\": \"builtin\""));
    Ok(())
}

#[test]
fn cli_add_list_resolve_remove() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;

    dryg(&home)
        .args(["add", "!Jira", "https://jira.test/browse/{{{s}}}", "--name", "Jira"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added !jira"));

    dryg(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("!jira"))
        .stdout(predicate::str::contains("Jira"));

    dryg(&home)
        .args(["resolve", "!jira", "ABC-12"])
        .assert()
        .success()
        .stdout("https://jira.test/browse/ABC-12\n");

    dryg(&home)
        .args(["remove", "jira"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed !jira"));

    dryg(&home)
        .args(["remove", "jira"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No custom bang !jira"));
    Ok(())
}

#[test]
fn cli_add_rejects_missing_placeholder() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["add", "x", "https://example.test/search"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("{{{s}}}"));

    assert!(!home.path().join("store.json").exists());
    Ok(())
}

#[test]
fn cli_add_warns_on_builtin_override() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["add", "gh", "https://git.internal/?q={{{s}}}"])
        .assert()
        .success()
        .stderr(predicate::str::contains("overrides the built-in GitHub bang"));
    Ok(())
}

#[test]
fn cli_resolve_without_destination_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["add", "nohome", "https://nohome.test/{{{s}}}"])
        .assert()
        .success();

    dryg(&home)
        .args(["resolve", "!nohome"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_default_changes_fallback() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home).args(["default", "ddg"]).assert().success();

    dryg(&home)
        .arg("default")
        .assert()
        .success()
        .stdout(predicate::str::contains("!ddg (DuckDuckGo)"));

    dryg(&home)
        .args(["resolve", "!zzzunknown", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("duckduckgo.com"));
    Ok(())
}

#[test]
fn cli_theme_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home).arg("theme").assert().success().stdout("dark\n");
    dryg(&home).args(["theme", "light"]).assert().success();
    dryg(&home).arg("theme").assert().success().stdout("light\n");
    Ok(())
}

#[test]
fn cli_export_import() -> Result<(), Box<dyn std::error::Error>> {
    let source = TempDir::new()?;
    dryg(&source)
        .args(["add", "crate", "https://docs.rs/{{{s}}}"])
        .assert()
        .success();

    let output = dryg(&source).arg("export").output()?;
    assert!(output.status.success());
    let file = source.path().join("bangs.json");
    fs::write(&file, &output.stdout)?;

    let target = TempDir::new()?;
    dryg(&target)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 bangs"));

    dryg(&target)
        .args(["resolve", "!crate", "serde"])
        .assert()
        .success()
        .stdout("https://docs.rs/serde\n");
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dryg"));
    Ok(())
}

#[test]
fn cli_flag_after_bare_query() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["!gh", "tokio", "--print"])
        .assert()
        .success()
        .stdout("https://github.com/search?q=tokio\n");
    Ok(())
}

#[test]
fn cli_separator_searches_command_words() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["--print", "--", "theme", "light"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=theme%20light\n");

    // The theme preference is untouched.
    dryg(&home).arg("theme").assert().success().stdout("dark\n");
    Ok(())
}

#[test]
fn cli_search_subcommand_takes_command_words() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    dryg(&home)
        .args(["search", "--print", "default", "gateway"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=default%20gateway\n");

    dryg(&home).arg("default").assert().success().stdout("!g (Google)\n");
    Ok(())
}

#[test]
fn cli_corrupted_store_starts_empty() -> Result<(), Box<dyn std::error::Error>> {
    let home = TempDir::new()?;
    fs::write(home.path().join("store.json"), "{not json")?;

    dryg(&home)
        .args(["resolve", "!g", "x"])
        .assert()
        .success()
        .stdout("https://www.google.com/search?q=x\n");

    dryg(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No custom bangs."));
    Ok(())
}
