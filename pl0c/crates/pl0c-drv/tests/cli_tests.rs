//! CLI Interface E2E Tests
//!
//! These tests run the `pl0c` binary against source files written to a
//! temporary directory and check its output and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the pl0c binary
fn pl0c_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_pl0c"))
}

/// A pl0c command isolated from the caller's environment
fn pl0c() -> Command {
    let mut cmd = Command::new(pl0c_bin());
    cmd.env_remove("PL0C_CONFIG")
        .env_remove("PL0C_VERBOSE")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `content` to `name` inside `dir` and return its path
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

#[test]
fn test_cli_help() {
    pl0c()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version() {
    pl0c()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pl0c"));
}

#[test]
fn test_cli_tokenizes_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "var x = 12 ; print ( x ) ;\n");

    let expected = "Var(\"var\")\n\
                    Identifier(\"x\")\n\
                    Equal('=')\n\
                    UnsignedInteger(12)\n\
                    Semicolon(';')\n\
                    Print(\"print\")\n\
                    LParen('(')\n\
                    Identifier(\"x\")\n\
                    RParen(')')\n\
                    Semicolon(';')\n\
                    Eof\n";

    pl0c()
        .arg(&input)
        .assert()
        .success()
        .stdout(expected)
        .stderr("");
}

#[test]
fn test_cli_spans_flag() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "begin\nend");

    pl0c()
        .arg("--spans")
        .arg(&input)
        .assert()
        .success()
        .stdout("1:1-1:6 Begin(\"begin\")\n2:1-2:4 End(\"end\")\n2:4-2:4 Eof\n");
}

#[test]
fn test_cli_invalid_input_reports_diagnostic() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "bad.pl0", "var x;\nx = #;\n");

    pl0c()
        .arg(&input)
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::starts_with("error[E0002]: invalid input character")
                .and(predicate::str::contains("bad.pl0:2:5"))
                .and(predicate::str::contains("x = #;")),
        );
}

#[test]
fn test_cli_integer_overflow_reports_diagnostic() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "big.pl0", "print(99999999999999999999)");

    pl0c()
        .arg(&input)
        .assert()
        .code(1)
        .stderr(
            predicate::str::starts_with("error[E0001]: integer literal is too large")
                .and(predicate::str::contains("big.pl0:1:7")),
        );
}

#[test]
fn test_cli_missing_input_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let missing = dir.path().join("missing.pl0");

    pl0c()
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: failed to read"));
}

#[test]
fn test_cli_charset_flag() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "_tmp");

    pl0c().arg(&input).assert().code(1);

    pl0c()
        .args(["--charset", "ascii"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Identifier(\"_tmp\")\nEof\n");
}

#[test]
fn test_cli_config_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "_tmp");
    let config = write_file(
        &dir,
        "pl0c.toml",
        "[lexer]\ncharset = \"ascii\"\n\n[output]\nspans = true\n",
    );

    pl0c()
        .arg("--config")
        .arg(&config)
        .arg(&input)
        .assert()
        .success()
        .stdout("1:1-1:5 Identifier(\"_tmp\")\n1:5-1:5 Eof\n");
}

#[test]
fn test_cli_flag_overrides_config_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "_tmp");
    let config = write_file(&dir, "pl0c.toml", "[lexer]\ncharset = \"ascii\"\n");

    pl0c()
        .arg("--config")
        .arg(&config)
        .args(["--charset", "unicode"])
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("E0002"));
}

#[test]
fn test_cli_config_from_env() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "_tmp");
    let config = write_file(&dir, "pl0c.toml", "[lexer]\ncharset = \"ascii\"\n");

    pl0c()
        .env("PL0C_CONFIG", &config)
        .arg(&input)
        .assert()
        .success();
}

#[test]
fn test_cli_invalid_config_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "x");
    let config = write_file(&dir, "pl0c.toml", "[lexer]\nkeywords = 3\n");

    pl0c()
        .arg("--config")
        .arg(&config)
        .arg(&input)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_file(&dir, "prog.pl0", "x");

    pl0c()
        .args(["--verbose", "--no-color"])
        .arg(&input)
        .assert()
        .success()
        .stdout("Identifier(\"x\")\nEof\n")
        .stderr(predicate::str::contains("configuration loaded"));
}
