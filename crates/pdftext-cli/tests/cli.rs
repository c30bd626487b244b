use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

use pdftext_core::testing::{build_pdf, build_pdf_with_broken_page, build_pdf_with_font};

/// `pdftext` isolated from the user's config directory and RUST_LOG.
fn pdftext(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pdftext").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home).env_remove("RUST_LOG");
    cmd
}

fn parse_stdout(stdout: &[u8]) -> Value {
    let text = std::str::from_utf8(stdout).unwrap();
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 1);
    serde_json::from_str(text).unwrap()
}

#[test]
fn empty_stdin_reports_no_data() {
    let home = TempDir::new().unwrap();

    pdftext(home.path())
        .write_stdin(Vec::<u8>::new())
        .assert()
        .code(0)
        .stdout("{\"success\":false,\"text\":\"\",\"error\":\"No PDF data received\"}\n");
}

#[test]
fn empty_file_reports_no_data() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("empty.pdf");
    std::fs::write(&path, b"").unwrap();

    let output = pdftext(home.path()).arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = parse_stdout(&output.stdout);
    assert_eq!(json["error"], "No PDF data received");
}

#[test]
fn missing_file_is_script_error() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("does-not-exist.pdf");

    pdftext(home.path())
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "{\"success\":false,\"text\":\"\",\"error\":\"Script error: ",
        ));
}

#[test]
fn multi_page_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("resume.pdf");
    std::fs::write(&path, build_pdf(&["Senior Rust engineer", "Open source work"])).unwrap();

    let output = pdftext(home.path()).arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = parse_stdout(&output.stdout);
    assert_eq!(json["success"], true);
    assert_eq!(json["error"], Value::Null);
    assert_eq!(json["pages"], 2);

    let text = json["text"].as_str().unwrap();
    assert_eq!(json["char_count"], text.chars().count());
    assert_eq!(text, text.trim());

    let first = text.find("Senior").unwrap();
    let second = text.find("Open").unwrap();
    assert!(first < second);
    assert!(text[first..second].contains('\n'));
}

#[test]
fn pdf_from_stdin() {
    let home = TempDir::new().unwrap();
    let data = build_pdf(&["Text delivered over a pipe"]);

    let output = pdftext(home.path()).write_stdin(data).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = parse_stdout(&output.stdout);
    assert_eq!(json["success"], true);
    assert_eq!(json["pages"], 1);
}

#[test]
fn pdf_without_text_is_too_short() {
    let home = TempDir::new().unwrap();

    pdftext(home.path())
        .write_stdin(build_pdf(&["", ""]))
        .assert()
        .code(0)
        .stdout("{\"success\":false,\"text\":\"\",\"error\":\"Extracted text is too short or empty\"}\n");
}

#[test]
fn font_diagnostics_stay_off_stdout() {
    let home = TempDir::new().unwrap();
    // No Widths on a non-core font: pdf-extract prints a warning per font.
    let data = build_pdf_with_font(&["Experienced Rust developer"], "ArialBold");

    let output = pdftext(home.path()).write_stdin(data).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = parse_stdout(&output.stdout);
    assert_eq!(json["success"], true);
    assert_eq!(json["pages"], 1);
}

#[test]
fn unreadable_page_fails_whole_document() {
    let home = TempDir::new().unwrap();
    let data = build_pdf_with_broken_page(&["Readable first page", "Broken second page"], 1);

    let output = pdftext(home.path()).write_stdin(data).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = parse_stdout(&output.stdout);
    assert_eq!(json["success"], false);
    assert_eq!(json["text"], "");
    assert!(json.get("pages").is_none());
}

#[test]
fn garbage_input_is_extraction_failure() {
    let home = TempDir::new().unwrap();

    let output = pdftext(home.path())
        .write_stdin("this is plain text, not a PDF")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json = parse_stdout(&output.stdout);
    assert_eq!(json["success"], false);
    assert_eq!(json["text"], "");
    assert!(json["error"].as_str().unwrap().starts_with("failed to parse PDF"));
    assert!(json.get("pages").is_none());
}

#[test]
fn min_text_length_flag() {
    let home = TempDir::new().unwrap();

    pdftext(home.path())
        .args(["--min-text-length", "500"])
        .write_stdin(build_pdf(&["Not nearly five hundred characters"]))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Extracted text is too short or empty"));
}

#[cfg(target_os = "linux")]
#[test]
fn default_config_file_is_used() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("pdftext");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{"extraction": {"min_text_length": 500}}"#,
    )
    .unwrap();

    pdftext(home.path())
        .write_stdin(build_pdf(&["Not nearly five hundred characters"]))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Extracted text is too short or empty"));
}

#[test]
fn invalid_config_is_script_error() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.json");
    std::fs::write(&config, "{ not json").unwrap();

    pdftext(home.path())
        .arg("--config")
        .arg(&config)
        .write_stdin(build_pdf(&["Some perfectly readable text"]))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Script error: failed to load config"));
}

#[test]
fn logs_stay_off_stdout() {
    let home = TempDir::new().unwrap();

    let output = pdftext(home.path())
        .arg("-vvv")
        .write_stdin(build_pdf(&["Verbose run with logging"]))
        .output()
        .unwrap();

    let json = parse_stdout(&output.stdout);
    assert_eq!(json["success"], true);
}

#[test]
fn identical_input_identical_output() {
    let home = TempDir::new().unwrap();
    let data = build_pdf(&["Same bytes in", "same JSON out"]);

    let first = pdftext(home.path()).write_stdin(data.clone()).output().unwrap();
    let second = pdftext(home.path()).write_stdin(data).output().unwrap();

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}
