use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("pagetext").unwrap()
}

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn help_flag_prints_usage_with_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("words"))
        .stdout(predicate::str::contains("lines"));
}

#[test]
fn extract_subcommand_help() {
    cmd()
        .args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT_FILE"))
        .stdout(predicate::str::contains("--threshold"))
        .stdout(predicate::str::contains("--word-tolerance"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn extract_missing_file_reports_not_found() {
    cmd()
        .args(["extract", "/definitely/not/here/report.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: The file was not found. Please provide the correct file path.",
        ));
}

#[test]
fn extract_rejects_unknown_output_format() {
    let file = temp_file("%PDF-1.4");

    cmd()
        .arg("extract")
        .arg(file.path())
        .args(["-o", "jsn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format 'jsn'"));
}

#[test]
fn words_missing_file_reports_not_found() {
    cmd()
        .args(["words", "/definitely/not/here/report.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: The file was not found. Please provide the correct file path.",
        ));
}

#[test]
fn lines_rebuilds_groups_from_json() {
    // "Net" and "income" are stacked with a small drift; "Header" is far away.
    let file = temp_file(
        r#"[
            {"text": "income", "left": 99, "top": 108, "right": 109, "bottom": 116},
            {"text": "Header", "left": 295, "top": 6, "right": 305, "bottom": 14},
            {"text": "Net", "left": 95, "top": 96, "right": 105, "bottom": 104}
        ]"#,
    );

    cmd()
        .arg("lines")
        .arg(file.path())
        .assert()
        .success()
        .stdout("Header\nNet income\n");
}

#[test]
fn lines_threshold_flag_changes_grouping() {
    let file = temp_file(
        r#"[
            {"text": "top", "left": -5, "top": -4, "right": 5, "bottom": 4},
            {"text": "bottom", "left": 13, "top": 16, "right": 23, "bottom": 24}
        ]"#,
    );

    cmd()
        .arg("lines")
        .arg(file.path())
        .assert()
        .success()
        .stdout("top\nbottom\n");

    cmd()
        .arg("lines")
        .arg(file.path())
        .args(["--threshold", "25"])
        .assert()
        .success()
        .stdout("top bottom\n");
}

#[test]
fn invalid_threshold_is_rejected() {
    let file = temp_file("[]");

    cmd()
        .arg("lines")
        .arg(file.path())
        .args(["--threshold", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid options"));
}

#[test]
fn config_file_supplies_defaults() {
    let words = temp_file(
        r#"[
            {"text": "top", "left": -5, "top": -4, "right": 5, "bottom": 4},
            {"text": "bottom", "left": 13, "top": 16, "right": 23, "bottom": 24}
        ]"#,
    );
    let config = temp_file(r#"{ "line_threshold": 30 }"#);

    cmd()
        .arg("lines")
        .arg(words.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout("top bottom\n");
}
