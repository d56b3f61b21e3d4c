//! CLI contract tests
//!
//! Runs the real binary against temporary corpora and checks output
//! formats, the `-o` flag, exit codes and config validation.

use std::path::Path;
use std::process::{Command, Output};

fn direction_bin() -> &'static str {
    env!("CARGO_BIN_EXE_direction")
}

fn setup_corpus() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("english.txt"), "The cat sat on the mat").unwrap();
    std::fs::write(
        dir.path().join("hebrew.txt"),
        "כל בני האדם נולדו בני חורין ושווים בערכם ובזכויותיהם",
    )
    .unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(direction_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_tsv_output_for_directory() {
    let dir = setup_corpus();
    let output = run(dir.path(), &[".", "--format", "tsv"]);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5, "header + two rows per source:\n{out}");
    assert!(lines[0].starts_with("Language\tSample Size\tToken Count\tText Type"));
    assert_eq!(
        lines[1],
        "English\t22\t6\tNormal\t0.1333\t0.2222\t2.2516\t1.4591\t-0.0889\t0.7925\t0.4556\t0.6411\t0.1856\tLeft-to-Right"
    );
    assert!(lines[2].starts_with("English\t22\t6\tReversed\t"));
    assert!(lines[3].starts_with("Hebrew\t"));
    assert!(lines[4].starts_with("Hebrew\t"));
}

#[test]
fn test_default_command_reads_current_directory() {
    let dir = setup_corpus();
    let output = run(dir.path(), &["--format", "csv"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.starts_with("Language,Sample Size,"));
    assert_eq!(out.lines().count(), 5);
}

#[test]
fn test_json_output_is_parseable() {
    let dir = setup_corpus();
    let output = run(dir.path(), &["analyze", "english.txt", "-f", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["results"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["results"][0]["verdict"], "LeftToRight");
    assert_eq!(parsed["results"][1]["verdict"], "RightToLeft");
    assert_eq!(parsed["stats"]["self_check_opposed"], 1);
}

#[test]
fn test_output_file_flag() {
    let dir = setup_corpus();
    let output = run(dir.path(), &["english.txt", "-f", "csv", "-o", "out.csv"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let saved = std::fs::read_to_string(dir.path().join("out.csv")).unwrap();
    assert!(saved.contains("English,22,6,Normal,"));
}

#[test]
fn test_sample_size_truncates() {
    let dir = setup_corpus();
    let output = run(dir.path(), &["english.txt", "-f", "tsv", "--sample-size", "11"]);
    assert!(output.status.success());
    assert!(stdout(&output).lines().nth(1).unwrap().starts_with("English\t11\t3\tNormal"));
}

#[test]
fn test_negative_sample_size_fails() {
    let dir = setup_corpus();
    let output = run(dir.path(), &["english.txt", "--sample-size=-10"]);
    assert!(!output.status.success());
}

#[test]
fn test_negative_sample_size_in_config_fails() {
    let dir = setup_corpus();
    std::fs::write(
        dir.path().join("direction.toml"),
        "[sampling]\ndefault_sample_size = -10\n",
    )
    .unwrap();

    let output = run(dir.path(), &["--format", "tsv"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("default_sample_size"), "stderr: {err}");
}

#[test]
fn test_config_sources_and_format() {
    let dir = setup_corpus();
    std::fs::write(
        dir.path().join("direction.toml"),
        r#"
[[sources]]
id = "Hebrew (UDHR)"
path = "hebrew.txt"

[output]
format = "tsv"
precision = 2
"#,
    )
    .unwrap();

    let output = run(dir.path(), &[]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 3);
    assert!(out.lines().nth(1).unwrap().starts_with("Hebrew (UDHR)\t"));
}

#[test]
fn test_nothing_analysable_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("blank.txt"), "a b c").unwrap();

    let output = run(dir.path(), &[".", "--format", "tsv"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "No results to display.\n");
}

#[test]
fn test_missing_file_is_reported_not_fatal() {
    let dir = setup_corpus();
    let output = run(
        dir.path(),
        &["english.txt", "missing.txt", "--format", "text", "--no-color"],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("SKIPPED"));
    assert!(out.contains("Missing"));
}

#[test]
fn test_text_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["text", "The cat sat on the mat", "--id", "Cats", "-f", "tsv"],
    );
    assert!(output.status.success());
    assert!(stdout(&output).lines().nth(1).unwrap().starts_with("Cats\t22\t6\tNormal"));
}

#[test]
fn test_init_then_refuse_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run(dir.path(), &["init"]).status.success());
    assert!(dir.path().join("direction.toml").exists());
    assert!(!run(dir.path(), &["init"]).status.success());
    assert!(run(dir.path(), &["init", "--force"]).status.success());
}

#[test]
fn test_output_without_extension_gets_format_extension() {
    let dir = setup_corpus();
    let output = run(dir.path(), &["english.txt", "-f", "json", "-o", "results"]);
    assert!(output.status.success());
    assert!(dir.path().join("results.json").exists());
}

#[test]
fn test_text_subcommand_precision() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["text", "The cat sat on the mat", "-f", "tsv", "--precision", "2"],
    );
    assert!(output.status.success());
    assert!(stdout(&output)
        .lines()
        .nth(1)
        .unwrap()
        .starts_with("Inline\t22\t6\tNormal\t0.13\t0.22\t"));

    std::fs::write(dir.path().join("direction.toml"), "[output]\nprecision = 3\n").unwrap();
    let output = run(dir.path(), &["text", "The cat sat on the mat", "-f", "tsv"]);
    assert!(output.status.success());
    assert!(stdout(&output)
        .lines()
        .nth(1)
        .unwrap()
        .starts_with("Inline\t22\t6\tNormal\t0.133\t0.222\t"));
}
