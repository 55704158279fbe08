//! Command-line tests for the `questions` binary

#![cfg(feature = "cli")]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn questions_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_questions"))
}

fn run(args: &[&str]) -> Output {
    Command::new(questions_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|err| panic!("failed to run questions: {err}"))
}

fn corpus_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("cats.txt"),
        "Dr. Smith studied cats for years. Dogs were ignored.",
    )
    .unwrap();
    fs::write(dir.path().join("birds.txt"), "Birds migrate south in winter.").unwrap();
    dir
}

#[test]
fn test_missing_corpus_prints_usage() {
    let output = run(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr was: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_prints_best_sentence() {
    let dir = corpus_dir();
    let corpus = dir.path().to_str().unwrap();

    let output = run(&[corpus, "--query", "who studied cats"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Dr. Smith studied cats for years.");
}

#[test]
fn test_json_output() {
    let dir = corpus_dir();
    let corpus = dir.path().to_str().unwrap();

    let output = run(&[corpus, "-q", "birds winter", "--json"]);

    assert!(output.status.success());
    let answer: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(answer["documents"][0]["id"], "birds.txt");
    assert_eq!(answer["sentences"][0]["text"], "Birds migrate south in winter.");
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    let output = run(&[missing.to_str().unwrap(), "-q", "cats"]);

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_zero_sentences_rejected() {
    let dir = corpus_dir();
    let corpus = dir.path().to_str().unwrap();

    let output = run(&[corpus, "-q", "cats", "-s", "0"]);

    assert!(!output.status.success());
}
