use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CORPUS: &str = "the cat sat on the mat.\n\
the dog ran to the cat.\n\
\n\
a bird   sang on the wire and the dog sat.\n\
the mat was red and the wire was long\n";

fn workspace_with(corpus: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("corpus.txt");
    fs::write(&path, corpus).expect("write corpus");
    (dir, path)
}

fn run(args: &[&str]) -> String {
    let output = Command::cargo_bin("tweets-gen")
        .expect("binary exists")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("stdout is UTF-8")
}

#[test]
fn prints_one_numbered_line_per_tweet() {
    let (_dir, path) = workspace_with(CORPUS);
    let stdout = run(&["42", "3", path.to_str().unwrap()]);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("Tweet {}: ", i + 1);
        assert!(line.starts_with(&prefix), "unexpected line {line:?}");
        let words = line[prefix.len()..].split(' ').count();
        assert!((1..=21).contains(&words), "unexpected length in {line:?}");
    }
}

#[test]
fn same_seed_is_byte_identical() {
    let (_dir, path) = workspace_with(CORPUS);
    let path = path.to_str().unwrap();
    assert_eq!(run(&["7", "10", path]), run(&["7", "10", path]));
    assert_eq!(
        run(&["7", "10", path, "--jobs", "1"]),
        run(&["7", "10", path, "--jobs", "4"])
    );
}

#[test]
fn token_limit_restricts_vocabulary() {
    let (_dir, path) = workspace_with("the cat sat. the dog ran.\n");
    let stdout = run(&["1", "20", path.to_str().unwrap(), "3"]);
    for line in stdout.lines() {
        assert!(!line.contains("dog"), "word past the limit leaked: {line:?}");
        assert!(line.ends_with(": the cat sat.") || line.ends_with(": cat sat."), "{line:?}");
    }

    // A negative limit reads the whole file.
    let stdout = run(&["1", "50", path.to_str().unwrap(), "-1"]);
    assert!(stdout.lines().all(|line| line.ends_with("sat.") || line.ends_with("ran.")));
}

#[test]
fn single_word_corpus_yields_single_word_tweets() {
    let (_dir, path) = workspace_with("hello\n");
    let stdout = run(&["5", "2", path.to_str().unwrap()]);
    assert_eq!(stdout, "Tweet 1: hello\nTweet 2: hello\n");
}

#[test]
fn json_output_reports_termination() {
    let (_dir, path) = workspace_with("the cat sat.\n");
    let stdout = run(&["3", "2", path.to_str().unwrap(), "--json"]);
    for (i, line) in stdout.lines().enumerate() {
        let record: Value = serde_json::from_str(line).expect("valid JSON");
        assert_eq!(record["index"], i + 1);
        assert_eq!(record["termination"], "punctuation");
        assert!(record["text"].as_str().unwrap().ends_with("sat."));
    }
}

#[test]
fn rust_log_overrides_default_level() {
    let (_dir, path) = workspace_with(CORPUS);
    let stderr = |cmd: &mut Command| {
        let output = cmd.assert().success().get_output().stderr.clone();
        String::from_utf8(output).expect("stderr is UTF-8")
    };

    let mut quiet = Command::cargo_bin("tweets-gen").expect("binary exists");
    quiet.env_remove("RUST_LOG").args(["1", "1", path.to_str().unwrap()]);
    assert!(!stderr(&mut quiet).contains("built chain"));

    let mut debug = Command::cargo_bin("tweets-gen").expect("binary exists");
    debug.env("RUST_LOG", "debug").args(["1", "1", path.to_str().unwrap()]);
    assert!(stderr(&mut debug).contains("built chain"));

    let mut verbose = Command::cargo_bin("tweets-gen").expect("binary exists");
    verbose.env_remove("RUST_LOG").args(["-vv", "1", "1", path.to_str().unwrap()]);
    assert!(stderr(&mut verbose).contains("built chain"));
}

#[test]
fn latin1_corpus_is_not_fatal() {
    let dir = tempfile::tempdir().expect("create tempdir");
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"the caf\xe9 sat.\n").expect("write corpus");
    let stdout = run(&["2", "3", path.to_str().unwrap()]);
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn missing_file_fails() {
    Command::cargo_bin("tweets-gen")
        .expect("binary exists")
        .args(["1", "1", "/definitely/not/a/corpus.txt"])
        .assert()
        .failure();
}

#[test]
fn wrong_argument_count_fails() {
    Command::cargo_bin("tweets-gen")
        .expect("binary exists")
        .args(["1", "1"])
        .assert()
        .failure();
}

#[test]
fn all_terminal_corpus_fails_instead_of_hanging() {
    let (_dir, path) = workspace_with("done. over.\n");
    Command::cargo_bin("tweets-gen")
        .expect("binary exists")
        .args(["1", "1", path.to_str().unwrap()])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure();
}
