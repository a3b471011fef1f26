//! End-to-end tests for the `sift` CLI.

use assert_cmd::Command;
use predicates::prelude::*;

/// Builds a command for the `sift` binary.
fn sift() -> Command {
    Command::cargo_bin("sift").unwrap()
}

#[test]
fn parse_prints_indented_tree() {
    sift()
        .args(["parse", "a AND NOT b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("And"))
        .stdout(predicate::str::contains("Not"))
        .stdout(predicate::str::contains("Leaf(\"a\")"));
}

#[test]
fn parse_json_outputs_tagged_tree() {
    sift()
        .args(["parse", "--json", "a OR b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Or\""))
        .stdout(predicate::str::contains("\"Leaf\": \"a\""));
}

#[test]
fn parse_stemmed_rewrites_leaves() {
    sift()
        .args(["parse", "--stem", "running"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leaf(\"run\")"));
}

#[test]
fn test_reports_match() {
    sift()
        .args([
            "test",
            "(#thehills OR thehills)",
            "Can't stop watching #TheHills tonight",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("match"));
}

#[test]
fn test_no_match_exits_nonzero() {
    sift()
        .args(["test", "hills AND mtv", "nothing relevant here"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn syntax_error_prints_caret_diagnostic() {
    sift()
        .args(["parse", "(a AND b"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("query syntax error"))
        .stderr(predicate::str::contains("^"));
}

#[test]
fn terms_lists_positive_leaves_only() {
    sift()
        .args(["terms", "a AND NOT b"])
        .assert()
        .success()
        .stdout("a\n");
}

#[test]
fn filters_table_lists_demo_names() {
    sift()
        .args(["filters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hills"))
        .stdout(predicate::str::contains("#thehills"));
}
