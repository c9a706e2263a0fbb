//! # Folio CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `folio ask` and `folio topics`.
//!

mod common;
use common::*;
use folio::chat::responses::ResponseTable;
use folio::chat::topic::Topic;
use predicates::prelude::*;

fn reply(topic: Topic) -> String {
    ResponseTable::defaults().get(topic).unwrap().to_string()
}

#[test]
fn test_ask_skills() {
    let (_dir, mut cmd) = isolated_config("");
    cmd.args(["ask", "What", "are", "your", "skills?"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", reply(Topic::Skills))));
}

#[test]
fn test_ask_is_case_insensitive() {
    let (_dir, mut cmd) = isolated_config("");
    cmd.args(["ask", "SKILLS"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", reply(Topic::Skills))));
}

#[test]
fn test_ask_topic_flag_shows_precedence() {
    let (_dir, mut cmd) = isolated_config("");
    cmd.args(["ask", "--topic", "mobile web app"])
        .assert()
        .success()
        .stdout("mobile\n");
}

#[test]
fn test_ask_unknown_falls_back() {
    let (_dir, mut cmd) = isolated_config("");
    cmd.args(["ask", "xyzzy123"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", reply(Topic::Fallback))));
}

#[test]
fn test_ask_blank_is_rejected() {
    let (_dir, mut cmd) = isolated_config("");
    cmd.args(["ask", "   "])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Input cannot be empty."));
}

#[test]
fn test_ask_uses_configured_override() {
    let (_dir, mut cmd) = isolated_config("[responses]\nthanks = \"Any time!\"\n");
    cmd.args(["ask", "thanks a lot"])
        .assert()
        .success()
        .stdout("Any time!\n");
}

#[test]
fn test_topics_lists_rules_in_order() {
    let (_dir, mut cmd) = isolated_config("");
    let output = cmd.arg("topics").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    let mobile = text.find("mobile").unwrap();
    let web = text.find("frontend").unwrap();
    let fallback = text.find("fallback").unwrap();
    assert!(mobile < web && web < fallback);
}
